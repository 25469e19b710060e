//! Resolving per-item image directives against the reference photos

use futures::future::join_all;
use log::{debug, warn};

use super::service::GenerativeService;
use crate::model::ImageRef;

/// Appended to every synthesis instruction so the product itself is kept.
pub const PRESERVE_PRODUCT_SUFFIX: &str = "Maintain the main object in the image exactly as it is. Do not transform or replace the product. High quality, photorealistic, cinematic lighting.";

/// Where an item's picture should come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageDirective {
    /// No usable hint.
    None,
    /// Use the reference photo at this index.
    UseReference(usize),
    /// Edit a reference photo (index, or the first) with an instruction.
    Synthesize {
        base: Option<usize>,
        instruction: String,
    },
}

/// What to do with items whose directive did not produce an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FallbackPolicy {
    /// Features and reasons cycle through the reference photos by position.
    /// Box items stay empty so the surface shows its icon.
    #[default]
    CycleReferences,
    /// Leave every unresolved item empty.
    Placeholder,
}

/// Which list an item belongs to; only feature-like items cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSlot {
    FeatureLike,
    BoxItem,
}

pub fn synthesis_prompt(instruction: &str) -> String {
    format!("{}. {}", instruction.trim_end_matches('.'), PRESERVE_PRODUCT_SUFFIX)
}

async fn resolve_one(
    service: &dyn GenerativeService,
    directive: &ImageDirective,
    position: usize,
    references: &[ImageRef],
    slot: ImageSlot,
    fallback: FallbackPolicy,
) -> Option<ImageRef> {
    let resolved = match directive {
        ImageDirective::UseReference(i) => {
            let found = references.get(*i).cloned();
            if found.is_none() {
                warn!("item {} references missing image {}", position, i);
            }
            found
        }
        ImageDirective::Synthesize { base, instruction } => {
            let base_index = base.filter(|i| *i < references.len()).unwrap_or(0);
            match references.get(base_index) {
                Some(base_image) => {
                    let prompt = synthesis_prompt(instruction);
                    match service.edit_image(base_image, &prompt).await {
                        Ok(Some(img)) => Some(img),
                        Ok(None) => {
                            warn!("image edit for item {} returned no image", position);
                            None
                        }
                        Err(e) => {
                            warn!("image edit for item {} failed: {}", position, e);
                            None
                        }
                    }
                }
                None => None,
            }
        }
        ImageDirective::None => None,
    };

    if resolved.is_some() || references.is_empty() {
        return resolved;
    }
    match (fallback, slot) {
        (FallbackPolicy::CycleReferences, ImageSlot::FeatureLike) => {
            debug!("item {} falls back to reference {}", position, position % references.len());
            Some(references[position % references.len()].clone())
        }
        _ => None,
    }
}

/// Resolve a whole list. Edits run concurrently; results keep list order.
pub async fn resolve_images(
    service: &dyn GenerativeService,
    directives: &[ImageDirective],
    references: &[ImageRef],
    slot: ImageSlot,
    fallback: FallbackPolicy,
) -> Vec<Option<ImageRef>> {
    join_all(
        directives
            .iter()
            .enumerate()
            .map(|(i, d)| resolve_one(service, d, i, references, slot, fallback)),
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::request::AssistantRequest;
    use crate::{Error, Result};
    use futures::future::BoxFuture;
    use futures::FutureExt;
    use std::sync::Mutex;

    /// Returns an edited image unless the instruction mentions "fail".
    struct EditingService {
        prompts: Mutex<Vec<String>>,
    }

    impl GenerativeService for EditingService {
        fn generate_content<'a>(
            &'a self,
            _req: &'a AssistantRequest,
        ) -> BoxFuture<'a, Result<String>> {
            async { Ok("{}".to_string()) }.boxed()
        }

        fn edit_image<'a>(
            &'a self,
            base: &'a ImageRef,
            instruction: &'a str,
        ) -> BoxFuture<'a, Result<Option<ImageRef>>> {
            async move {
                self.prompts.lock().unwrap().push(instruction.to_string());
                if instruction.contains("fail") {
                    Err(Error::Network("boom".to_string()))
                } else {
                    Ok(Some(ImageRef::new(format!("edited:{}", base.as_str()))))
                }
            }
            .boxed()
        }
    }

    fn refs() -> Vec<ImageRef> {
        vec![ImageRef::new("r0"), ImageRef::new("r1")]
    }

    fn service() -> EditingService {
        EditingService {
            prompts: Mutex::new(Vec::new()),
        }
    }

    #[tokio::test]
    async fn upload_and_synthesize() {
        let svc = service();
        let directives = vec![
            ImageDirective::UseReference(1),
            ImageDirective::Synthesize {
                base: Some(1),
                instruction: "add a bolt".to_string(),
            },
            ImageDirective::Synthesize {
                base: Some(9),
                instruction: "add a cloud".to_string(),
            },
        ];
        let cycle = FallbackPolicy::CycleReferences;
        let out = resolve_images(&svc, &directives, &refs(), ImageSlot::FeatureLike, cycle).await;
        assert_eq!(out[0], Some(ImageRef::new("r1")));
        assert_eq!(out[1], Some(ImageRef::new("edited:r1")));
        assert_eq!(out[2], Some(ImageRef::new("edited:r0")));
        let prompts = svc.prompts.lock().unwrap().clone();
        assert!(prompts.iter().all(|p| p.ends_with(PRESERVE_PRODUCT_SUFFIX)));
    }

    #[tokio::test]
    async fn unresolved_feature_cycles_but_box_item_stays_empty() {
        let svc = service();
        let directives = vec![
            ImageDirective::None,
            ImageDirective::None,
            ImageDirective::Synthesize {
                base: None,
                instruction: "fail".to_string(),
            },
        ];
        let cycle = FallbackPolicy::CycleReferences;
        let feats = resolve_images(&svc, &directives, &refs(), ImageSlot::FeatureLike, cycle).await;
        assert_eq!(
            feats,
            vec![
                Some(ImageRef::new("r0")),
                Some(ImageRef::new("r1")),
                Some(ImageRef::new("r0"))
            ]
        );
        let boxes = resolve_images(&svc, &directives, &refs(), ImageSlot::BoxItem, cycle).await;
        assert!(boxes.iter().all(Option::is_none));
        let placeholder = FallbackPolicy::Placeholder;
        let plain =
            resolve_images(&svc, &directives, &refs(), ImageSlot::FeatureLike, placeholder).await;
        assert!(plain.iter().all(Option::is_none));
    }

    #[test]
    fn prompt_has_single_period() {
        assert_eq!(
            synthesis_prompt("add a bolt."),
            format!("add a bolt. {}", PRESERVE_PRODUCT_SUFFIX)
        );
    }
}
