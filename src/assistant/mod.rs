//! Assistant flow: free-text details and reference photos in, a complete
//! `ProductModel` out.
//!
//! The flow is all-or-nothing. Any failure (invalid input, transport error,
//! malformed response) is returned before a model is built, so callers keep
//! their current model. Individual image edits are best effort and never
//! abort the flow.

pub mod images;
pub mod request;
pub mod response;
pub mod service;

#[cfg(feature = "assistant")]
pub mod gemini;

use log::info;

pub use images::{FallbackPolicy, ImageDirective, ImageSlot, PRESERVE_PRODUCT_SUFFIX};
pub use request::AssistantRequest;
pub use response::{GeneratedContent, ResolvedImages};
pub use service::GenerativeService;

#[cfg(feature = "assistant")]
pub use gemini::GeminiService;

use crate::model::ProductModel;
use crate::Result;

/// Environment variables checked, in order, when no key is configured.
pub const API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

/// Generative service connection settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantConfig {
    pub endpoint: String,
    pub text_model: String,
    pub image_model: String,
    /// Falls back to the `API_KEY_VARS` environment variables.
    pub api_key: Option<String>,
    pub timeout_ms: u64,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://generativelanguage.googleapis.com/".to_string(),
            text_model: "gemini-2.5-flash".to_string(),
            image_model: "gemini-2.5-flash-image".to_string(),
            api_key: None,
            timeout_ms: 120_000,
        }
    }
}

impl AssistantConfig {
    pub fn resolved_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| {
                API_KEY_VARS
                    .iter()
                    .filter_map(|v| std::env::var(v).ok())
                    .find(|k| !k.trim().is_empty())
            })
    }
}

/// Run the whole flow against `service`.
///
/// The main image is the first reference photo. Features, reasons and box
/// items have their images resolved concurrently per list.
pub async fn generate_model(
    service: &dyn GenerativeService,
    request: &AssistantRequest,
    fallback: FallbackPolicy,
) -> Result<ProductModel> {
    request.validate()?;
    info!(
        "generating content for '{}' with {} reference images",
        request.product_name,
        request.reference_images.len()
    );

    let raw = service.generate_content(request).await?;
    let content = GeneratedContent::parse(&raw)?;

    let refs = &request.reference_images;
    let feature_directives = content.feature_directives();
    let reason_directives = content.reason_directives();
    let box_directives = content.box_item_directives();
    let feature_like = ImageSlot::FeatureLike;
    let (features, reasons, box_items) = futures::join!(
        images::resolve_images(service, &feature_directives, refs, feature_like, fallback),
        images::resolve_images(service, &reason_directives, refs, feature_like, fallback),
        images::resolve_images(service, &box_directives, refs, ImageSlot::BoxItem, fallback),
    );

    let model = content.into_model(ResolvedImages {
        main: refs.first().cloned(),
        features,
        reasons,
        box_items,
    });
    info!(
        "generated {} features, {} reasons, {} box items",
        model.features.len(),
        model.reasons.len(),
        model.box_contents_items.len()
    );
    Ok(model)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ImageRef;
    use crate::Error;
    use futures::future::BoxFuture;
    use futures::FutureExt;

    struct CannedService(&'static str);

    impl GenerativeService for CannedService {
        fn generate_content<'a>(
            &'a self,
            _req: &'a AssistantRequest,
        ) -> BoxFuture<'a, Result<String>> {
            let text = self.0.to_string();
            async move { Ok(text) }.boxed()
        }

        fn edit_image<'a>(
            &'a self,
            _base: &'a ImageRef,
            _instruction: &'a str,
        ) -> BoxFuture<'a, Result<Option<ImageRef>>> {
            async { Ok(None) }.boxed()
        }
    }

    fn request() -> AssistantRequest {
        AssistantRequest::new(
            "Tablet",
            "7 inch screen",
            vec![ImageRef::new("p0"), ImageRef::new("p1")],
        )
    }

    #[tokio::test]
    async fn builds_model_with_main_image_and_fallbacks() {
        let svc = CannedService(
            r#"{"headline":"Big","features":[{"title":"A"},{"title":"B"},{"title":"C"}],
                "boxContentsItems":[{"text":"Cable"}]}"#,
        );
        let m = generate_model(&svc, &request(), FallbackPolicy::CycleReferences)
            .await
            .unwrap();
        assert_eq!(m.headline, "Big");
        assert_eq!(m.image, Some(ImageRef::new("p0")));
        let imgs: Vec<_> = m.features.iter().map(|f| f.image.clone()).collect();
        assert_eq!(
            imgs,
            vec![
                Some(ImageRef::new("p0")),
                Some(ImageRef::new("p1")),
                Some(ImageRef::new("p0"))
            ]
        );
        assert_eq!(m.box_contents_items[0].image, None);
        assert_eq!(m.box_contents_items[0].count, "1x");
    }

    #[tokio::test]
    async fn invalid_input_never_calls_service() {
        let svc = CannedService("{}");
        let req = AssistantRequest::new("Tablet", "details", vec![]);
        let err = generate_model(&svc, &req, FallbackPolicy::default()).await.unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[tokio::test]
    async fn malformed_response_is_validation_error() {
        let svc = CannedService("I cannot help with that");
        let err = generate_model(&svc, &request(), FallbackPolicy::default())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn explicit_key_wins() {
        let cfg = AssistantConfig {
            api_key: Some("abc".to_string()),
            ..AssistantConfig::default()
        };
        assert_eq!(cfg.resolved_api_key().as_deref(), Some("abc"));
    }
}
