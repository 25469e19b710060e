//! The external generative-content service

use futures::future::BoxFuture;

use super::request::AssistantRequest;
use crate::model::ImageRef;
use crate::Result;

/// Text generation plus image editing.
///
/// `generate_content` returns the raw structured-content text; parsing is
/// done by the caller. `edit_image` returns `Ok(None)` when the service
/// answered without an image.
pub trait GenerativeService: Send + Sync {
    fn generate_content<'a>(
        &'a self,
        request: &'a AssistantRequest,
    ) -> BoxFuture<'a, Result<String>>;

    fn edit_image<'a>(
        &'a self,
        base: &'a ImageRef,
        instruction: &'a str,
    ) -> BoxFuture<'a, Result<Option<ImageRef>>>;
}
