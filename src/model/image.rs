//! Opaque image handles stored on the product model

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// MIME type assumed when a handle does not carry one.
pub const DEFAULT_MIME: &str = "image/png";

/// A reference to an image: usually a `data:` URL, but any string the host
/// can display (a path, a remote URL) is accepted and carried untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(handle: impl Into<String>) -> Self {
        ImageRef(handle.into())
    }

    /// Encode raw bytes as a base64 `data:` URL.
    pub fn from_bytes(mime: &str, bytes: &[u8]) -> Self {
        ImageRef(format!("data:{};base64,{}", mime, STANDARD.encode(bytes)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_data_url(&self) -> bool {
        self.0.starts_with("data:")
    }

    /// MIME type declared by a `data:` URL, falling back to PNG.
    pub fn mime_type(&self) -> &str {
        self.0
            .strip_prefix("data:")
            .and_then(|rest| rest.split([';', ',']).next())
            .filter(|m| m.contains('/'))
            .unwrap_or(DEFAULT_MIME)
    }

    /// The base64 payload of a `data:` URL (everything after the first comma).
    pub fn base64_payload(&self) -> Option<&str> {
        if !self.is_data_url() {
            return None;
        }
        self.0.split_once(',').map(|(_, data)| data)
    }

    /// Decode a `data:` URL into raw bytes.
    pub fn decode(&self) -> Result<Vec<u8>> {
        let payload = self
            .base64_payload()
            .ok_or_else(|| Error::InvalidInput("image handle is not a data URL".to_string()))?;
        STANDARD
            .decode(payload)
            .map_err(|e| Error::InvalidInput(format!("image payload is not base64: {}", e)))
    }
}

impl From<String> for ImageRef {
    fn from(s: String) -> Self {
        ImageRef(s)
    }
}

impl From<&str> for ImageRef {
    fn from(s: &str) -> Self {
        ImageRef(s.to_string())
    }
}
