//! Blob object URL creation with scoped release.
//!
//! Dioxus has no built-in way to display in-memory bytes as an image.
//! This module creates a `Blob` from raw bytes and wraps the resulting
//! object URL in a guard that revokes it on drop, so a replaced or
//! torn-down preview never leaks its Blob reference.
//!
//! All functions in this module require a browser environment
//! (`wasm32-unknown-unknown` target).

use wasm_bindgen::JsValue;
use web_sys::BlobPropertyBag;

/// Errors that can occur when creating an object URL.
#[derive(Debug, thiserror::Error)]
pub enum ObjectUrlError {
    /// A browser API call returned an error.
    #[error("browser API error: {0}")]
    JsError(String),
}

impl From<JsValue> for ObjectUrlError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// An owned Blob object URL, revoked when dropped.
///
/// Hold the guard for as long as the URL is referenced (e.g. in a
/// signal backing an `<img src>`). Replacing or dropping the guard
/// releases the underlying Blob via `URL.revokeObjectURL`, so repeated
/// uploads cannot accumulate unreleased Blobs.
#[derive(Debug)]
pub struct ObjectUrl {
    url: String,
}

impl ObjectUrl {
    /// Create an object URL for `bytes` with the given MIME type.
    ///
    /// # Errors
    ///
    /// Returns [`ObjectUrlError::JsError`] if `Blob` construction or
    /// `URL.createObjectURL` fails.
    pub fn from_bytes(bytes: &[u8], mime_type: &str) -> Result<Self, ObjectUrlError> {
        // 1. Create a Uint8Array from the bytes.
        let uint8_array = js_sys::Uint8Array::from(bytes);
        let parts = js_sys::Array::new();
        parts.push(&uint8_array);

        // 2. Create a Blob with the requested MIME type.
        let opts = BlobPropertyBag::new();
        opts.set_type(mime_type);
        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &opts)?;

        // 3. Generate the object URL.
        let url = web_sys::Url::create_object_url_with_blob(&blob)?;
        Ok(Self { url })
    }

    /// The URL string, valid until the guard is dropped.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.url
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        // Best-effort: the URL may already be gone during teardown.
        let _ = web_sys::Url::revoke_object_url(&self.url);
    }
}
