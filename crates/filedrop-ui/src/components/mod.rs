//! Dioxus UI components for filedrop.
//!
//! Provides the upload region: a drag-and-drop surface that doubles
//! as a click-to-browse file picker.

mod upload_region;

pub use upload_region::UploadRegion;
