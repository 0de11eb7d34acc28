//! filedrop-ui: Browser I/O and Dioxus component library.
//!
//! Provides the [`UploadRegion`] drag-and-drop upload component, the
//! [`ObjectUrl`] guard used to display uploaded bytes, and the
//! component stylesheet for hosts to inject.

pub mod components;
pub mod object_url;

pub use components::UploadRegion;
pub use object_url::{ObjectUrl, ObjectUrlError};

/// Styles for the components in this crate. Inject once per page:
///
/// ```ignore
/// style { dangerous_inner_html: filedrop_ui::STYLESHEET }
/// ```
pub const STYLESHEET: &str = include_str!("filedrop.css");
