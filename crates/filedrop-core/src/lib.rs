//! filedrop-core: Pure selection validation and region state (sans-IO).
//!
//! Decides whether a file selection is accepted and tracks the
//! transient UI state of an upload region: drag highlight and the
//! current status message.
//!
//! This crate has **no browser dependencies** -- it operates on file
//! names and plain state and is tested natively. All DOM and event
//! interaction lives in `filedrop-ui`.

pub mod config;
pub mod message;
pub mod state;
pub mod validate;

pub use config::UploadConfig;
pub use message::{MessageKind, StatusMessage};
pub use state::RegionState;
pub use validate::{ValidationError, Verdict, selection_verdict};
