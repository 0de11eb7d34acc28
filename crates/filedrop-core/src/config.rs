//! Host-supplied validation configuration.

use serde::{Deserialize, Serialize};

/// Constraints applied to a file selection before it is accepted.
///
/// Both fields are optional: an absent `max_count` accepts any number
/// of files per action, and an absent `allowed_extensions` accepts any
/// file name. The configuration is checked when a selection arrives,
/// not at construction, and is fixed for the lifetime of a region
/// instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadConfig {
    /// Maximum number of files accepted per drop or picker action.
    pub max_count: Option<usize>,

    /// File name suffixes accepted for upload, compared
    /// case-insensitively. Entries work with or without a leading dot
    /// (`"jpg"` and `".jpg"` are equivalent).
    pub allowed_extensions: Option<Vec<String>>,
}
