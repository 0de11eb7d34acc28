//! Selection validation shared by the drop and file-picker paths.

use crate::config::UploadConfig;

/// Why a selection was rejected.
///
/// These are user-facing outcomes, not faults: the `Display` text is
/// shown verbatim as the region's error message and the selection is
/// discarded. Nothing propagates to the host.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// More files were selected than `max_count` allows.
    #[error("at most {max} files may be uploaded per action")]
    TooManyFiles {
        /// The configured limit.
        max: usize,
    },

    /// A file name does not end with any allowed extension.
    #[error("unsupported file type {name:?}: only {} files are allowed", .allowed.join(", "))]
    UnsupportedExtension {
        /// Name of the first offending file.
        name: String,
        /// The configured allow-list, verbatim.
        allowed: Vec<String>,
    },
}

/// Outcome of validating one file selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The selection contained no files; nothing to do.
    Empty,
    /// The selection passed every configured check.
    Accepted,
    /// The selection violated a constraint and must be discarded.
    Rejected(ValidationError),
}

/// Validate an ordered file selection (by name) against `config`.
///
/// Applied identically whether the files arrived via drag-and-drop or
/// the native picker. Checks run in order: count, then extensions,
/// then emptiness -- an oversized selection is rejected for its count
/// even if every name would also fail the extension check, and an
/// empty selection short-circuits to [`Verdict::Empty`] with no
/// message and no callback.
#[must_use]
pub fn selection_verdict<S: AsRef<str>>(names: &[S], config: &UploadConfig) -> Verdict {
    if let Some(max) = config.max_count
        && names.len() > max
    {
        return Verdict::Rejected(ValidationError::TooManyFiles { max });
    }

    if let Some(allowed) = &config.allowed_extensions
        && let Some(name) = names
            .iter()
            .find(|name| !allowed.iter().any(|ext| has_suffix(name.as_ref(), ext)))
    {
        return Verdict::Rejected(ValidationError::UnsupportedExtension {
            name: name.as_ref().to_owned(),
            allowed: allowed.clone(),
        });
    }

    if names.is_empty() {
        Verdict::Empty
    } else {
        Verdict::Accepted
    }
}

/// Case-insensitive suffix match of `ext` against `name`.
///
/// Full Unicode lowercasing rather than a byte-slice comparison, so
/// non-ASCII file names never split on a char boundary.
fn has_suffix(name: &str, ext: &str) -> bool {
    name.to_lowercase().ends_with(&ext.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(max_count: Option<usize>, allowed: &[&str]) -> UploadConfig {
        UploadConfig {
            max_count,
            allowed_extensions: if allowed.is_empty() {
                None
            } else {
                Some(allowed.iter().map(|s| (*s).to_owned()).collect())
            },
        }
    }

    // --- Count limit ---

    #[test]
    fn over_count_is_rejected() {
        let verdict = selection_verdict(&["a.jpg", "b.png"], &config(Some(1), &[]));
        assert_eq!(
            verdict,
            Verdict::Rejected(ValidationError::TooManyFiles { max: 1 })
        );
    }

    #[test]
    fn at_count_is_accepted() {
        let verdict = selection_verdict(&["a.jpg", "b.png"], &config(Some(2), &[]));
        assert_eq!(verdict, Verdict::Accepted);
    }

    #[test]
    fn absent_count_is_unlimited() {
        let names: Vec<String> = (0..100).map(|i| format!("file{i}.jpg")).collect();
        assert_eq!(selection_verdict(&names, &config(None, &[])), Verdict::Accepted);
    }

    #[test]
    fn count_is_checked_before_extensions() {
        // Both constraints are violated; the count message wins.
        let verdict = selection_verdict(&["a.txt", "b.txt"], &config(Some(1), &["jpg"]));
        assert_eq!(
            verdict,
            Verdict::Rejected(ValidationError::TooManyFiles { max: 1 })
        );
    }

    // --- Extension allow-list ---

    #[test]
    fn disallowed_extension_is_rejected() {
        let verdict = selection_verdict(&["a.txt"], &config(Some(1), &["jpg", "png", "gif"]));
        assert_eq!(
            verdict,
            Verdict::Rejected(ValidationError::UnsupportedExtension {
                name: "a.txt".to_owned(),
                allowed: vec!["jpg".to_owned(), "png".to_owned(), "gif".to_owned()],
            })
        );
    }

    #[test]
    fn one_bad_file_rejects_the_whole_selection() {
        let verdict = selection_verdict(&["a.jpg", "b.txt", "c.png"], &config(None, &["jpg", "png"]));
        assert!(matches!(
            verdict,
            Verdict::Rejected(ValidationError::UnsupportedExtension { ref name, .. }) if name == "b.txt"
        ));
    }

    #[test]
    fn extension_match_is_case_insensitive() {
        let cfg = config(Some(1), &["jpg", "png", "gif"]);
        assert_eq!(selection_verdict(&["a.JPG"], &cfg), Verdict::Accepted);
        assert_eq!(selection_verdict(&["photo.Png"], &cfg), Verdict::Accepted);
    }

    #[test]
    fn extension_entries_may_carry_a_leading_dot() {
        let cfg = config(None, &[".jpg", ".PNG"]);
        assert_eq!(selection_verdict(&["a.jpg"], &cfg), Verdict::Accepted);
        assert_eq!(selection_verdict(&["b.png"], &cfg), Verdict::Accepted);
        assert!(matches!(selection_verdict(&["c.gif"], &cfg), Verdict::Rejected(_)));
    }

    #[test]
    fn non_ascii_names_are_handled() {
        let cfg = config(None, &["jpg"]);
        assert_eq!(selection_verdict(&["照片.jpg"], &cfg), Verdict::Accepted);
        assert!(matches!(selection_verdict(&["照片"], &cfg), Verdict::Rejected(_)));
    }

    #[test]
    fn absent_extensions_accept_anything() {
        assert_eq!(
            selection_verdict(&["weird.bin"], &config(None, &[])),
            Verdict::Accepted
        );
    }

    // --- Empty selection ---

    #[test]
    fn empty_selection_is_empty_verdict() {
        let names: [&str; 0] = [];
        assert_eq!(
            selection_verdict(&names, &config(Some(1), &["jpg"])),
            Verdict::Empty
        );
    }

    #[test]
    fn empty_selection_without_config_is_empty_verdict() {
        let names: [&str; 0] = [];
        assert_eq!(selection_verdict(&names, &UploadConfig::default()), Verdict::Empty);
    }

    // --- Demo scenario: max_count=1, formats=[jpg, png, gif] ---

    #[test]
    fn demo_scenario() {
        let cfg = config(Some(1), &["jpg", "png", "gif"]);

        // Two files: rejected for count.
        assert_eq!(
            selection_verdict(&["a.jpg", "b.png"], &cfg),
            Verdict::Rejected(ValidationError::TooManyFiles { max: 1 })
        );

        // One file with a disallowed extension: rejected.
        assert!(matches!(
            selection_verdict(&["a.txt"], &cfg),
            Verdict::Rejected(ValidationError::UnsupportedExtension { .. })
        ));

        // One file, uppercase extension: accepted.
        assert_eq!(selection_verdict(&["a.JPG"], &cfg), Verdict::Accepted);

        // Zero files: nothing happens.
        let none: [&str; 0] = [];
        assert_eq!(selection_verdict(&none, &cfg), Verdict::Empty);
    }

    // --- Display strings ---

    #[test]
    fn too_many_files_display() {
        let err = ValidationError::TooManyFiles { max: 2 };
        assert_eq!(err.to_string(), "at most 2 files may be uploaded per action");
    }

    #[test]
    fn unsupported_extension_display_lists_allowed() {
        let err = ValidationError::UnsupportedExtension {
            name: "a.txt".to_owned(),
            allowed: vec!["jpg".to_owned(), "png".to_owned(), "gif".to_owned()],
        };
        assert_eq!(
            err.to_string(),
            "unsupported file type \"a.txt\": only jpg, png, gif files are allowed"
        );
    }
}
