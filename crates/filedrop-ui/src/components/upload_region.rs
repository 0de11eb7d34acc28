//! Drag-and-drop / click-to-browse upload region.

use dioxus::html::{FileData, HasFileData};
use dioxus::logger::tracing;
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::LdUpload;
use filedrop_core::{
    MessageKind, RegionState, StatusMessage, UploadConfig, Verdict, selection_verdict,
};

/// How long a status message stays visible before auto-dismissing.
const MESSAGE_DISMISS_MS: u32 = 4_000;

/// Props for the [`UploadRegion`] component.
#[derive(Props, Clone, PartialEq)]
pub struct UploadRegionProps {
    /// Called exactly once with the full, unmodified selection after
    /// it passes validation.
    on_upload: EventHandler<Vec<FileData>>,
    /// Maximum number of files accepted per action; unlimited when absent.
    max_count: Option<usize>,
    /// Allowed file name suffixes, compared case-insensitively;
    /// unrestricted when absent.
    allowed_extensions: Option<Vec<String>>,
    /// Idle content shown inside the region; a built-in placeholder is
    /// rendered when absent.
    placeholder: Option<Element>,
}

/// A full-surface drop zone that doubles as a file-picker button.
///
/// Files arriving via drag-and-drop or the native picker go through
/// one shared validation pass (count limit, extension allow-list).
/// Rejections and successes surface as a transient overlay message
/// that auto-dismisses after [`MESSAGE_DISMISS_MS`]; accepted
/// selections are handed to `on_upload`. The whole region is a
/// `<label>` for a hidden file input, so clicking anywhere on it opens
/// the native picker.
#[component]
pub fn UploadRegion(props: UploadRegionProps) -> Element {
    let mut state = use_signal(RegionState::new);
    // Bumped on every shown message; a pending dismiss timer only
    // clears the message it was scheduled for, so a newer message (or
    // a dragenter, which clears eagerly) supersedes it.
    let mut message_generation = use_signal(|| 0_u64);

    let config = UploadConfig {
        max_count: props.max_count,
        allowed_extensions: props.allowed_extensions.clone(),
    };

    // Install a message and schedule its auto-dismissal. The timer is
    // a scoped task: unmounting the region cancels it.
    let mut show_message = move |message: StatusMessage| {
        state.write().show_message(message);
        message_generation += 1;
        let my_generation = *message_generation.peek();
        spawn(async move {
            gloo_timers::future::TimeoutFuture::new(MESSAGE_DISMISS_MS).await;
            if *message_generation.peek() == my_generation {
                state.write().dismiss_message();
            }
        });
    };

    // Validate and forward a selection. Shared by the drop and
    // file-picker paths so the decision logic lives in one place.
    let on_upload = props.on_upload;
    let process_files = use_callback(move |files: Vec<FileData>| {
        let names: Vec<String> = files.iter().map(FileData::name).collect();
        match selection_verdict(&names, &config) {
            Verdict::Empty => {}
            Verdict::Accepted => {
                tracing::debug!(count = files.len(), "selection accepted");
                show_message(StatusMessage::success("Upload successful!"));
                on_upload.call(files);
            }
            Verdict::Rejected(reason) => {
                tracing::debug!(%reason, "selection rejected");
                show_message(StatusMessage::error(reason.to_string()));
            }
        }
    });

    let handle_drop = move |evt: DragEvent| {
        evt.prevent_default();
        state.write().drag_end();
        process_files.call(evt.files());
    };

    let handle_files = move |evt: FormEvent| {
        process_files.call(evt.files());
    };

    // Narrow what the native picker offers to the configured formats.
    let accept = props.allowed_extensions.as_ref().map(|exts| {
        exts.iter()
            .map(|ext| {
                if ext.starts_with('.') {
                    ext.clone()
                } else {
                    format!(".{ext}")
                }
            })
            .collect::<Vec<_>>()
            .join(",")
    });

    let current = state();
    let dragging = current.is_dragging();
    let message = current.message().clone();

    let region_class = if dragging { "dragging" } else { "" };
    let message_class = match message.kind() {
        MessageKind::None => "",
        MessageKind::Error => "filedrop-error",
        MessageKind::Success => "filedrop-success",
    };

    let idle_content = props.placeholder.unwrap_or_else(default_placeholder);

    rsx! {
        label {
            class: "filedrop-region {region_class}",

            ondragenter: move |evt| {
                evt.prevent_default();
                state.write().drag_enter();
            },
            ondragover: move |evt| {
                // Required so the browser allows the drop at all.
                evt.prevent_default();
            },
            ondragleave: move |evt| {
                evt.prevent_default();
                state.write().drag_leave();
            },
            ondrop: handle_drop,

            input {
                r#type: "file",
                multiple: true,
                accept: accept,
                class: "filedrop-input",
                onchange: handle_files,
            }

            if dragging {
                div { class: "filedrop-overlay filedrop-dropping",
                    p { "Release to upload" }
                }
            } else if message.is_visible() {
                div { class: "filedrop-overlay {message_class}",
                    p { "{message.text()}" }
                }
            } else {
                {idle_content}
            }
        }
    }
}

/// Built-in idle placeholder: an upload icon and a short hint.
fn default_placeholder() -> Element {
    rsx! {
        div { class: "filedrop-placeholder",
            Icon { icon: LdUpload, width: 40, height: 40 }
            p { "Drop files here or click to browse" }
        }
    }
}
