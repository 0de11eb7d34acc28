use dioxus::html::FileData;
use dioxus::logger::tracing;
use dioxus::prelude::*;
use filedrop_ui::{ObjectUrl, UploadRegion};

fn main() {
    dioxus::launch(app);
}

/// An uploaded image held for preview: the original file name plus the
/// object URL backing the `<img>` element. Dropping the value (or
/// replacing it in the signal) revokes the URL.
struct PreviewImage {
    name: String,
    url: ObjectUrl,
}

/// Map a file name to the MIME type used for its preview Blob.
fn mime_for(name: &str) -> &'static str {
    let lower = name.to_lowercase();
    if lower.ends_with(".png") {
        "image/png"
    } else if lower.ends_with(".gif") {
        "image/gif"
    } else if lower.ends_with(".jpg") || lower.ends_with(".jpeg") {
        "image/jpeg"
    } else {
        "application/octet-stream"
    }
}

/// Root demo page.
///
/// Hosts a single [`UploadRegion`] restricted to one jpg/png/gif file
/// per action and previews the uploaded image. Replacing the preview
/// signal drops the previous [`ObjectUrl`], which revokes its URL.
fn app() -> Element {
    let mut preview = use_signal(|| Option::<PreviewImage>::None);

    // --- File upload handler ---
    // The region already validated the selection; read the first file
    // lazily and turn it into a displayable object URL.
    let on_upload = move |files: Vec<FileData>| {
        let Some(file) = files.into_iter().next() else {
            return;
        };
        spawn(async move {
            let name = file.name();
            match file.read_bytes().await {
                Ok(bytes) => match ObjectUrl::from_bytes(&bytes, mime_for(&name)) {
                    Ok(url) => preview.set(Some(PreviewImage { name, url })),
                    Err(e) => tracing::warn!("preview unavailable: {e}"),
                },
                Err(e) => tracing::warn!("failed to read {name}: {e}"),
            }
        });
    };

    // Owned copies for rendering; the read guard must not outlive the
    // statement.
    let preview_info: Option<(String, String)> = preview
        .read()
        .as_ref()
        .map(|p| (p.name.clone(), p.url.as_str().to_owned()));

    rsx! {
        style { dangerous_inner_html: filedrop_ui::STYLESHEET }
        style { dangerous_inner_html: include_str!("page.css") }

        div { class: "page",
            header { class: "page-header",
                h1 { "filedrop" }
                p { "Drag a file onto the region or click it to browse." }
            }

            div { class: "upload-panel",
                UploadRegion {
                    on_upload: on_upload,
                    max_count: 1,
                    allowed_extensions: vec!["jpg".to_owned(), "png".to_owned(), "gif".to_owned()],
                    placeholder: rsx! {
                        div { class: "demo-placeholder",
                            p { "Try dropping an image here" }
                            span { class: "demo-placeholder-emoji", "😎" }
                        }
                    },
                }
            }

            if let Some((name, url)) = preview_info {
                div { class: "preview-panel",
                    h2 { "Preview" }
                    img { class: "preview-image", src: "{url}", alt: "{name}" }
                    p { class: "preview-name", "{name}" }
                }
            }
        }
    }
}
