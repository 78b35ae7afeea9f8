//! Share Panel Component
//!
//! Canonical location of a plaque, collection, or route, as copyable text
//! and a QR code.

use base64::Engine as _;
use dioxus::prelude::*;

use crate::components::icons::{icon_copy, icon_share};

/// Generate a QR code data URL from a location string.
///
/// Returns a base64-encoded SVG data URL usable as an img src, or None if
/// generation fails (the panel then shows the plain text only).
fn qr_data_url(data: &str) -> Option<String> {
    use qrcode::render::svg;
    use qrcode::QrCode;

    let code = QrCode::new(data.as_bytes()).ok()?;

    let svg_string = code
        .render()
        .min_dimensions(180, 180)
        .dark_color(svg::Color("#2b2b2b"))
        .light_color(svg::Color("#f7f3e8"))
        .build();

    let encoded = base64::engine::general_purpose::STANDARD.encode(svg_string.as_bytes());
    Some(format!("data:image/svg+xml;base64,{}", encoded))
}

#[component]
pub fn SharePanel(location: String) -> Element {
    let mut copied = use_signal(|| false);

    let qr_url = use_memo({
        let location = location.clone();
        move || qr_data_url(&location)
    });

    let location_for_copy = location.clone();
    let copy_location = move |_| {
        // Cross-platform clipboard access
        match arboard::Clipboard::new() {
            Ok(mut clipboard) => {
                if let Err(e) = clipboard.set_text(location_for_copy.clone()) {
                    tracing::warn!("Clipboard write failed: {}", e);
                } else {
                    copied.set(true);
                }
            }
            Err(e) => {
                tracing::warn!("Clipboard not available: {}", e);
            }
        }
    };

    rsx! {
        div { class: "share-panel",
            p { class: "plaque-card-meta", style: "display: flex; align-items: center; gap: 0.35rem; margin-bottom: 0.5rem;",
                {icon_share(14)}
                "Share"
            }
            div { class: "share-location",
                span { "{location}" }
                button {
                    class: "btn-secondary",
                    "aria-label": "Copy link",
                    onclick: copy_location,
                    {icon_copy(16)}
                    "Copy"
                }
            }

            if copied() {
                p { class: "copy-feedback", "Link copied to clipboard" }
            }

            if let Some(url) = qr_url() {
                div { class: "qr-code-container",
                    img {
                        class: "qr-code-image",
                        src: "{url}",
                        alt: "QR code for this link",
                        width: "180",
                        height: "180",
                    }
                }
            }
        }
    }
}
