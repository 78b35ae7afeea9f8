//! Confirm Dialog Component
//!
//! Small modal for destructive confirmations (removing a plaque from the
//! collection).

use dioxus::prelude::*;

#[component]
pub fn ConfirmDialog(
    /// Dialog heading
    title: String,
    /// Explanatory body text
    message: String,
    /// Label on the confirming (destructive) button
    confirm_label: String,
    /// Callback when confirmed
    on_confirm: EventHandler<()>,
    /// Callback when dismissed
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_cancel.call(()),

            div {
                class: "confirm-dialog",
                onclick: move |e| e.stop_propagation(),

                h2 { class: "modal-title", "{title}" }
                p { class: "modal-description", "{message}" }

                div { class: "modal-actions",
                    button {
                        class: "btn-danger",
                        onclick: move |_| on_confirm.call(()),
                        "{confirm_label}"
                    }
                    button {
                        class: "btn-secondary",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                }
            }
        }
    }
}
