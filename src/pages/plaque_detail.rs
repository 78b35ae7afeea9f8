//! Plaque detail page - the full view behind `/plaque/{id}`.
//!
//! Also home to [`PlaqueWindow`], the router-free root used when a plaque
//! opens in its own desktop window.

use dioxus::prelude::*;

use plaquer_core::{HapticPattern, PlaqueId, PlaqueStore};

use crate::app::Route;
use crate::components::icons::{icon_chevron_left, icon_star};
use crate::components::{ConfirmDialog, NavHeader, NavLocation, PlaqueArticle, SharePanel};
use crate::context::{use_haptics, use_resolver, use_store};
use crate::theme::GLOBAL_STYLES;

#[component]
pub fn PlaqueDetail(id: u64) -> Element {
    let store = use_store();
    let haptics = use_haptics();
    let resolver = use_resolver();

    let plaque_id = PlaqueId::new(id);
    let mut collected = use_signal(|| store.peek().is_collected(plaque_id));
    let mut confirm_remove = use_signal(|| false);

    let plaque = match store.peek().get(plaque_id) {
        Ok(plaque) => plaque,
        Err(e) => {
            tracing::warn!(error = %e, "detail page for unknown plaque");
            return rsx! {
                NavHeader { current: NavLocation::Discover }
                main { class: "page",
                    Link { class: "btn-back", to: Route::Discover {},
                        {icon_chevron_left(16)}
                        "Discover"
                    }
                    div { class: "empty-state", "Plaque not found" }
                }
            };
        }
    };

    let location = resolver.plaque_location(plaque_id);

    let apply_toggle = move || match store.peek().toggle_collected(plaque_id) {
        Ok(now_collected) => {
            haptics.peek().trigger(if now_collected {
                HapticPattern::Success
            } else {
                HapticPattern::Selection
            });
            collected.set(now_collected);
        }
        Err(e) => tracing::warn!(error = %e, "collect toggle failed"),
    };

    let mut apply_toggle_collect = apply_toggle.clone();
    let mut apply_toggle_confirm = apply_toggle;

    rsx! {
        NavHeader { current: NavLocation::Discover }

        main { class: "page",
            Link { class: "btn-back", to: Route::Discover {},
                {icon_chevron_left(16)}
                "Discover"
            }

            PlaqueArticle { plaque: plaque.clone() }

            div { class: "modal-actions",
                button {
                    class: if collected() { "btn-secondary" } else { "btn-primary" },
                    onclick: move |_| {
                        if collected() {
                            // Removing is destructive enough to confirm
                            confirm_remove.set(true);
                        } else {
                            apply_toggle_collect();
                        }
                    },

                    {icon_star(16, collected())}
                    if collected() { "Collected" } else { "Collect" }
                }
            }

            SharePanel { location }
        }

        if confirm_remove() {
            ConfirmDialog {
                title: "Remove from collection?",
                message: format!("{} will be removed from your library.", plaque.title),
                confirm_label: "Remove",
                on_confirm: move |_| {
                    apply_toggle_confirm();
                    confirm_remove.set(false);
                },
                on_cancel: move |_| confirm_remove.set(false),
            }
        }
    }
}

/// Root component for an auxiliary plaque window.
///
/// Runs in its own virtual dom without the main window's router or
/// context, so it carries its own store handle and styles.
#[component]
pub fn PlaqueWindow(id: u64) -> Element {
    let store = use_signal(PlaqueStore::seeded);

    let plaque = match store.peek().get(PlaqueId::new(id)) {
        Ok(plaque) => plaque,
        Err(e) => {
            tracing::warn!(error = %e, "auxiliary window for unknown plaque");
            return rsx! {
                style { {GLOBAL_STYLES} }
                main { class: "page",
                    div { class: "empty-state", "Plaque not found" }
                }
            };
        }
    };

    rsx! {
        style { {GLOBAL_STYLES} }
        main { class: "page",
            PlaqueArticle { plaque }
        }
    }
}
