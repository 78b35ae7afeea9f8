//! Discover page - browse every plaque as a grid or list.
//!
//! Taps resolve through the discover-grid / discover-list presentation
//! contexts, so opening a plaque never loses the browsing position: both
//! map to an auxiliary window.

use dioxus::prelude::*;

use plaquer_core::{HapticPattern, Plaque, PlaqueId, PresentationContext};

use crate::components::{CardLayout, NavHeader, NavLocation, PlaqueCard};
use crate::components::icons::{icon_grid, icon_list};
use crate::context::{use_haptics, use_plaque_modal, use_resolver, use_store};

#[component]
pub fn Discover() -> Element {
    let store = use_store();
    let haptics = use_haptics();
    let resolver = use_resolver();
    let modal_plaque = use_plaque_modal();

    let mut layout = use_signal(|| CardLayout::Grid);
    let plaques = use_signal(|| store.peek().list());
    let mut collected = use_signal(|| store.peek().collected());

    let on_toggle_collect = move |id: PlaqueId| {
        match store.peek().toggle_collected(id) {
            Ok(now_collected) => {
                haptics.peek().trigger(if now_collected {
                    HapticPattern::Success
                } else {
                    HapticPattern::Selection
                });
                collected.set(store.peek().collected());
            }
            Err(e) => tracing::warn!(error = %e, "collect toggle failed"),
        }
    };

    let context = match layout() {
        CardLayout::Grid => PresentationContext::DiscoverGrid,
        CardLayout::List => PresentationContext::DiscoverList,
    };

    let list_class = match layout() {
        CardLayout::Grid => "plaque-grid",
        CardLayout::List => "plaque-list",
    };

    rsx! {
        NavHeader { current: NavLocation::Discover }

        main { class: "page",
            h1 { class: "page-title", "Discover" }
            p { class: "page-subtitle", "{plaques().len()} plaques to find" }

            div { class: "discover-toolbar",
                div { class: "layout-toggle", role: "group", "aria-label": "Card layout",
                    button {
                        class: if layout() == CardLayout::Grid { "active" } else { "" },
                        "aria-label": "Grid layout",
                        onclick: move |_| {
                            layout.set(CardLayout::Grid);
                            haptics.peek().trigger(HapticPattern::Selection);
                        },
                        {icon_grid(16)}
                    }
                    button {
                        class: if layout() == CardLayout::List { "active" } else { "" },
                        "aria-label": "List layout",
                        onclick: move |_| {
                            layout.set(CardLayout::List);
                            haptics.peek().trigger(HapticPattern::Selection);
                        },
                        {icon_list(16)}
                    }
                }
            }

            div { class: "{list_class}",
                for plaque in plaques() {
                    PlaqueCard {
                        key: "{plaque.id}",
                        plaque: plaque.clone(),
                        collected: collected().contains(&plaque.id),
                        layout: layout(),
                        on_open: {
                            let resolver = resolver.clone();
                            let plaque = plaque.clone();
                            move |_| {
                                let open_modal =
                                    move |p: &Plaque| {
                                        let mut modal = modal_plaque;
                                        modal.set(Some(p.id));
                                    };
                                resolver.resolve_in_context(
                                    &plaque,
                                    Some(context),
                                    Some(&open_modal),
                                );
                            }
                        },
                        on_toggle_collect: on_toggle_collect,
                    }
                }
            }

            if plaques().is_empty() {
                div { class: "empty-state", "No plaques yet" }
            }
        }
    }
}
