//! Library page - the user's collected plaques, plus curated collections
//! and walking routes.

use dioxus::prelude::*;

use plaquer_core::{HapticPattern, Plaque, PlaqueId};

use crate::app::Route;
use crate::components::{CardLayout, NavHeader, NavLocation, PlaqueCard};
use crate::context::{use_haptics, use_plaque_modal, use_resolver, use_store};

#[component]
pub fn Library() -> Element {
    let store = use_store();
    let haptics = use_haptics();
    let resolver = use_resolver();
    let modal_plaque = use_plaque_modal();

    let mut collected = use_signal(|| store.peek().collected());
    let collections = use_signal(|| store.peek().collections());
    let routes = use_signal(|| store.peek().routes());

    let collected_plaques: Vec<Plaque> = collected()
        .iter()
        .filter_map(|id| store.peek().get(*id).ok())
        .collect();

    let on_toggle_collect = move |id: PlaqueId| {
        match store.peek().toggle_collected(id) {
            Ok(_) => {
                haptics.peek().trigger(HapticPattern::Selection);
                collected.set(store.peek().collected());
            }
            Err(e) => tracing::warn!(error = %e, "collect toggle failed"),
        }
    };

    rsx! {
        NavHeader { current: NavLocation::Library }

        main { class: "page",
            h1 { class: "page-title", "Library" }
            p { class: "page-subtitle", "{collected().len()} collected" }

            h2 { class: "section-header", "Collected" }
            if collected_plaques.is_empty() {
                div { class: "empty-state", "Tap the star on any plaque to collect it" }
            } else {
                div { class: "plaque-list",
                    for plaque in collected_plaques {
                        PlaqueCard {
                            key: "{plaque.id}",
                            plaque: plaque.clone(),
                            collected: true,
                            layout: CardLayout::List,
                            on_open: {
                                let resolver = resolver.clone();
                                let plaque = plaque.clone();
                                move |_| {
                                    // Library cards behave like collection
                                    // entries: stay inline
                                    let open_modal = move |p: &Plaque| {
                                        let mut modal = modal_plaque;
                                        modal.set(Some(p.id));
                                    };
                                    resolver.resolve_in_context(
                                        &plaque,
                                        plaquer_core::PresentationContext::from_tag("collection"),
                                        Some(&open_modal),
                                    );
                                }
                            },
                            on_toggle_collect: on_toggle_collect,
                        }
                    }
                }
            }

            h2 { class: "section-header", "Collections" }
            for collection in collections() {
                Link {
                    to: Route::CollectionView { id: collection.id.as_str().to_string() },
                    div { class: "library-row",
                        div {
                            div { class: "library-row-name", "{collection.name}" }
                            div { class: "library-row-meta", "{collection.description}" }
                        }
                        span { class: "library-row-meta", "{collection.plaques.len()} plaques" }
                    }
                }
            }

            h2 { class: "section-header", "Routes" }
            for route in routes() {
                Link {
                    to: Route::RouteView { id: route.id.as_str().to_string() },
                    div { class: "library-row",
                        div {
                            div { class: "library-row-name", "{route.name}" }
                            div { class: "library-row-meta", "{route.description}" }
                        }
                        span { class: "library-row-meta", "{route.plaques.len()} stops" }
                    }
                }
            }
        }
    }
}
