//! Collection page - the plaques of one curated collection.
//!
//! Taps resolve through the collection presentation context, keeping the
//! scroll position by opening the inline overlay.

use dioxus::prelude::*;

use plaquer_core::{CollectionId, HapticPattern, Plaque, PlaqueId, PresentationContext};

use crate::app::Route;
use crate::components::icons::icon_chevron_left;
use crate::components::{CardLayout, NavHeader, NavLocation, PlaqueCard, SharePanel};
use crate::context::{use_haptics, use_plaque_modal, use_resolver, use_store};

#[component]
pub fn CollectionView(id: String) -> Element {
    let store = use_store();
    let haptics = use_haptics();
    let resolver = use_resolver();
    let modal_plaque = use_plaque_modal();

    let collection_id = CollectionId::new(id);
    let mut collected = use_signal(|| store.peek().collected());

    let collection = match store.peek().collection(&collection_id) {
        Ok(collection) => collection,
        Err(e) => {
            tracing::warn!(error = %e, "collection page for unknown id");
            return rsx! {
                NavHeader { current: NavLocation::Library }
                main { class: "page",
                    Link { class: "btn-back", to: Route::Library {},
                        {icon_chevron_left(16)}
                        "Library"
                    }
                    div { class: "empty-state", "Collection not found" }
                }
            };
        }
    };

    let plaques: Vec<Plaque> = collection
        .plaques
        .iter()
        .filter_map(|id| store.peek().get(*id).ok())
        .collect();

    let location = resolver.collection_location(&collection.id);

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
            Link { class: "btn-back", to: Route::Library {},
                {icon_chevron_left(16)}
                "Library"
            }

            h1 { class: "page-title", "{collection.name}" }
            p { class: "page-subtitle", "{collection.description}" }

            div { class: "plaque-list",
                for plaque in plaques {
                    PlaqueCard {
                        key: "{plaque.id}",
                        plaque: plaque.clone(),
                        collected: collected().contains(&plaque.id),
                        layout: CardLayout::List,
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
                                    Some(PresentationContext::Collection),
                                    Some(&open_modal),
                                );
                            }
                        },
                        on_toggle_collect: on_toggle_collect,
                    }
                }
            }

            SharePanel { location }
        }
    }
}
