//! Route page - ordered stops of one walking route.

use dioxus::prelude::*;

use plaquer_core::{HapticPattern, Plaque, PlaqueId, PresentationContext, RouteId};

use crate::app::Route;
use crate::components::icons::icon_chevron_left;
use crate::components::{CardLayout, NavHeader, NavLocation, PlaqueCard, SharePanel};
use crate::context::{use_haptics, use_plaque_modal, use_resolver, use_store};

#[component]
pub fn RouteView(id: String) -> Element {
    let store = use_store();
    let haptics = use_haptics();
    let resolver = use_resolver();
    let modal_plaque = use_plaque_modal();

    let route_id = RouteId::new(id);
    let mut collected = use_signal(|| store.peek().collected());

    let route = match store.peek().route(&route_id) {
        Ok(route) => route,
        Err(e) => {
            tracing::warn!(error = %e, "route page for unknown id");
            return rsx! {
                NavHeader { current: NavLocation::Library }
                main { class: "page",
                    Link { class: "btn-back", to: Route::Library {},
                        {icon_chevron_left(16)}
                        "Library"
                    }
                    div { class: "empty-state", "Route not found" }
                }
            };
        }
    };

    let stops: Vec<(usize, Plaque)> = route
        .plaques
        .iter()
        .filter_map(|id| store.peek().get(*id).ok())
        .enumerate()
        .map(|(index, plaque)| (index + 1, plaque))
        .collect();

    let location = resolver.route_location(&route.id);

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

            h1 { class: "page-title", "{route.name}" }
            p { class: "page-subtitle", "{route.description}" }

            for (number, plaque) in stops {
                div { class: "route-stop", key: "{plaque.id}",
                    span { class: "route-stop-number", "{number}" }
                    PlaqueCard {
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
                                // Route stops have no dedicated presentation
                                // context; the default policy applies
                                resolver.resolve_in_context(
                                    &plaque,
                                    PresentationContext::from_tag("route-stops"),
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
