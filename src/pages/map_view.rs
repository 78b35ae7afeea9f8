//! Map page - schematic pin field over the plaque coordinates.
//!
//! No tile fetching; pins are projected from the lat/lng bounding box of
//! the seeded plaques. Tapping a pin resolves through the map presentation
//! context, which keeps the viewport by opening the inline overlay.

use dioxus::prelude::*;

use plaquer_core::{touch_target_size, Plaque, PresentationContext};

use crate::components::{NavHeader, NavLocation};
use crate::context::{use_plaque_modal, use_resolver, use_store, use_viewport_class};
use crate::theme::plaque_colour_hex;

/// Percentage margin kept clear around the outermost pins
const EDGE_MARGIN_PCT: f64 = 8.0;

/// Project plaque coordinates into percentage positions on the canvas.
///
/// North is up: larger latitudes map to smaller top offsets. Degenerate
/// spans (a single plaque) centre the pin.
fn project(plaques: &[Plaque]) -> Vec<(f64, f64)> {
    let min_lat = plaques.iter().map(|p| p.latitude).fold(f64::INFINITY, f64::min);
    let max_lat = plaques.iter().map(|p| p.latitude).fold(f64::NEG_INFINITY, f64::max);
    let min_lng = plaques.iter().map(|p| p.longitude).fold(f64::INFINITY, f64::min);
    let max_lng = plaques.iter().map(|p| p.longitude).fold(f64::NEG_INFINITY, f64::max);

    let lat_span = max_lat - min_lat;
    let lng_span = max_lng - min_lng;
    let usable = 100.0 - 2.0 * EDGE_MARGIN_PCT;

    plaques
        .iter()
        .map(|p| {
            let x = if lng_span > 0.0 {
                EDGE_MARGIN_PCT + (p.longitude - min_lng) / lng_span * usable
            } else {
                50.0
            };
            let y = if lat_span > 0.0 {
                EDGE_MARGIN_PCT + (max_lat - p.latitude) / lat_span * usable
            } else {
                50.0
            };
            (x, y)
        })
        .collect()
}

#[component]
pub fn MapView() -> Element {
    let store = use_store();
    let resolver = use_resolver();
    let viewport = use_viewport_class();
    let modal_plaque = use_plaque_modal();

    let plaques = use_signal(|| store.peek().list());

    let current = plaques();
    let positions = project(&current);
    let pins: Vec<(Plaque, (f64, f64), &'static str)> = current
        .into_iter()
        .zip(positions)
        .map(|(plaque, position)| {
            let colour = plaque_colour_hex(&plaque.colour);
            (plaque, position, colour)
        })
        .collect();
    let pin_size = touch_target_size(30.0, viewport().is_compact());

    let legend = [
        ("Blue", plaque_colour_hex(&plaquer_core::PlaqueColour::Blue)),
        ("Green", plaque_colour_hex(&plaquer_core::PlaqueColour::Green)),
        ("Brown", plaque_colour_hex(&plaquer_core::PlaqueColour::Brown)),
        ("Black", plaque_colour_hex(&plaquer_core::PlaqueColour::Black)),
    ];

    rsx! {
        NavHeader { current: NavLocation::Map }

        main { class: "page",
            h1 { class: "page-title", "Map" }
            p { class: "page-subtitle", "Tap a pin to read its plaque without losing your place" }

            div { class: "map-canvas", role: "application", "aria-label": "Plaque map",
                for (plaque, (x, y), colour) in pins {
                    button {
                        key: "{plaque.id}",
                        class: "map-pin",
                        style: "left: {x}%; top: {y}%; width: {pin_size}px; height: {pin_size}px; background: {colour};",
                        "aria-label": "{plaque.title}",
                        onclick: {
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
                                    Some(PresentationContext::Map),
                                    Some(&open_modal),
                                );
                            }
                        },

                        span { class: "map-pin-glyph", "{plaque.id}" }
                    }
                }
            }

            div { class: "map-legend",
                for (name, hex) in legend {
                    span { class: "map-legend-item",
                        span {
                            class: "map-legend-swatch",
                            style: "background: {hex};",
                        }
                        "{name}"
                    }
                }
            }
        }
    }
}
