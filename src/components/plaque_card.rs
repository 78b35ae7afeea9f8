//! Plaque Card Component
//!
//! Card for one plaque in the discover grid/list, collection pages, and
//! route stops. The collect star respects the compact touch-target floor.

use dioxus::prelude::*;

use plaquer_core::{touch_target_size, Plaque, PlaqueId};

use crate::components::icons::icon_star;
use crate::context::use_viewport_class;
use crate::theme::plaque_colour_hex;

/// Card arrangement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardLayout {
    Grid,
    List,
}

#[derive(Props, Clone, PartialEq)]
pub struct PlaqueCardProps {
    pub plaque: Plaque,
    /// Whether the user has collected this plaque
    pub collected: bool,
    #[props(default = CardLayout::Grid)]
    pub layout: CardLayout,
    /// Called with the plaque id when the card body is tapped
    pub on_open: EventHandler<PlaqueId>,
    /// Called with the plaque id when the collect star is tapped
    pub on_toggle_collect: EventHandler<PlaqueId>,
}

#[component]
pub fn PlaqueCard(props: PlaqueCardProps) -> Element {
    let viewport = use_viewport_class();

    let plaque = props.plaque.clone();
    let on_open = props.on_open;
    let on_toggle_collect = props.on_toggle_collect;
    let colour = plaque_colour_hex(&plaque.colour);
    let star_size = touch_target_size(32.0, viewport().is_compact());

    let meta = match (&plaque.area, plaque.erected) {
        (Some(area), Some(year)) => format!("{area} · {year}"),
        (Some(area), None) => area.clone(),
        (None, Some(year)) => year.to_string(),
        (None, None) => plaque.colour.display_name().to_string(),
    };

    let card_class = match props.layout {
        CardLayout::Grid => "plaque-card grid",
        CardLayout::List => "plaque-card",
    };

    let id = plaque.id;

    rsx! {
        article {
            class: "{card_class}",
            onclick: move |_| on_open.call(id),

            span {
                class: "colour-disc",
                style: "background: {colour};",
            }

            div { class: "plaque-card-body",
                h3 { class: "plaque-card-title", "{plaque.title}" }
                p { class: "plaque-card-meta", "{meta}" }
            }

            button {
                class: if props.collected { "collect-button collected" } else { "collect-button" },
                style: "width: {star_size}px; height: {star_size}px;",
                "aria-label": if props.collected { "Remove from collection" } else { "Add to collection" },
                onclick: move |e| {
                    e.stop_propagation();
                    on_toggle_collect.call(id);
                },

                {icon_star(18, props.collected)}
            }
        }
    }
}
