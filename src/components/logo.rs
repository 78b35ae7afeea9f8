//! Plaquer logo.
//!
//! A small round blue plaque with a "P".

use dioxus::prelude::*;

#[component]
pub fn Logo(#[props(default = 28)] size: u32) -> Element {
    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 32 32",
            role: "img",
            "aria-label": "Plaquer",
            circle { cx: "16", cy: "16", r: "15", fill: "#1f62a8" }
            circle {
                cx: "16",
                cy: "16",
                r: "12.5",
                fill: "none",
                stroke: "#f7f3e8",
                stroke_width: "1.2",
            }
            // Serif-ish "P" glyph
            path {
                d: "M12.5 23.5 V8.5 h5 a4.5 4.5 0 0 1 0 9 h-5",
                fill: "none",
                stroke: "#f7f3e8",
                stroke_width: "2.4",
                stroke_linecap: "round",
                stroke_linejoin: "round",
            }
        }
    }
}
