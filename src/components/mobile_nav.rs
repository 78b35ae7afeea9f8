//! Mobile Navigation Component
//!
//! Bottom navigation bar shown on compact viewports. Item heights respect
//! the touch-target floor and the bar clears the display's bottom safe
//! area.

use dioxus::prelude::*;

use plaquer_core::touch_target_size;

use crate::components::nav_header::{render_nav_icon, NavLocation};
use crate::context::{use_safe_area, use_viewport_class};

#[derive(Props, Clone, PartialEq)]
pub struct MobileNavProps {
    /// Current active location
    pub current: NavLocation,
}

/// Bottom navigation bar, the compact-viewport replacement for the header.
#[component]
pub fn MobileNav(props: MobileNavProps) -> Element {
    let viewport = use_viewport_class();
    let insets = use_safe_area();

    let locations = [NavLocation::Discover, NavLocation::Map, NavLocation::Library];
    let item_height = touch_target_size(40.0, viewport().is_compact());
    let bottom_padding = insets().bottom_nav_padding(4.0);

    rsx! {
        nav {
            class: "mobile-nav",
            style: "padding-bottom: {bottom_padding}px; padding-top: 4px;",

            for location in &locations {
                Link {
                    to: location.route(),
                    class: if *location == props.current { "mobile-nav-item active" } else { "mobile-nav-item" },
                    style: "min-height: {item_height}px;",

                    span { {render_nav_icon(*location, 22)} }
                    span { "{location.display_name()}" }
                }
            }
        }
    }
}
