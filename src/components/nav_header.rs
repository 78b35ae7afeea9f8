//! Navigation Header Component
//!
//! Expanded/medium viewports get a horizontal header with the logo, nav
//! links, and a connectivity dot. Compact viewports get the bottom bar
//! instead; the switch is driven by the viewport classifier, not CSS.
//!
//! The plaque overlay is rendered from here so it is available on every
//! page.

use std::rc::Rc;

use dioxus::prelude::*;

use crate::app::Route;
use crate::components::icons::{icon_compass, icon_library, icon_map};
use crate::components::logo::Logo;
use crate::components::mobile_nav::MobileNav;
use crate::components::offline_banner::OfflineBanner;
use crate::components::plaque_modal::PlaqueModal;
use crate::context::{use_connectivity, use_plaque_modal, use_viewport_class};

/// Navigation location within the application
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum NavLocation {
    Discover,
    Map,
    Library,
}

impl NavLocation {
    /// Get the display name for this location
    pub fn display_name(&self) -> &'static str {
        match self {
            NavLocation::Discover => "Discover",
            NavLocation::Map => "Map",
            NavLocation::Library => "Library",
        }
    }

    /// Get the route for this location
    pub fn route(&self) -> Route {
        match self {
            NavLocation::Discover => Route::Discover {},
            NavLocation::Map => Route::MapView {},
            NavLocation::Library => Route::Library {},
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct NavHeaderProps {
    /// Current location in the app
    pub current: NavLocation,
}

/// Navigation header, rendered at the top of every page.
#[component]
pub fn NavHeader(props: NavHeaderProps) -> Element {
    let viewport = use_viewport_class();
    let connectivity = use_connectivity();
    let mut modal_plaque = use_plaque_modal();

    let online_state = use_signal(|| connectivity.peek().current());
    let _subscription = use_hook(|| {
        let guard = connectivity.peek().subscribe(move |state| {
            let mut mirror = online_state;
            mirror.set(state);
        });
        Rc::new(guard)
    });

    let locations = [NavLocation::Discover, NavLocation::Map, NavLocation::Library];
    let compact = viewport().is_compact();
    let online = online_state().is_online();

    rsx! {
        OfflineBanner {}

        if compact {
            MobileNav { current: props.current }
        } else {
            header { class: "nav-header",
                div { class: "nav-header-inner",
                    div { class: "nav-brand",
                        Logo { size: 28 }
                        h1 { class: "app-title", "Plaquer" }
                    }

                    nav { class: "nav-links",
                        for location in &locations {
                            Link {
                                to: location.route(),
                                class: if *location == props.current { "nav-link active" } else { "nav-link" },

                                span { {render_nav_icon(*location, 18)} }
                                span { "{location.display_name()}" }
                            }
                        }
                    }

                    div { class: "nav-status",
                        span {
                            class: if online { "status-dot" } else { "status-dot offline" },
                            "aria-label": if online { "Online" } else { "Offline" },
                        }
                    }
                }
            }
        }

        // Inline plaque overlay (set by the navigation resolver's modal
        // callback on the map, collection, and route pages)
        if let Some(id) = modal_plaque() {
            PlaqueModal {
                id,
                on_close: move |_| modal_plaque.set(None),
            }
        }
    }
}

/// Render Lucide icon for navigation location
pub(crate) fn render_nav_icon(location: NavLocation, size: u32) -> Element {
    match location {
        NavLocation::Discover => icon_compass(size),
        NavLocation::Map => icon_map(size),
        NavLocation::Library => icon_library(size),
    }
}
