//! Offline Banner Component
//!
//! Thin banner shown while the host reports no connectivity. Subscribes to
//! the connectivity watcher on mount; the guard is held for the
//! component's lifetime so the observer is released on unmount.

use std::rc::Rc;

use dioxus::prelude::*;

use crate::components::icons::icon_wifi_off;
use crate::context::use_connectivity;

#[component]
pub fn OfflineBanner() -> Element {
    let watcher = use_connectivity();
    let state = use_signal(|| watcher.peek().current());

    let _subscription = use_hook(|| {
        let guard = watcher.peek().subscribe(move |connectivity| {
            let mut mirror = state;
            mirror.set(connectivity);
        });
        Rc::new(guard)
    });

    if state().is_online() {
        return rsx! {};
    }

    rsx! {
        div { class: "offline-banner", role: "status",
            {icon_wifi_off(16)}
            span { "You're offline — showing saved plaques" }
        }
    }
}
