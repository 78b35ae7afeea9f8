//! Plaque Modal and Article Components
//!
//! `PlaqueModal` is the inline overlay opened by the navigation resolver's
//! modal branch. `PlaqueArticle` is the shared presentational body, also
//! used by the detail page and auxiliary plaque windows (it must stay
//! router-free for that reason).

use dioxus::prelude::*;
use pulldown_cmark::{html, Options, Parser};

use plaquer_core::{NavigationMode, Plaque, PlaqueId};

use crate::components::icons::{icon_external, icon_x};
use crate::components::share_panel::SharePanel;
use crate::context::{use_resolver, use_store};
use crate::theme::plaque_colour_hex;

/// Convert a markdown inscription to HTML.
fn render_markdown(content: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);

    let parser = Parser::new_ext(content, options);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

/// Presentational plaque body: colour disc, title, meta line, inscription.
///
/// Router-free so it renders in auxiliary windows.
#[component]
pub fn PlaqueArticle(plaque: Plaque) -> Element {
    let colour = plaque_colour_hex(&plaque.colour);
    let inscription_html = render_markdown(&plaque.inscription);

    let meta = match (&plaque.area, plaque.erected) {
        (Some(area), Some(year)) => format!("{area} · erected {year}"),
        (Some(area), None) => area.clone(),
        (None, Some(year)) => format!("erected {year}"),
        (None, None) => String::new(),
    };

    rsx! {
        div { class: "plaque-article-header",
            span {
                class: "colour-disc",
                style: "background: {colour};",
            }
            div {
                h2 { class: "plaque-article-title", "{plaque.title}" }
                if !meta.is_empty() {
                    p { class: "plaque-article-meta", "{meta}" }
                }
            }
        }

        div {
            class: "plaque-inscription",
            dangerous_inner_html: "{inscription_html}",
        }

        p { class: "plaque-coordinates",
            "{plaque.latitude:.4}, {plaque.longitude:.4}"
        }
    }
}

/// Inline plaque overlay.
///
/// Shown without leaving the current page, preserving the map viewport or
/// scroll position underneath.
#[component]
pub fn PlaqueModal(id: PlaqueId, on_close: EventHandler<()>) -> Element {
    let store = use_store();
    let resolver = use_resolver();

    let plaque = match store.peek().get(id) {
        Ok(plaque) => plaque,
        Err(e) => {
            tracing::warn!(error = %e, "overlay requested for unknown plaque");
            return rsx! {};
        }
    };

    let location = resolver.plaque_location(id);
    let full_page_plaque = plaque.clone();

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_close.call(()),

            div {
                class: "modal-panel",
                onclick: move |e| e.stop_propagation(),

                div { class: "modal-header",
                    button {
                        class: "modal-close",
                        "aria-label": "Close",
                        onclick: move |_| on_close.call(()),
                        {icon_x(20)}
                    }
                }

                PlaqueArticle { plaque: plaque.clone() }

                div { class: "modal-actions",
                    button {
                        class: "btn-primary",
                        onclick: move |_| {
                            // Full navigation replaces the current view
                            resolver.resolve(&full_page_plaque, NavigationMode::Url, None);
                            on_close.call(());
                        },

                        {icon_external(16)}
                        "Open full page"
                    }
                }

                SharePanel { location }
            }
        }
    }
}
