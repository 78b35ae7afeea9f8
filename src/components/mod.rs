//! UI Components for the Plaquer shell.

mod confirm_dialog;
pub mod icons;
mod logo;
mod mobile_nav;
mod nav_header;
mod offline_banner;
mod plaque_card;
mod plaque_modal;
mod share_panel;

pub use confirm_dialog::ConfirmDialog;
pub use logo::Logo;
pub use mobile_nav::MobileNav;
pub use nav_header::{NavHeader, NavLocation};
pub use offline_banner::OfflineBanner;
pub use plaque_card::{CardLayout, PlaqueCard};
pub use plaque_modal::{PlaqueArticle, PlaqueModal};
pub use share_panel::SharePanel;
