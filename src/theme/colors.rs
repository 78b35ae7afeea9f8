//! Colour constants for the Plaquer heritage palette.
//!
//! Parchment-and-ink look with the four standard plaque colours.

#![allow(dead_code)]

use plaquer_core::PlaqueColour;

// === PARCHMENT (Backgrounds) ===
pub const PARCHMENT: &str = "#f7f3e8";
pub const PARCHMENT_DARK: &str = "#efe7d6";
pub const PARCHMENT_BORDER: &str = "#ddd2ba";

// === INK (Text) ===
pub const INK: &str = "#2b2b2b";
pub const INK_SOFT: &str = "rgba(43, 43, 43, 0.72)";
pub const INK_MUTED: &str = "rgba(43, 43, 43, 0.5)";

// === PLAQUE COLOURS ===
pub const PLAQUE_BLUE: &str = "#1f62a8";
pub const PLAQUE_GREEN: &str = "#2f7d5d";
pub const PLAQUE_BROWN: &str = "#7b4a21";
pub const PLAQUE_BLACK: &str = "#232323";
pub const PLAQUE_GREY: &str = "#6b7280";

// === ACCENT ===
pub const GOLD: &str = "#b9892e";
pub const GOLD_SOFT: &str = "rgba(185, 137, 46, 0.25)";

// === SEMANTIC ===
pub const DANGER: &str = "#b3362b";
pub const WARNING: &str = "#c77d1f";

/// Hex colour for a plaque colour swatch. Unknown colours get grey.
pub fn plaque_colour_hex(colour: &PlaqueColour) -> &'static str {
    match colour {
        PlaqueColour::Blue => PLAQUE_BLUE,
        PlaqueColour::Green => PLAQUE_GREEN,
        PlaqueColour::Brown => PLAQUE_BROWN,
        PlaqueColour::Black => PLAQUE_BLACK,
        PlaqueColour::Other(_) => PLAQUE_GREY,
    }
}
