//! Visual theme for the Plaquer shell.

mod colors;
mod styles;

pub use colors::*;
pub use styles::GLOBAL_STYLES;
