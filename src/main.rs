#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Options resolved from the command line, readable from anywhere in the app
static LAUNCH_OPTIONS: OnceLock<LaunchOptions> = OnceLock::new();

#[derive(Debug, Clone)]
pub struct LaunchOptions {
    /// Origin spliced into shareable plaque links
    pub origin: String,
    /// Start with connectivity reported as offline
    pub offline: bool,
    /// Initial window width in logical pixels
    pub window_width: f64,
    /// Initial window height in logical pixels
    pub window_height: f64,
}

impl Default for LaunchOptions {
    fn default() -> Self {
        Self {
            origin: "https://plaquer.app".to_string(),
            offline: false,
            window_width: 1100.0,
            window_height: 800.0,
        }
    }
}

/// Get the launch options (set from command line or defaults)
pub fn launch_options() -> LaunchOptions {
    LAUNCH_OPTIONS.get().cloned().unwrap_or_default()
}

/// Plaquer desktop shell
#[derive(Parser, Debug)]
#[command(name = "plaquer-desktop")]
#[command(about = "Plaquer - browse, collect, and navigate to plaque records")]
struct Args {
    /// Origin used when building shareable plaque links
    #[arg(long, default_value = "https://plaquer.app")]
    origin: String,

    /// Start with connectivity reported as offline
    #[arg(long)]
    offline: bool,

    /// Initial window width in logical pixels (try 390 for a phone-sized layout)
    #[arg(long, default_value_t = 1100.0)]
    window_width: f64,

    /// Initial window height in logical pixels
    #[arg(long, default_value_t = 800.0)]
    window_height: f64,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let options = LaunchOptions {
        origin: args.origin,
        offline: args.offline,
        window_width: args.window_width,
        window_height: args.window_height,
    };

    tracing::info!(
        origin = %options.origin,
        offline = options.offline,
        width = options.window_width,
        "starting Plaquer"
    );

    let (width, height) = (options.window_width, options.window_height);
    let _ = LAUNCH_OPTIONS.set(options);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Plaquer")
            .with_inner_size(dioxus::desktop::LogicalSize::new(width, height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
