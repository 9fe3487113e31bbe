//! # Pizza Desktop Library
//!
//! Core library for the pizza order form desktop application.
//! This is the main entry point that configures and runs the eframe app.
//!
//! ## Module Organization
//! ```text
//! pizza_desktop_lib/
//! ├── lib.rs          ◄─── You are here (logging, window setup & run)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── config.rs   ◄─── Configuration state
//! │   └── form.rs     ◄─── Order form + receipt + pending dialog
//! ├── commands/
//! │   ├── mod.rs      ◄─── FormCommand and dispatch
//! │   ├── form.rs     ◄─── Selection and clear commands
//! │   ├── order.rs    ◄─── Order command (pricing + receipt)
//! │   └── quit.rs     ◄─── Quit confirmation flow
//! ├── receipt.rs      ◄─── Receipt text layout
//! ├── ui/
//! │   ├── mod.rs
//! │   └── app.rs      ◄─── eframe::App, widgets and dialogs
//! └── error.rs        ◄─── UiError shown in the message dialog
//! ```
//!
//! ## Separation of Concerns
//! The UI never touches `OrderForm` directly for writes. Every interaction
//! becomes a [`commands::FormCommand`] and goes through
//! [`commands::dispatch`], which is what the tests exercise.

pub mod commands;
pub mod error;
pub mod receipt;
pub mod state;
pub mod ui;

use tracing::info;
use tracing_subscriber::EnvFilter;

use state::ConfigState;
use ui::PizzaApp;

/// Runs the desktop application.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Load Configuration ───────────────────────────────────────────────► │
/// │     • ConfigState::from_env (PIZZA_WINDOW_TITLE, PIZZA_CURRENCY_SYMBOL) │
/// │                                                                         │
/// │  2. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter                                │
/// │     • RUST_LOG, else PIZZA_LOG, else "info,pizza=debug"                 │
/// │                                                                         │
/// │  3. Build & Run eframe App ───────────────────────────────────────────► │
/// │     • Window title and size from config                                 │
/// │     • PizzaApp owns FormState for the whole process lifetime            │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> eframe::Result<()> {
    let config = ConfigState::from_env();

    init_tracing(&config);

    info!(
        title = %config.window_title,
        currency = %config.currency_symbol,
        "Starting Pizza Order Form"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.window_title.clone())
            .with_inner_size(config.window_size)
            .with_min_inner_size([420.0, 320.0]),
        ..Default::default()
    };

    let app_name = config.window_title.clone();
    eframe::run_native(
        &app_name,
        options,
        Box::new(move |_cc| Ok(Box::new(PizzaApp::new(config)))),
    )
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `PIZZA_LOG=pizza=trace` - Used when `RUST_LOG` is unset
/// - Default: INFO, DEBUG for the pizza crates
fn init_tracing(config: &ConfigState) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
