//! # Pizza Order Form Entry Point
//!
//! ## Startup Sequence
//! 1. Load configuration (defaults + `PIZZA_*` environment variables)
//! 2. Initialize tracing (logging)
//! 3. Create the form state
//! 4. Open the window and run the egui event loop

// Prevents an additional console window on Windows in release
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]

fn main() -> eframe::Result<()> {
    // The actual setup is in lib.rs for better testability
    pizza_desktop_lib::run()
}
