//! # State Module
//!
//! Application state for the desktop app, split by concern.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      ui::PizzaApp                               │   │
//! │  │  owns: FormState (mutable) + ConfigState (read-only)            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │               ┌──────────────┴──────────────┐                           │
//! │               ▼                             ▼                           │
//! │  ┌──────────────────────────┐  ┌──────────────────────────┐             │
//! │  │       FormState          │  │      ConfigState         │             │
//! │  │                          │  │                          │             │
//! │  │  OrderForm (pizza-core)  │  │  window title / size     │             │
//! │  │  receipt text            │  │  currency symbol         │             │
//! │  │  open dialog             │  │  log filter              │             │
//! │  └──────────────────────────┘  └──────────────────────────┘             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod form;

pub use config::ConfigState;
pub use form::{Dialog, FormState};
