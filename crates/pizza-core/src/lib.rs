//! # pizza-core: Pure Order Logic for the Pizza Order Form
//!
//! This crate holds everything the order form knows that is not a widget:
//! the menu, its prices, the current selection, and the price breakdown.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Pizza Order Form Architecture                       │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Desktop UI (eframe / egui)                      │   │
//! │  │    Crust radios ─ Size combo ─ Topping checkboxes ─ Buttons     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ FormCommand                            │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               commands::dispatch (apps/desktop)                 │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ pizza-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   order   │  │ validation│  │   │
//! │  │   │  Crust    │  │   Money   │  │ OrderForm │  │  presence │  │   │
//! │  │   │  Size     │  │  tax calc │  │PricedOrder│  │  checks   │  │   │
//! │  │   │  Topping  │  │           │  │           │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • NO WIDGETS • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Menu types (CrustType, SizeOption, Topping, TaxRate)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`order`] - The order form controller and the priced order
//! - [`validation`] - Presence checks run before pricing
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same selection = same price breakdown
//! 2. **Integer Money**: all amounts are cents, tax is rounded once when computed
//! 3. **Explicit Errors**: validation failures are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use pizza_core::{CrustType, OrderForm, SizeOption, Topping, ValidationError};
//!
//! let mut form = OrderForm::new();
//! assert_eq!(form.compute_order(), Err(ValidationError::NoCrustSelected));
//!
//! form.select_crust(CrustType::DeepDish);
//! form.select_size(SizeOption::SuperLarge);
//! form.toggle_topping(Topping::Cheese, true);
//!
//! let order = form.compute_order().unwrap();
//! assert_eq!(order.total.to_string(), "$22.47");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod order;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError, ValidationResult};
pub use money::Money;
pub use order::{OrderForm, OrderState, PricedOrder, QuitResponse, ToppingLine};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Sales tax applied to every order: 7%.
pub const ORDER_TAX_RATE: TaxRate = TaxRate::from_bps(700);

/// Flat price of any single topping: $1.00.
pub const TOPPING_PRICE: Money = Money::from_cents(100);
