//! # Order Form Controller
//!
//! Owns the current selection and turns it into a priced order on demand.
//!
//! ## Form Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  startup ──► OrderState::default()                                      │
//! │                  │                                                      │
//! │                  │  select_crust / select_size / toggle_topping         │
//! │                  ▼                                                      │
//! │             OrderState ──── compute_order() ───► PricedOrder            │
//! │                  │                │                                     │
//! │                  │                └────────────► ValidationError        │
//! │                  │                                                      │
//! │                  └──── reset() ──► OrderState::default()                │
//! │                                                                         │
//! │  compute_order() never mutates. Only the three selectors and reset do.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//! ```rust
//! use pizza_core::order::OrderForm;
//! use pizza_core::types::{CrustType, SizeOption, Topping};
//!
//! let mut form = OrderForm::new();
//! form.select_crust(CrustType::Thin);
//! form.select_size(SizeOption::Medium);
//! form.toggle_topping(Topping::Pepperoni, true);
//! form.toggle_topping(Topping::Olives, true);
//!
//! let order = form.compute_order().unwrap();
//! assert_eq!(order.subtotal.cents(), 1400);
//! assert_eq!(order.tax.cents(), 98);
//! assert_eq!(order.total.cents(), 1498);
//! ```

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::ValidationResult;
use crate::money::Money;
use crate::types::{CrustType, SizeOption, TaxRate, Topping};
use crate::validation::validate_order;
use crate::ORDER_TAX_RATE;

// =============================================================================
// Order State
// =============================================================================

/// The selections currently on the form.
///
/// `Default` is the state at startup and after a clear: no crust, the first
/// size, no toppings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderState {
    /// At most one crust.
    pub crust: Option<CrustType>,

    /// Always exactly one size.
    pub size: SizeOption,

    /// Ordered set, so iteration follows form order.
    pub toppings: BTreeSet<Topping>,
}

// =============================================================================
// Priced Order
// =============================================================================

/// One topping line of a priced order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToppingLine {
    pub topping: Topping,
    pub label: String,
    pub price: Money,
}

/// Read-only price breakdown computed from an [`OrderState`].
///
/// ## Invariants
/// - `subtotal == size_price + sum(toppings[..].price)`
/// - `tax == subtotal.calculate_tax(tax_rate)` (rounded to the cent)
/// - `total == subtotal + tax`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricedOrder {
    pub crust: CrustType,
    /// Receipt form of the crust, e.g. `Thin Crust`.
    pub crust_label: String,
    pub size: SizeOption,
    pub size_label: String,
    pub size_price: Money,
    /// In form order.
    pub toppings: Vec<ToppingLine>,
    pub subtotal: Money,
    pub tax_rate: TaxRate,
    pub tax: Money,
    pub total: Money,
}

impl PricedOrder {
    /// Prices a crust, size and topping list.
    ///
    /// Callers are expected to have validated the selection; an empty topping
    /// list simply prices the bare pizza.
    pub fn price<I>(crust: CrustType, size: SizeOption, toppings: I, tax_rate: TaxRate) -> Self
    where
        I: IntoIterator<Item = Topping>,
    {
        let toppings: Vec<ToppingLine> = toppings
            .into_iter()
            .map(|topping| ToppingLine {
                topping,
                label: topping.label().to_string(),
                price: topping.price(),
            })
            .collect();

        let size_price = size.price();
        let subtotal = size_price + toppings.iter().map(|line| line.price).sum::<Money>();
        let tax = subtotal.calculate_tax(tax_rate);

        PricedOrder {
            crust,
            crust_label: crust.receipt_label().to_string(),
            size,
            size_label: size.label().to_string(),
            size_price,
            toppings,
            subtotal,
            tax_rate,
            tax,
            total: subtotal + tax,
        }
    }
}

// =============================================================================
// Quit Decision
// =============================================================================

/// Answer given to the "Are you sure you want to quit?" prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuitResponse {
    Yes,
    No,
}

// =============================================================================
// Order Form Controller
// =============================================================================

/// The order form controller.
///
/// Holds the only mutable state of the application. The presentation layer
/// forwards widget events here and renders what comes back.
#[derive(Debug, Clone, Default)]
pub struct OrderForm {
    state: OrderState,
}

impl OrderForm {
    /// Creates a form in its startup state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current selections.
    pub fn state(&self) -> &OrderState {
        &self.state
    }

    pub fn crust(&self) -> Option<CrustType> {
        self.state.crust
    }

    pub fn size(&self) -> SizeOption {
        self.state.size
    }

    /// Selected toppings in form order.
    pub fn toppings(&self) -> impl Iterator<Item = Topping> + '_ {
        self.state.toppings.iter().copied()
    }

    pub fn is_topping_selected(&self, topping: Topping) -> bool {
        self.state.toppings.contains(&topping)
    }

    /// Sets the active crust, replacing any earlier choice.
    pub fn select_crust(&mut self, crust: CrustType) {
        self.state.crust = Some(crust);
    }

    /// Sets the active size.
    pub fn select_size(&mut self, size: SizeOption) {
        self.state.size = size;
    }

    /// Adds (`selected == true`) or removes a topping. Both directions are
    /// idempotent.
    pub fn toggle_topping(&mut self, topping: Topping, selected: bool) {
        if selected {
            self.state.toppings.insert(topping);
        } else {
            self.state.toppings.remove(&topping);
        }
    }

    /// Prices the current selection at the fixed order tax rate.
    ///
    /// ## Errors
    /// - [`ValidationError::NoCrustSelected`](crate::ValidationError::NoCrustSelected)
    ///   when no crust is selected, whatever else is on the form
    /// - [`ValidationError::NoToppingSelected`](crate::ValidationError::NoToppingSelected)
    ///   when a crust is selected but no topping is
    pub fn compute_order(&self) -> ValidationResult<PricedOrder> {
        let crust = validate_order(&self.state)?;
        Ok(PricedOrder::price(
            crust,
            self.state.size,
            self.toppings(),
            ORDER_TAX_RATE,
        ))
    }

    /// Clears the crust, restores the first size and drops every topping.
    pub fn reset(&mut self) {
        self.state = OrderState::default();
    }

    /// Whether the process should terminate given the user's answer.
    ///
    /// Showing the prompt and exiting belong to the presentation layer.
    pub fn confirm_quit(&self, response: QuitResponse) -> bool {
        matches!(response, QuitResponse::Yes)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    fn form_with(crust: CrustType, size: SizeOption, toppings: &[Topping]) -> OrderForm {
        let mut form = OrderForm::new();
        form.select_crust(crust);
        form.select_size(size);
        for topping in toppings {
            form.toggle_topping(*topping, true);
        }
        form
    }

    #[test]
    fn test_new_form_state() {
        let form = OrderForm::new();
        assert_eq!(form.crust(), None);
        assert_eq!(form.size(), SizeOption::Small);
        assert_eq!(form.toppings().count(), 0);
    }

    #[test]
    fn test_thin_medium_pepperoni_olives() {
        let form = form_with(
            CrustType::Thin,
            SizeOption::Medium,
            &[Topping::Pepperoni, Topping::Olives],
        );

        let order = form.compute_order().unwrap();
        assert_eq!(order.crust_label, "Thin Crust");
        assert_eq!(order.size_label, "Medium");
        assert_eq!(order.size_price.cents(), 1200);
        assert_eq!(order.subtotal.cents(), 1400);
        assert_eq!(order.tax.cents(), 98);
        assert_eq!(order.total.cents(), 1498);
    }

    #[test]
    fn test_deep_dish_super_large_cheese() {
        let form = form_with(CrustType::DeepDish, SizeOption::SuperLarge, &[Topping::Cheese]);

        let order = form.compute_order().unwrap();
        assert_eq!(order.crust_label, "Deep-dish Crust");
        assert_eq!(order.subtotal.cents(), 2100);
        assert_eq!(order.tax.cents(), 147);
        assert_eq!(order.total.cents(), 2247);
    }

    #[test]
    fn test_pricing_formula_over_whole_menu() {
        // Every crust × size × topping-subset (non-empty) of the menu.
        for crust in CrustType::ALL {
            for size in SizeOption::ALL {
                for mask in 1u32..(1 << Topping::ALL.len()) {
                    let picked: Vec<Topping> = Topping::ALL
                        .iter()
                        .enumerate()
                        .filter(|(i, _)| mask & (1 << i) != 0)
                        .map(|(_, t)| *t)
                        .collect();
                    let order = form_with(crust, size, &picked).compute_order().unwrap();

                    let subtotal = size.price().cents() + 100 * picked.len() as i64;
                    let tax = (subtotal * 7 + 50) / 100;
                    assert_eq!(order.subtotal.cents(), subtotal);
                    assert_eq!(order.tax.cents(), tax);
                    assert_eq!(order.total.cents(), subtotal + tax);
                    assert_eq!(order.toppings.len(), picked.len());
                }
            }
        }
    }

    #[test]
    fn test_toppings_listed_in_form_order() {
        let form = form_with(
            CrustType::Regular,
            SizeOption::Large,
            &[Topping::Pineapple, Topping::Cheese, Topping::Bacon],
        );

        let order = form.compute_order().unwrap();
        let labels: Vec<&str> = order.toppings.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(labels, vec!["Cheese", "Bacon", "Pineapple"]);
    }

    #[test]
    fn test_no_crust_selected() {
        let mut form = OrderForm::new();
        assert_eq!(form.compute_order(), Err(ValidationError::NoCrustSelected));

        form.toggle_topping(Topping::Mushrooms, true);
        form.select_size(SizeOption::SuperLarge);
        assert_eq!(form.compute_order(), Err(ValidationError::NoCrustSelected));
    }

    #[test]
    fn test_no_topping_selected() {
        let form = form_with(CrustType::Thin, SizeOption::Small, &[]);
        assert_eq!(form.compute_order(), Err(ValidationError::NoToppingSelected));
    }

    #[test]
    fn test_select_crust_overwrites() {
        let mut form = form_with(CrustType::Thin, SizeOption::Small, &[Topping::Cheese]);
        form.select_crust(CrustType::DeepDish);

        assert_eq!(form.crust(), Some(CrustType::DeepDish));
        assert_eq!(form.compute_order().unwrap().crust, CrustType::DeepDish);
    }

    #[test]
    fn test_reset_returns_to_clean_state() {
        let mut form = form_with(
            CrustType::Regular,
            SizeOption::Large,
            &[Topping::Bacon, Topping::Olives],
        );

        form.reset();
        assert_eq!(form.state(), &OrderState::default());
        assert_eq!(form.compute_order(), Err(ValidationError::NoCrustSelected));

        form.reset();
        assert_eq!(form.compute_order(), Err(ValidationError::NoCrustSelected));
    }

    #[test]
    fn test_toggle_off_equals_never_selected() {
        let plain = form_with(CrustType::Thin, SizeOption::Medium, &[Topping::Cheese]);

        let mut toggled = form_with(CrustType::Thin, SizeOption::Medium, &[Topping::Cheese]);
        toggled.toggle_topping(Topping::Bacon, true);
        assert!(toggled.is_topping_selected(Topping::Bacon));
        toggled.toggle_topping(Topping::Bacon, false);
        assert!(!toggled.is_topping_selected(Topping::Bacon));

        assert_eq!(toggled.state(), plain.state());
        assert_eq!(toggled.compute_order(), plain.compute_order());
    }

    #[test]
    fn test_toggle_is_idempotent() {
        let mut form = OrderForm::new();
        form.toggle_topping(Topping::Olives, true);
        form.toggle_topping(Topping::Olives, true);
        assert_eq!(form.toppings().count(), 1);

        form.toggle_topping(Topping::Olives, false);
        form.toggle_topping(Topping::Olives, false);
        assert_eq!(form.toppings().count(), 0);
    }

    #[test]
    fn test_compute_order_does_not_mutate() {
        let form = form_with(CrustType::Thin, SizeOption::Large, &[Topping::Cheese]);
        let before = form.state().clone();

        let first = form.compute_order().unwrap();
        let second = form.compute_order().unwrap();

        assert_eq!(first, second);
        assert_eq!(form.state(), &before);
    }

    #[test]
    fn test_confirm_quit() {
        let form = OrderForm::new();
        assert!(form.confirm_quit(QuitResponse::Yes));
        assert!(!form.confirm_quit(QuitResponse::No));
    }

    #[test]
    fn test_priced_order_serializes_cents() {
        let order = form_with(CrustType::Thin, SizeOption::Small, &[Topping::Cheese])
            .compute_order()
            .unwrap();

        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["crust"], "thin");
        assert_eq!(json["size"], "small");
        assert_eq!(json["subtotal"], 900);
        assert_eq!(json["tax_rate"], 700);
        assert_eq!(json["tax"], 63);
        assert_eq!(json["total"], 963);
        assert_eq!(json["toppings"][0]["label"], "Cheese");
    }
}
