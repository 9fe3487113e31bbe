//! # Validation Module
//!
//! Presence checks run before an order is priced.
//!
//! ## Check Order
//! ```text
//! OrderState
//!     │
//!     ▼
//! crust selected? ── no ──► NoCrustSelected     (toppings not even looked at)
//!     │ yes
//!     ▼
//! any topping?   ── no ──► NoToppingSelected
//!     │ yes
//!     ▼
//! Ok(crust)
//! ```
//!
//! Size needs no check: the form always has one active.

pub use crate::error::ValidationResult;

use crate::error::ValidationError;
use crate::order::OrderState;
use crate::types::CrustType;

/// Validates that the order can be priced and returns the selected crust.
///
/// ## Example
/// ```rust
/// use pizza_core::order::OrderState;
/// use pizza_core::validation::validate_order;
/// use pizza_core::ValidationError;
///
/// let state = OrderState::default();
/// assert_eq!(validate_order(&state), Err(ValidationError::NoCrustSelected));
/// ```
pub fn validate_order(state: &OrderState) -> ValidationResult<CrustType> {
    let crust = state.crust.ok_or(ValidationError::NoCrustSelected)?;

    if state.toppings.is_empty() {
        return Err(ValidationError::NoToppingSelected);
    }

    Ok(crust)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{SizeOption, Topping};

    #[test]
    fn test_missing_crust_wins_over_missing_toppings() {
        let state = OrderState::default();
        assert_eq!(validate_order(&state), Err(ValidationError::NoCrustSelected));
    }

    #[test]
    fn test_missing_crust_with_toppings() {
        let mut state = OrderState::default();
        state.toppings.insert(Topping::Bacon);
        state.size = SizeOption::Large;
        assert_eq!(validate_order(&state), Err(ValidationError::NoCrustSelected));
    }

    #[test]
    fn test_missing_toppings() {
        let state = OrderState {
            crust: Some(CrustType::Regular),
            ..OrderState::default()
        };
        assert_eq!(validate_order(&state), Err(ValidationError::NoToppingSelected));
    }

    #[test]
    fn test_valid_order_returns_crust() {
        let mut state = OrderState {
            crust: Some(CrustType::Thin),
            ..OrderState::default()
        };
        state.toppings.insert(Topping::Cheese);
        assert_eq!(validate_order(&state), Ok(CrustType::Thin));
    }
}
