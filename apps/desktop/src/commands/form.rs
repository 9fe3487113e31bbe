//! # Selection Commands
//!
//! Radio buttons, the size drop-down, topping checkboxes, and Clear.
//! None of these can fail.

use pizza_core::{CrustType, SizeOption, Topping};

use super::{CommandOutcome, CommandResult};
use crate::state::FormState;

pub fn select_crust(state: &mut FormState, crust: CrustType) -> CommandResult {
    state.form_mut().select_crust(crust);
    Ok(CommandOutcome::Continue)
}

pub fn select_size(state: &mut FormState, size: SizeOption) -> CommandResult {
    state.form_mut().select_size(size);
    Ok(CommandOutcome::Continue)
}

pub fn toggle_topping(state: &mut FormState, topping: Topping, selected: bool) -> CommandResult {
    state.form_mut().toggle_topping(topping, selected);
    Ok(CommandOutcome::Continue)
}

/// Resets every selection and empties the order details area.
pub fn clear_form(state: &mut FormState) -> CommandResult {
    state.form_mut().reset();
    state.clear_receipt();
    Ok(CommandOutcome::Continue)
}

/// Closes an informational message.
pub fn dismiss_dialog(state: &mut FormState) -> CommandResult {
    state.close_dialog();
    Ok(CommandOutcome::Continue)
}
