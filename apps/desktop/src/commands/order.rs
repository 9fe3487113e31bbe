//! # Order Command
//!
//! ## User Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  User presses "Order"                                                   │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  OrderForm::compute_order()                                             │
//! │                    │                                                    │
//! │          ┌─────────┴──────────┐                                         │
//! │          ▼                    ▼                                         │
//! │   Ok(PricedOrder)      Err(ValidationError)                             │
//! │          │                    │                                         │
//! │          ▼                    ▼                                         │
//! │   render_receipt()     "Please select ..." dialog                       │
//! │   into details area    (details area untouched)                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{debug, info};

use super::{CommandOutcome, CommandResult};
use crate::receipt::render_receipt;
use crate::state::{ConfigState, FormState};

pub fn place_order(state: &mut FormState, config: &ConfigState) -> CommandResult {
    let order = state.form().compute_order()?;

    info!(
        crust = %order.crust,
        size = %order.size,
        toppings = order.toppings.len(),
        subtotal_cents = order.subtotal.cents(),
        tax_cents = order.tax.cents(),
        total_cents = order.total.cents(),
        "order priced"
    );
    if let Ok(json) = serde_json::to_string(&order) {
        debug!(order = %json, "priced order detail");
    }

    state.set_receipt(render_receipt(&order, config));
    Ok(CommandOutcome::Continue)
}
