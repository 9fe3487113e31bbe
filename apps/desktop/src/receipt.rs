//! # Receipt Layout
//!
//! Turns a [`PricedOrder`] into the text shown in the order details area.
//!
//! ```text
//! =========================================
//! Type of Crust & Size: Thin Crust & Medium - $12.00
//! Toppings:
//! Pepperoni - $1.00
//! Olives - $1.00
//! =========================================
//! Sub-total: $14.00
//! Tax (7%): $0.98
//! ----------------------------------------------------
//! Total: $14.98
//! =========================================
//! ```

use pizza_core::PricedOrder;

use crate::state::ConfigState;

const RULE: &str = "=========================================";
const TOTAL_RULE: &str = "----------------------------------------------------";

/// Renders the line-itemized receipt. Every line ends with a newline.
pub fn render_receipt(order: &PricedOrder, config: &ConfigState) -> String {
    let money = |amount| config.format_currency(amount);

    let mut lines = Vec::with_capacity(order.toppings.len() + 9);
    lines.push(RULE.to_string());
    lines.push(format!(
        "Type of Crust & Size: {} & {} - {}",
        order.crust_label,
        order.size_label,
        money(order.size_price)
    ));
    lines.push("Toppings:".to_string());
    for line in &order.toppings {
        lines.push(format!("{} - {}", line.label, money(line.price)));
    }
    lines.push(RULE.to_string());
    lines.push(format!("Sub-total: {}", money(order.subtotal)));
    lines.push(format!("Tax ({}): {}", order.tax_rate, money(order.tax)));
    lines.push(TOTAL_RULE.to_string());
    lines.push(format!("Total: {}", money(order.total)));
    lines.push(RULE.to_string());

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pizza_core::{CrustType, OrderForm, SizeOption, Topping};

    fn priced(crust: CrustType, size: SizeOption, toppings: &[Topping]) -> PricedOrder {
        let mut form = OrderForm::new();
        form.select_crust(crust);
        form.select_size(size);
        for topping in toppings {
            form.toggle_topping(*topping, true);
        }
        form.compute_order().unwrap()
    }

    #[test]
    fn test_receipt_layout() {
        let order = priced(
            CrustType::Thin,
            SizeOption::Medium,
            &[Topping::Olives, Topping::Pepperoni],
        );

        let expected = "\
=========================================
Type of Crust & Size: Thin Crust & Medium - $12.00
Toppings:
Pepperoni - $1.00
Olives - $1.00
=========================================
Sub-total: $14.00
Tax (7%): $0.98
----------------------------------------------------
Total: $14.98
=========================================
";
        assert_eq!(render_receipt(&order, &ConfigState::default()), expected);
    }

    #[test]
    fn test_receipt_uses_configured_currency() {
        let order = priced(CrustType::DeepDish, SizeOption::SuperLarge, &[Topping::Cheese]);
        let config = ConfigState {
            currency_symbol: "€".to_string(),
            ..ConfigState::default()
        };

        let receipt = render_receipt(&order, &config);
        assert!(receipt.contains("Type of Crust & Size: Deep-dish Crust & Super Large - €20.00\n"));
        assert!(receipt.contains("Cheese - €1.00\n"));
        assert!(receipt.contains("Tax (7%): €1.47\n"));
        assert!(receipt.ends_with("Total: €22.47\n=========================================\n"));
    }
}
