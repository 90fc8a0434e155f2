//! Cart totals.

use crate::ids::LineItemId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Totals for a whole cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartPricing {
    /// Sum of line totals at the charged unit prices.
    pub subtotal: Money,
    /// Amount saved versus regular prices, across discounted lines.
    pub savings_total: Money,
    /// Amount to charge. Shipping and tax are applied downstream.
    pub grand_total: Money,
    /// Per-line breakdown.
    pub line_items: Vec<LineItemPricing>,
}

impl CartPricing {
    /// Whether any line carries a discount.
    pub fn has_savings(&self) -> bool {
        self.savings_total.is_positive()
    }
}

/// Totals for one line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItemPricing {
    /// Line item ID.
    pub line_item_id: LineItemId,
    /// Charged unit price.
    pub unit_price: Money,
    /// Quantity.
    pub quantity: i64,
    /// `unit_price * quantity`.
    pub total: Money,
    /// Amount saved versus the regular price, zero when not on sale.
    pub savings: Money,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    #[test]
    fn test_has_savings() {
        let pricing = CartPricing {
            subtotal: Money::new(9000, Currency::USD),
            savings_total: Money::new(1000, Currency::USD),
            grand_total: Money::new(9000, Currency::USD),
            line_items: vec![],
        };
        assert!(pricing.has_savings());

        let pricing = CartPricing {
            savings_total: Money::zero(Currency::USD),
            ..pricing
        };
        assert!(!pricing.has_savings());
    }
}
