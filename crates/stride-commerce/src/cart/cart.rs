//! Cart and line item types.
//!
//! Unit prices are resolved through [`pricing::resolve_item_price`] when a
//! product is added, and the same-tier sale pair (when one exists) is
//! captured alongside for savings display. The cart never re-reads the
//! catalog; the caller re-adds items if prices change.

use crate::cart::{CartPricing, LineItemPricing};
use crate::catalog::{pricing, Product, ProductVariant, SaleInfo};
use crate::error::CommerceError;
use crate::ids::{CartId, LineItemId, ProductId, VariantId};
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Maximum quantity allowed per line item.
pub const MAX_QUANTITY_PER_ITEM: i64 = 99;

/// A shopping cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    /// Unique cart identifier.
    pub id: CartId,
    /// Session the cart belongs to.
    pub session_id: String,
    /// Items in the cart.
    pub items: Vec<LineItem>,
    /// Cart currency.
    pub currency: Currency,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp of last update.
    pub updated_at: i64,
}

impl Cart {
    /// Create an empty cart for a session.
    pub fn new(session_id: impl Into<String>) -> Self {
        let now = current_timestamp();
        Self {
            id: CartId::generate(),
            session_id: session_id.into(),
            items: Vec::new(),
            currency: Currency::USD,
            created_at: now,
            updated_at: now,
        }
    }

    /// Add a product (optionally a specific variant) to the cart.
    ///
    /// The unit price comes from the price resolver; adding fails with
    /// `PriceUnavailable` when no price can be determined. Adding the
    /// same product/variant again merges quantities.
    pub fn add_product(
        &mut self,
        product: &Product,
        variant_id: Option<&VariantId>,
        quantity: i64,
    ) -> Result<LineItemId, CommerceError> {
        if quantity <= 0 {
            return Err(CommerceError::InvalidQuantity(quantity));
        }

        let variant = match variant_id {
            Some(id) => Some(
                product
                    .variant(id)
                    .ok_or_else(|| CommerceError::VariantNotFound(id.to_string()))?,
            ),
            None => None,
        };

        let unit_price = pricing::resolve_item_price(product, variant)
            .ok_or_else(|| CommerceError::PriceUnavailable(product.id.to_string()))?;
        let sale = pricing::resolve_sale_info(product, variant);

        if let Some(existing) = self
            .items
            .iter_mut()
            .find(|i| i.product_id == product.id && i.variant_id.as_ref() == variant_id)
        {
            let merged = existing
                .quantity
                .checked_add(quantity)
                .ok_or(CommerceError::Overflow)?;
            if merged > MAX_QUANTITY_PER_ITEM {
                return Err(CommerceError::QuantityExceedsLimit(
                    merged,
                    MAX_QUANTITY_PER_ITEM,
                ));
            }
            existing.quantity = merged;
            existing.update_total()?;
            self.updated_at = current_timestamp();
            return Ok(existing.id.clone());
        }

        if quantity > MAX_QUANTITY_PER_ITEM {
            return Err(CommerceError::QuantityExceedsLimit(
                quantity,
                MAX_QUANTITY_PER_ITEM,
            ));
        }

        let item = LineItem::new(product, variant, quantity, unit_price, sale)?;
        let id = item.id.clone();
        self.items.push(item);
        self.updated_at = current_timestamp();
        Ok(id)
    }

    /// Update a line's quantity. A quantity of zero or less removes the
    /// line. Returns whether a line was touched.
    pub fn update_quantity(
        &mut self,
        line_item_id: &LineItemId,
        quantity: i64,
    ) -> Result<bool, CommerceError> {
        if quantity <= 0 {
            return Ok(self.remove_item(line_item_id));
        }
        if quantity > MAX_QUANTITY_PER_ITEM {
            return Err(CommerceError::QuantityExceedsLimit(
                quantity,
                MAX_QUANTITY_PER_ITEM,
            ));
        }

        if let Some(item) = self.items.iter_mut().find(|i| &i.id == line_item_id) {
            item.quantity = quantity;
            item.update_total()?;
            self.updated_at = current_timestamp();
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Remove a line from the cart.
    pub fn remove_item(&mut self, line_item_id: &LineItemId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| &i.id != line_item_id);
        let removed = self.items.len() < len_before;
        if removed {
            self.updated_at = current_timestamp();
        }
        removed
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.items.clear();
        self.updated_at = current_timestamp();
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get a line by ID.
    pub fn get_item(&self, line_item_id: &LineItemId) -> Option<&LineItem> {
        self.items.iter().find(|i| &i.id == line_item_id)
    }

    /// Compute the cart's totals.
    pub fn pricing(&self) -> Result<CartPricing, CommerceError> {
        let mut line_items = Vec::with_capacity(self.items.len());
        for item in &self.items {
            line_items.push(LineItemPricing {
                line_item_id: item.id.clone(),
                unit_price: item.unit_price,
                quantity: item.quantity,
                total: item.total_price,
                savings: item.savings()?,
            });
        }

        let subtotal = Money::try_sum(self.items.iter().map(|i| &i.total_price), self.currency)
            .ok_or(CommerceError::Overflow)?;
        let savings_total = Money::try_sum(line_items.iter().map(|l| &l.savings), self.currency)
            .ok_or(CommerceError::Overflow)?;

        Ok(CartPricing {
            subtotal,
            savings_total,
            grand_total: subtotal,
            line_items,
        })
    }

    /// Merge another cart into this one (e.g. anonymous cart on login).
    /// Quantities cap at `MAX_QUANTITY_PER_ITEM`.
    pub fn merge(&mut self, other: Cart) -> Result<(), CommerceError> {
        for item in other.items {
            if let Some(existing) = self
                .items
                .iter_mut()
                .find(|i| i.product_id == item.product_id && i.variant_id == item.variant_id)
            {
                existing.quantity = existing
                    .quantity
                    .saturating_add(item.quantity)
                    .min(MAX_QUANTITY_PER_ITEM);
                existing.update_total()?;
            } else {
                self.items.push(item);
            }
        }
        self.updated_at = current_timestamp();
        Ok(())
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new("anonymous")
    }
}

/// A line in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Unique line item identifier.
    pub id: LineItemId,
    /// Product being purchased.
    pub product_id: ProductId,
    /// Selected variant, when the product has variants.
    pub variant_id: Option<VariantId>,
    /// Product name (denormalized for display).
    pub product_name: String,
    /// Variant display name, e.g. "10.5".
    pub variant_name: Option<String>,
    /// Quantity.
    pub quantity: i64,
    /// Charged unit price, resolved when the item was added.
    pub unit_price: Money,
    /// Same-tier sale pair captured at add time, when the item was on sale.
    pub sale: Option<SaleInfo>,
    /// `unit_price * quantity`.
    pub total_price: Money,
}

impl LineItem {
    fn new(
        product: &Product,
        variant: Option<&ProductVariant>,
        quantity: i64,
        unit_price: Money,
        sale: Option<SaleInfo>,
    ) -> Result<Self, CommerceError> {
        let total_price = unit_price
            .try_multiply(quantity)
            .ok_or(CommerceError::Overflow)?;
        Ok(Self {
            id: LineItemId::generate(),
            product_id: product.id.clone(),
            variant_id: variant.map(|v| v.id.clone()),
            product_name: product.name.clone(),
            variant_name: variant.map(|v| v.display_name()),
            quantity,
            unit_price,
            sale,
            total_price,
        })
    }

    /// Whether this line was discounted when added.
    pub fn is_on_sale(&self) -> bool {
        self.sale.is_some()
    }

    /// Amount saved versus the regular price, zero when not on sale.
    pub fn savings(&self) -> Result<Money, CommerceError> {
        let Some(sale) = self.sale else {
            return Ok(Money::zero(self.unit_price.currency));
        };
        sale.original_price
            .try_subtract(&sale.sale_price)
            .and_then(|per_unit| per_unit.try_multiply(self.quantity))
            .ok_or(CommerceError::Overflow)
    }

    /// Recompute the line total from the quantity.
    pub fn update_total(&mut self) -> Result<(), CommerceError> {
        self.total_price = self
            .unit_price
            .try_multiply(self.quantity)
            .ok_or(CommerceError::Overflow)?;
        Ok(())
    }
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usd(cents: i64) -> Money {
        Money::new(cents, Currency::USD)
    }

    fn priced_product(price: i64, sale_price: Option<i64>) -> Product {
        let mut p = Product::new("SKU-1", "Court Classic", "court-classic");
        p.price = Some(usd(price));
        p.sale_price = sale_price.map(usd);
        p
    }

    fn with_variant(mut product: Product, price: Option<i64>, sale: Option<i64>) -> Product {
        let mut v = ProductVariant::new(product.id.clone(), "SKU-1-10");
        v.add_option("Size", "10");
        v.price = price.map(usd);
        v.sale_price = sale.map(usd);
        product.variants.push(v);
        product
    }

    #[test]
    fn test_add_product_resolves_price() {
        let mut cart = Cart::new("sess-1");
        let product = priced_product(9900, None);
        cart.add_product(&product, None, 2).unwrap();

        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.items[0].unit_price, usd(9900));
        assert_eq!(cart.items[0].total_price, usd(19800));
        assert!(!cart.items[0].is_on_sale());
    }

    #[test]
    fn test_add_variant_uses_precedence() {
        let mut cart = Cart::new("sess-1");
        let product = with_variant(priced_product(9900, None), Some(12000), Some(8000));
        let variant_id = product.variants[0].id.clone();

        cart.add_product(&product, Some(&variant_id), 1).unwrap();
        let item = &cart.items[0];
        assert_eq!(item.unit_price, usd(8000));
        assert_eq!(item.variant_name.as_deref(), Some("10"));
        assert!(item.is_on_sale());
        assert_eq!(item.sale.unwrap().original_price, usd(12000));
    }

    #[test]
    fn test_add_unpriced_product_fails() {
        let mut cart = Cart::new("sess-1");
        let product = Product::new("SKU-2", "No Price Yet", "no-price-yet");
        let err = cart.add_product(&product, None, 1).unwrap_err();
        assert!(matches!(err, CommerceError::PriceUnavailable(_)));
    }

    #[test]
    fn test_unknown_variant_fails() {
        let mut cart = Cart::new("sess-1");
        let product = priced_product(9900, None);
        let err = cart
            .add_product(&product, Some(&VariantId::new("missing")), 1)
            .unwrap_err();
        assert!(matches!(err, CommerceError::VariantNotFound(_)));
    }

    #[test]
    fn test_same_item_merges_quantity() {
        let mut cart = Cart::new("sess-1");
        let product = priced_product(9900, None);
        cart.add_product(&product, None, 1).unwrap();
        cart.add_product(&product, None, 2).unwrap();

        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.items[0].total_price, usd(29700));
    }

    #[test]
    fn test_quantity_validation() {
        let mut cart = Cart::new("sess-1");
        let product = priced_product(9900, None);

        assert!(matches!(
            cart.add_product(&product, None, 0),
            Err(CommerceError::InvalidQuantity(0))
        ));
        assert!(matches!(
            cart.add_product(&product, None, MAX_QUANTITY_PER_ITEM + 1),
            Err(CommerceError::QuantityExceedsLimit(..))
        ));
    }

    #[test]
    fn test_update_and_remove() {
        let mut cart = Cart::new("sess-1");
        let product = priced_product(9900, None);
        let line_id = cart.add_product(&product, None, 1).unwrap();

        assert!(cart.update_quantity(&line_id, 4).unwrap());
        assert_eq!(cart.item_count(), 4);

        // Zero removes the line.
        assert!(cart.update_quantity(&line_id, 0).unwrap());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_pricing_totals_and_savings() {
        let mut cart = Cart::new("sess-1");
        let on_sale = priced_product(10000, Some(7500));
        let regular = priced_product(5000, None);

        cart.add_product(&on_sale, None, 2).unwrap();
        cart.add_product(&regular, None, 1).unwrap();

        let pricing = cart.pricing().unwrap();
        assert_eq!(pricing.subtotal, usd(20000)); // 2*7500 + 5000
        assert_eq!(pricing.savings_total, usd(5000)); // 2*(10000-7500)
        assert_eq!(pricing.grand_total, usd(20000));
        assert!(pricing.has_savings());
        assert_eq!(pricing.line_items.len(), 2);
    }

    #[test]
    fn test_merge_caps_quantity() {
        let product = priced_product(9900, None);

        let mut a = Cart::new("sess-a");
        a.add_product(&product, None, 80).unwrap();
        let mut b = Cart::new("sess-b");
        b.add_product(&product, None, 60).unwrap();

        a.merge(b).unwrap();
        assert_eq!(a.item_count(), MAX_QUANTITY_PER_ITEM);
    }
}
