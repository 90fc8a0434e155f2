//! Price resolution.
//!
//! Pure functions that pick the price a customer sees (and pays) from the
//! optional price fields on a product and its variants. Nothing here
//! errors: missing or malformed price data degrades to `None` and the
//! caller decides how to render "price unavailable".
//!
//! Two distinct rules live side by side and must not be merged:
//!
//! - **Precedence** ([`resolve_item_price`]) mixes tiers: any sale price,
//!   variant or product, beats any regular price.
//! - **Sale detection** ([`resolve_sale_info`]) is tier-local: an item is
//!   "on sale" only when a single tier carries both a regular and a lower
//!   sale price. A variant priced by the product's sale price is cheap,
//!   but it is not badged as discounted.

use crate::catalog::{Product, ProductVariant};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A discounted price pair at one tier, with the integer percent saved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleInfo {
    /// Regular price before the discount.
    pub original_price: Money,
    /// Discounted price.
    pub sale_price: Money,
    /// Percent saved, rounded to the nearest integer (0-100).
    pub discount_percent: u8,
}

/// The [lowest, highest] effective price across a product's variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub lowest: Money,
    pub highest: Money,
}

impl PriceRange {
    /// Whether the range collapses to a single price.
    pub fn is_single(&self) -> bool {
        self.lowest == self.highest
    }
}

/// What a listing tile shows: the amount, plus sale metadata when the
/// shown amount is a discount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayPriceInfo {
    /// Amount to render.
    pub amount: Money,
    /// Sale metadata, when the amount is a sale price.
    pub sale: Option<SaleInfo>,
}

/// Resolve the purchase price for a product with an optionally selected
/// variant.
///
/// Returns the first defined value in precedence order: variant sale
/// price, product sale price, variant regular price, product regular
/// price. A discount at either tier beats any regular price at any tier.
/// `None` when none of the four fields is set.
pub fn resolve_item_price(product: &Product, variant: Option<&ProductVariant>) -> Option<Money> {
    variant
        .and_then(|v| v.sale_price)
        .or(product.sale_price)
        .or_else(|| variant.and_then(|v| v.price))
        .or(product.price)
}

/// Integer percent saved when `original` is discounted to `sale`.
///
/// `round((original - sale) / original * 100)`. Returns 0 when `original`
/// is zero or negative. Callers pre-filter `sale > original`; a free item
/// (`sale` of zero) yields 100.
pub fn discount_percent(original: Money, sale: Money) -> u8 {
    if original.amount_cents <= 0 {
        return 0;
    }
    let saved = (original.amount_cents - sale.amount_cents) as f64;
    (saved / original.amount_cents as f64 * 100.0).round() as u8
}

/// Effective price of a single tier: the sale price when it undercuts the
/// regular price, otherwise the regular price. A sale price without a
/// regular price counts on its own.
fn effective_price(price: Option<Money>, sale_price: Option<Money>) -> Option<Money> {
    match (price, sale_price) {
        (Some(regular), Some(sale)) => {
            if sale.amount_cents < regular.amount_cents {
                Some(sale)
            } else {
                Some(regular)
            }
        }
        (Some(regular), None) => Some(regular),
        (None, sale) => sale,
    }
}

/// A variant's own effective price, without falling back to the parent.
fn variant_effective_price(variant: &ProductVariant) -> Option<Money> {
    effective_price(variant.price, variant.sale_price)
}

/// The product tier's own effective price.
fn product_effective_price(product: &Product) -> Option<Money> {
    effective_price(product.price, product.sale_price)
}

/// Resolve the display range across a product's variants.
///
/// Minimum and maximum of each variant's effective price, over the
/// variants that carry a resolvable price of their own. Falls back to the
/// product's effective price (a single-value range) when no variant
/// yields one. `None` only when neither tier has any price.
pub fn resolve_price_range(product: &Product) -> Option<PriceRange> {
    let mut lowest: Option<Money> = None;
    let mut highest: Option<Money> = None;

    for variant in &product.variants {
        let Some(price) = variant_effective_price(variant) else {
            continue;
        };
        match lowest {
            Some(low) if price.amount_cents >= low.amount_cents => {}
            _ => lowest = Some(price),
        }
        match highest {
            Some(high) if price.amount_cents <= high.amount_cents => {}
            _ => highest = Some(price),
        }
    }

    match (lowest, highest) {
        (Some(lowest), Some(highest)) => Some(PriceRange { lowest, highest }),
        _ => {
            let single = product_effective_price(product)?;
            Some(PriceRange {
                lowest: single,
                highest: single,
            })
        }
    }
}

/// The price shown on listing tiles when no variant is selected: the
/// lowest bound of [`resolve_price_range`].
pub fn resolve_display_price(product: &Product) -> Option<Money> {
    resolve_price_range(product).map(|range| range.lowest)
}

/// Detect a discount at the variant tier first, then the product tier.
///
/// A tier qualifies only when it carries both a regular and a sale price
/// with sale strictly below regular. Tiers are never mixed: a variant
/// regular price paired with a product sale price is not a sale, even
/// though [`resolve_item_price`] would charge the product's sale price.
pub fn resolve_sale_info(product: &Product, variant: Option<&ProductVariant>) -> Option<SaleInfo> {
    if let Some(variant) = variant {
        if let Some(info) = tier_sale_info(variant.price, variant.sale_price) {
            return Some(info);
        }
    }
    tier_sale_info(product.price, product.sale_price)
}

fn tier_sale_info(price: Option<Money>, sale_price: Option<Money>) -> Option<SaleInfo> {
    let original = price?;
    let sale = sale_price?;
    if sale.amount_cents >= original.amount_cents {
        return None;
    }
    Some(SaleInfo {
        original_price: original,
        sale_price: sale,
        discount_percent: discount_percent(original, sale),
    })
}

/// Sale metadata for listing tiles.
///
/// With variants: follow the variant whose effective price is lowest
/// (falling back to the product's effective price for variants without
/// their own) and return that variant's sale info — absent when the
/// cheapest variant is not on sale. Without variants: the product's own
/// sale info.
pub fn resolve_display_sale_info(product: &Product) -> Option<SaleInfo> {
    if product.variants.is_empty() {
        return resolve_sale_info(product, None);
    }

    let mut lowest: Option<Money> = None;
    let mut lowest_info: Option<SaleInfo> = None;

    for variant in &product.variants {
        let info = resolve_sale_info(product, Some(variant));
        let effective = match info {
            Some(info) => Some(info.sale_price),
            None => variant_effective_price(variant).or_else(|| product_effective_price(product)),
        };
        let Some(effective) = effective else {
            continue;
        };
        match lowest {
            Some(low) if effective.amount_cents >= low.amount_cents => {}
            _ => {
                lowest = Some(effective);
                lowest_info = info;
            }
        }
    }

    lowest_info
}

/// The composed listing price: sale metadata when the cheapest option is
/// discounted, the plain display price otherwise. `None` when the product
/// has no price anywhere.
pub fn resolve_display_price_info(product: &Product) -> Option<DisplayPriceInfo> {
    let sale = resolve_display_sale_info(product);
    let amount = match sale {
        Some(info) => info.sale_price,
        None => resolve_display_price(product)?,
    };
    Some(DisplayPriceInfo { amount, sale })
}
