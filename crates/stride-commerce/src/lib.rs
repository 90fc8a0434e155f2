//! E-commerce domain types and pricing logic for the Stride storefront.
//!
//! The heart of the crate is [`catalog::pricing`]: pure functions that
//! resolve what a customer sees and pays, given a product whose price
//! fields (base price, sale price, per-variant overrides) may each be
//! absent. Around it sit the supporting domain types:
//!
//! - **Catalog**: products, variants, categories, brands
//! - **Cart**: line items whose unit prices come from the resolver
//! - **Search**: shop-page filter selections compiled to query predicates
//!
//! # Example
//!
//! ```
//! use stride_commerce::prelude::*;
//! use stride_commerce::catalog::pricing;
//!
//! let mut product = Product::new("CC-LOW", "Court Classic Low", "court-classic-low");
//! product.price = Some(Money::new(12000, Currency::USD));
//! product.sale_price = Some(Money::new(9000, Currency::USD));
//!
//! let info = pricing::resolve_display_price_info(&product).unwrap();
//! assert_eq!(info.amount.amount_cents, 9000);
//! assert_eq!(info.sale.unwrap().discount_percent, 25);
//!
//! let mut cart = Cart::new("session-1");
//! cart.add_product(&product, None, 1).unwrap();
//! assert_eq!(cart.pricing().unwrap().grand_total.amount_cents, 9000);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod search;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{
        Brand, Category, DisplayPriceInfo, PriceRange, Product, ProductStatus, ProductVariant,
        SaleInfo, VariantOption,
    };

    // Cart
    pub use crate::cart::{Cart, CartPricing, LineItem, LineItemPricing, MAX_QUANTITY_PER_ITEM};

    // Search
    pub use crate::search::{Filter, FilterSelection, ShopQuery, SortOption};
}
