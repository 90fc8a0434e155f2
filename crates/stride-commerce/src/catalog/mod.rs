//! Product catalog module.
//!
//! Read-only product/variant view models, taxonomy, and price resolution.

mod category;
mod product;
pub mod pricing;

pub use category::{Brand, Category};
pub use pricing::{DisplayPriceInfo, PriceRange, SaleInfo};
pub use product::{Product, ProductStatus, ProductVariant, VariantOption};
