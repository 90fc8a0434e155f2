//! Product and variant view models.
//!
//! These records are read-only snapshots supplied by the CMS layer per
//! request. Price fields are optional at both the product and variant
//! tier; picking among them is the job of [`crate::catalog::pricing`].

use crate::ids::{BrandId, CategoryId, ProductId, VariantId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Product visibility status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ProductStatus {
    /// Draft, not visible to customers.
    Draft,
    /// Published and visible.
    #[default]
    Published,
    /// Archived, hidden but kept.
    Archived,
}

impl ProductStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductStatus::Draft => "draft",
            ProductStatus::Published => "published",
            ProductStatus::Archived => "archived",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "draft" => Some(ProductStatus::Draft),
            "published" => Some(ProductStatus::Published),
            "archived" => Some(ProductStatus::Archived),
            _ => None,
        }
    }
}

/// A sellable catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Stock keeping unit.
    pub sku: String,
    /// Product name.
    pub name: String,
    /// URL-friendly slug.
    pub slug: String,
    /// Brand, when assigned.
    pub brand_id: Option<BrandId>,
    /// Long description (may contain rich text from the CMS).
    pub description: Option<String>,
    /// Visibility status.
    pub status: ProductStatus,
    /// Categories this product belongs to.
    pub category_ids: Vec<CategoryId>,
    /// Tags for filtering and search.
    pub tags: Vec<String>,
    /// Base price. Absent when the CMS entry carries no price.
    pub price: Option<Money>,
    /// Sale price. Only meaningful when strictly below `price`.
    pub sale_price: Option<Money>,
    /// Purchasable configurations (e.g. sizes). Empty for single-SKU items.
    pub variants: Vec<ProductVariant>,
    /// Additional metadata as JSON.
    pub metadata: serde_json::Value,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp of last update.
    pub updated_at: i64,
}

impl Product {
    /// Create a product with no price data set.
    pub fn new(sku: impl Into<String>, name: impl Into<String>, slug: impl Into<String>) -> Self {
        let now = current_timestamp();
        Self {
            id: ProductId::generate(),
            sku: sku.into(),
            name: name.into(),
            slug: slug.into(),
            brand_id: None,
            description: None,
            status: ProductStatus::Published,
            category_ids: Vec::new(),
            tags: Vec::new(),
            price: None,
            sale_price: None,
            variants: Vec::new(),
            metadata: serde_json::Value::Object(serde_json::Map::new()),
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether the product is visible to customers.
    pub fn is_published(&self) -> bool {
        self.status == ProductStatus::Published
    }

    /// Whether the product carries variants.
    pub fn has_variants(&self) -> bool {
        !self.variants.is_empty()
    }

    /// Look up a variant by ID.
    pub fn variant(&self, id: &VariantId) -> Option<&ProductVariant> {
        self.variants.iter().find(|v| &v.id == id)
    }

    pub fn add_category(&mut self, category_id: CategoryId) {
        if !self.category_ids.contains(&category_id) {
            self.category_ids.push(category_id);
        }
    }

    pub fn add_tag(&mut self, tag: impl Into<String>) {
        let tag = tag.into();
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
    }
}

/// A purchasable configuration of a product (e.g. a size).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductVariant {
    /// Unique variant identifier.
    pub id: VariantId,
    /// Parent product ID.
    pub product_id: ProductId,
    /// Stock keeping unit for this variant.
    pub sku: String,
    /// Options defining this variant (e.g. Size: 10.5).
    pub options: Vec<VariantOption>,
    /// Price override. Absent means the parent's price applies.
    pub price: Option<Money>,
    /// Sale price override. Only meaningful when strictly below the
    /// variant's regular price.
    pub sale_price: Option<Money>,
    /// Sort order position.
    pub position: i32,
}

impl ProductVariant {
    /// Create a variant with no price overrides.
    pub fn new(product_id: ProductId, sku: impl Into<String>) -> Self {
        Self {
            id: VariantId::generate(),
            product_id,
            sku: sku.into(),
            options: Vec::new(),
            price: None,
            sale_price: None,
            position: 0,
        }
    }

    /// Variant display name built from its options, e.g. "10.5 / White".
    pub fn display_name(&self) -> String {
        if self.options.is_empty() {
            "Default".to_string()
        } else {
            self.options
                .iter()
                .map(|o| o.value.as_str())
                .collect::<Vec<_>>()
                .join(" / ")
        }
    }

    pub fn add_option(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.options.push(VariantOption {
            name: name.into(),
            value: value.into(),
        });
    }
}

/// A variant option (e.g. Size: 10.5).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct VariantOption {
    /// Option name (e.g. "Size").
    pub name: String,
    /// Option value (e.g. "10.5").
    pub value: String,
}

impl VariantOption {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
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

    #[test]
    fn test_product_creation() {
        let product = Product::new("AJ1-MID", "Air Runner Mid", "air-runner-mid");
        assert_eq!(product.sku, "AJ1-MID");
        assert!(product.is_published());
        assert!(!product.has_variants());
        assert!(product.price.is_none());
    }

    #[test]
    fn test_variant_lookup() {
        let mut product = Product::new("AJ1-MID", "Air Runner Mid", "air-runner-mid");
        let variant = ProductVariant::new(product.id.clone(), "AJ1-MID-10");
        let variant_id = variant.id.clone();
        product.variants.push(variant);

        assert!(product.has_variants());
        assert!(product.variant(&variant_id).is_some());
        assert!(product.variant(&VariantId::new("missing")).is_none());
    }

    #[test]
    fn test_variant_display_name() {
        let mut variant = ProductVariant::new(ProductId::generate(), "AJ1-MID-10-WHT");
        assert_eq!(variant.display_name(), "Default");

        variant.add_option("Size", "10");
        variant.add_option("Color", "White");
        assert_eq!(variant.display_name(), "10 / White");
    }

    #[test]
    fn test_status_parsing() {
        assert_eq!(ProductStatus::from_str("Draft"), Some(ProductStatus::Draft));
        assert_eq!(
            ProductStatus::from_str("published"),
            Some(ProductStatus::Published)
        );
        assert_eq!(ProductStatus::from_str("gone"), None);
    }
}
