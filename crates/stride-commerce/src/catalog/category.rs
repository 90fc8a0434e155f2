//! Category and brand taxonomy.

use crate::ids::{BrandId, CategoryId};
use serde::{Deserialize, Serialize};

/// A flat storefront category (e.g. "Running", "Lifestyle").
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    /// Unique category identifier.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
    /// URL-friendly slug.
    pub slug: String,
    /// Sort order position.
    pub position: i32,
}

impl Category {
    pub fn new(name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id: CategoryId::generate(),
            name: name.into(),
            slug: slug.into(),
            position: 0,
        }
    }
}

/// A product brand (e.g. "Nike", "New Balance").
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Brand {
    /// Unique brand identifier.
    pub id: BrandId,
    /// Display name.
    pub name: String,
    /// URL-friendly slug.
    pub slug: String,
}

impl Brand {
    pub fn new(name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id: BrandId::generate(),
            name: name.into(),
            slug: slug.into(),
        }
    }
}
