//! Shop page filters.
//!
//! [`FilterSelection`] mirrors the storefront's filter sidebar; it
//! translates into a conjunctive list of [`Filter`] predicates, each of
//! which renders a parameterized SQL fragment for the catalog query
//! layer.

use crate::ids::{BrandId, CategoryId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// One predicate over the product listing. Predicates combine with AND.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Filter {
    /// Any of the given categories.
    Categories(Vec<CategoryId>),
    /// Any of the given brands.
    Brands(Vec<BrandId>),
    /// A variant option carrying one of the given values (e.g. Size 10).
    OptionValue { name: String, values: Vec<String> },
    /// Effective price within the given bounds.
    PriceBounds {
        min: Option<Money>,
        max: Option<Money>,
    },
    /// Only items with a valid same-tier sale pair.
    OnSale,
    /// Free-text search over name and description.
    Text(String),
}

impl Filter {
    /// Render a parameterized `WHERE` fragment with its bind values.
    pub fn to_sql(&self) -> (String, Vec<String>) {
        match self {
            Filter::Categories(ids) => {
                let placeholders = ids.iter().map(|_| "?").collect::<Vec<_>>().join(", ");
                let values = ids.iter().map(|id| id.as_str().to_string()).collect();
                (
                    format!(
                        "id IN (SELECT product_id FROM product_categories WHERE category_id IN ({}))",
                        placeholders
                    ),
                    values,
                )
            }
            Filter::Brands(ids) => {
                let placeholders = ids.iter().map(|_| "?").collect::<Vec<_>>().join(", ");
                let values = ids.iter().map(|id| id.as_str().to_string()).collect();
                (format!("brand_id IN ({})", placeholders), values)
            }
            Filter::OptionValue { name, values } => {
                let placeholders = values.iter().map(|_| "?").collect::<Vec<_>>().join(", ");
                let mut binds = vec![name.clone()];
                binds.extend(values.iter().cloned());
                (
                    format!(
                        "id IN (SELECT product_id FROM variant_options WHERE name = ? AND value IN ({}))",
                        placeholders
                    ),
                    binds,
                )
            }
            Filter::PriceBounds { min, max } => {
                let mut clauses = Vec::new();
                let mut values = Vec::new();
                if let Some(min) = min {
                    clauses.push("effective_price_cents >= ?".to_string());
                    values.push(min.amount_cents.to_string());
                }
                if let Some(max) = max {
                    clauses.push("effective_price_cents <= ?".to_string());
                    values.push(max.amount_cents.to_string());
                }
                (clauses.join(" AND "), values)
            }
            // Same tier-local validity rule the price resolver applies.
            Filter::OnSale => (
                "sale_price_cents IS NOT NULL AND sale_price_cents < price_cents".to_string(),
                vec![],
            ),
            Filter::Text(query) => (
                "(name LIKE ? OR description LIKE ?)".to_string(),
                vec![format!("%{}%", query), format!("%{}%", query)],
            ),
        }
    }
}

/// The shop page's filter controls, as submitted by the UI.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FilterSelection {
    /// Selected categories.
    pub categories: Vec<CategoryId>,
    /// Selected brands.
    pub brands: Vec<BrandId>,
    /// Selected sizes (variant option "Size").
    pub sizes: Vec<String>,
    /// Lower price bound.
    pub min_price: Option<Money>,
    /// Upper price bound.
    pub max_price: Option<Money>,
    /// Only discounted items.
    pub on_sale: bool,
    /// Free-text search.
    pub search: Option<String>,
}

impl FilterSelection {
    /// Translate the selection into its conjunctive predicate list.
    /// Empty controls contribute nothing.
    pub fn predicates(&self) -> Vec<Filter> {
        let mut filters = Vec::new();

        if !self.categories.is_empty() {
            filters.push(Filter::Categories(self.categories.clone()));
        }
        if !self.brands.is_empty() {
            filters.push(Filter::Brands(self.brands.clone()));
        }
        if !self.sizes.is_empty() {
            filters.push(Filter::OptionValue {
                name: "Size".to_string(),
                values: self.sizes.clone(),
            });
        }
        if self.min_price.is_some() || self.max_price.is_some() {
            filters.push(Filter::PriceBounds {
                min: self.min_price,
                max: self.max_price,
            });
        }
        if self.on_sale {
            filters.push(Filter::OnSale);
        }
        if let Some(search) = self.search.as_deref() {
            if !search.is_empty() {
                filters.push(Filter::Text(search.to_string()));
            }
        }

        filters
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    #[test]
    fn test_empty_selection_has_no_predicates() {
        assert!(FilterSelection::default().predicates().is_empty());
    }

    #[test]
    fn test_selection_to_predicates() {
        let selection = FilterSelection {
            categories: vec![CategoryId::new("running")],
            brands: vec![BrandId::new("nike"), BrandId::new("asics")],
            sizes: vec!["10".to_string()],
            min_price: Some(Money::new(5000, Currency::USD)),
            max_price: None,
            on_sale: true,
            search: Some("trail".to_string()),
        };

        let predicates = selection.predicates();
        assert_eq!(predicates.len(), 6);
        assert!(predicates.contains(&Filter::OnSale));
    }

    #[test]
    fn test_blank_search_is_skipped() {
        let selection = FilterSelection {
            search: Some(String::new()),
            ..Default::default()
        };
        assert!(selection.predicates().is_empty());
    }

    #[test]
    fn test_price_bounds_sql() {
        let filter = Filter::PriceBounds {
            min: Some(Money::new(5000, Currency::USD)),
            max: Some(Money::new(20000, Currency::USD)),
        };
        let (sql, values) = filter.to_sql();
        assert!(sql.contains("effective_price_cents >= ?"));
        assert!(sql.contains("effective_price_cents <= ?"));
        assert_eq!(values, vec!["5000", "20000"]);
    }

    #[test]
    fn test_on_sale_sql_is_tier_local() {
        let (sql, values) = Filter::OnSale.to_sql();
        assert!(sql.contains("sale_price_cents < price_cents"));
        assert!(values.is_empty());
    }

    #[test]
    fn test_option_value_sql_binds_name_first() {
        let filter = Filter::OptionValue {
            name: "Size".to_string(),
            values: vec!["9".to_string(), "10".to_string()],
        };
        let (sql, values) = filter.to_sql();
        assert!(sql.contains("name = ?"));
        assert_eq!(values, vec!["Size", "9", "10"]);
    }

    #[test]
    fn test_text_sql_wildcards() {
        let (sql, values) = Filter::Text("dunk".to_string()).to_sql();
        assert!(sql.contains("LIKE"));
        assert_eq!(values, vec!["%dunk%", "%dunk%"]);
    }
}
