//! Shop listing query builder.

use crate::search::{Filter, FilterSelection};
use serde::{Deserialize, Serialize};

/// Sort orders offered on the shop page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortOption {
    /// Manual/featured order.
    #[default]
    Featured,
    /// Newest arrivals first.
    Newest,
    /// Price, low to high.
    PriceAsc,
    /// Price, high to low.
    PriceDesc,
    /// Name A-Z.
    NameAsc,
    /// Name Z-A.
    NameDesc,
}

impl SortOption {
    /// SQL `ORDER BY` clause.
    pub fn to_sql(&self) -> &'static str {
        match self {
            SortOption::Featured => "position ASC",
            SortOption::Newest => "created_at DESC",
            SortOption::PriceAsc => "effective_price_cents ASC",
            SortOption::PriceDesc => "effective_price_cents DESC",
            SortOption::NameAsc => "name ASC",
            SortOption::NameDesc => "name DESC",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::Featured => "Featured",
            SortOption::Newest => "Newest",
            SortOption::PriceAsc => "Price: Low to High",
            SortOption::PriceDesc => "Price: High to Low",
            SortOption::NameAsc => "Name: A-Z",
            SortOption::NameDesc => "Name: Z-A",
        }
    }
}

/// A complete shop listing query: predicates, sort, pagination.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopQuery {
    /// Conjunctive predicates.
    pub filters: Vec<Filter>,
    /// Sort order.
    pub sort: SortOption,
    /// Current page (1-indexed).
    pub page: i64,
    /// Items per page.
    pub per_page: i64,
}

impl Default for ShopQuery {
    fn default() -> Self {
        Self {
            filters: Vec::new(),
            sort: SortOption::Featured,
            page: 1,
            per_page: 24,
        }
    }
}

impl ShopQuery {
    /// Build a query from the shop page's filter controls.
    pub fn from_selection(selection: &FilterSelection) -> Self {
        Self {
            filters: selection.predicates(),
            ..Default::default()
        }
    }

    /// Add a predicate.
    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Set the sort order.
    pub fn with_sort(mut self, sort: SortOption) -> Self {
        self.sort = sort;
        self
    }

    /// Set pagination; page floors at 1, per-page clamps to 1..=100.
    pub fn with_pagination(mut self, page: i64, per_page: i64) -> Self {
        self.page = page.max(1);
        self.per_page = per_page.clamp(1, 100);
        self
    }

    /// SQL `OFFSET` for the current page.
    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.per_page
    }

    /// Combine all predicates into a `WHERE` clause with bind values.
    pub fn build_where_clause(&self) -> (String, Vec<String>) {
        if self.filters.is_empty() {
            return ("1=1".to_string(), vec![]);
        }

        let mut clauses = Vec::new();
        let mut binds = Vec::new();
        for filter in &self.filters {
            let (clause, values) = filter.to_sql();
            if !clause.is_empty() {
                clauses.push(format!("({})", clause));
                binds.extend(values);
            }
        }

        if clauses.is_empty() {
            return ("1=1".to_string(), vec![]);
        }
        (clauses.join(" AND "), binds)
    }

    /// Full listing query.
    pub fn build_sql(&self) -> (String, Vec<String>) {
        let (where_clause, binds) = self.build_where_clause();
        let sql = format!(
            "SELECT * FROM products WHERE {} ORDER BY {} LIMIT {} OFFSET {}",
            where_clause,
            self.sort.to_sql(),
            self.per_page,
            self.offset()
        );
        (sql, binds)
    }

    /// Matching-row count query for pagination.
    pub fn build_count_sql(&self) -> (String, Vec<String>) {
        let (where_clause, binds) = self.build_where_clause();
        (
            format!("SELECT COUNT(*) AS count FROM products WHERE {}", where_clause),
            binds,
        )
    }
}
