//! Shop filter and listing query module.

mod filter;
mod query;

pub use filter::{Filter, FilterSelection};
pub use query::{ShopQuery, SortOption};
