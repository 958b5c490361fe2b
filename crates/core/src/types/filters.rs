//! Filter configuration and the derived-view engine.
//!
//! A [`ProductFilters`] value describes what the user wants to see: a search
//! term, a category, a price range, and a sort. [`ProductFilters::apply`]
//! derives the display list from a product collection on every call; nothing
//! is cached.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::product::Product;

/// Sentinel ceiling for the default maximum price.
const PRICE_CEILING: Decimal = Decimal::from_parts(999_999, 0, 0, false, 0);

/// Field to sort the derived view by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    /// Sort by product name.
    #[serde(rename = "nome")]
    Name,
    /// Sort by unit price.
    #[serde(rename = "preco")]
    Price,
    /// Sort by category.
    #[serde(rename = "categoria")]
    Category,
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Name => "nome",
            Self::Price => "preco",
            Self::Category => "categoria",
        })
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nome" => Ok(Self::Name),
            "preco" => Ok(Self::Price),
            "categoria" => Ok(Self::Category),
            other => Err(format!(
                "unknown sort key '{other}' (expected nome, preco, or categoria)"
            )),
        }
    }
}

/// Direction of the configured sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    #[serde(rename = "asc")]
    Asc,
    #[serde(rename = "desc")]
    Desc,
}

/// The active filter configuration. Transient, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductFilters {
    /// Case-insensitive substring matched against product names.
    pub search_term: String,
    /// Exact category to show; empty means all categories.
    pub category: String,
    /// Inclusive lower price bound.
    pub price_min: Decimal,
    /// Inclusive upper price bound.
    pub price_max: Decimal,
    /// Field the derived view is sorted by.
    pub sort_by: SortKey,
    /// Sort direction.
    pub sort_order: SortOrder,
}

impl Default for ProductFilters {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            category: String::new(),
            price_min: Decimal::ZERO,
            price_max: PRICE_CEILING,
            sort_by: SortKey::Name,
            sort_order: SortOrder::Asc,
        }
    }
}

/// Partial filter change, shallow-merged into [`ProductFilters`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterUpdate {
    pub search_term: Option<String>,
    pub category: Option<String>,
    pub price_min: Option<Decimal>,
    pub price_max: Option<Decimal>,
    pub sort_by: Option<SortKey>,
    pub sort_order: Option<SortOrder>,
}

impl ProductFilters {
    /// Shallow-merge an update: set fields replace, unset fields keep the
    /// current value.
    pub fn merge(&mut self, update: FilterUpdate) {
        if let Some(search_term) = update.search_term {
            self.search_term = search_term;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(price_min) = update.price_min {
            self.price_min = price_min;
        }
        if let Some(price_max) = update.price_max {
            self.price_max = price_max;
        }
        if let Some(sort_by) = update.sort_by {
            self.sort_by = sort_by;
        }
        if let Some(sort_order) = update.sort_order {
            self.sort_order = sort_order;
        }
    }

    /// Select a sort key the way the filter bar does: picking the active key
    /// flips the direction, picking another key sorts ascending by it.
    pub fn toggle_sort(&mut self, key: SortKey) {
        if self.sort_by == key {
            self.sort_order = match self.sort_order {
                SortOrder::Asc => SortOrder::Desc,
                SortOrder::Desc => SortOrder::Asc,
            };
        } else {
            self.sort_by = key;
            self.sort_order = SortOrder::Asc;
        }
    }

    /// Whether any predicate differs from the default (sort alone does not
    /// count as an active filter).
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.search_term.is_empty()
            || !self.category.is_empty()
            || self.price_min > Decimal::ZERO
            || self.price_max < PRICE_CEILING
    }

    /// Whether a product passes all four predicates.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        let matches_search = product
            .name
            .to_lowercase()
            .contains(&self.search_term.to_lowercase());

        let matches_category =
            self.category.is_empty() || product.category == self.category;

        let matches_price =
            product.price >= self.price_min && product.price <= self.price_max;

        matches_search && matches_category && matches_price
    }

    /// Derive the display list: filter by [`Self::matches`], then sort by the
    /// configured key and direction. Text keys compare case-insensitively
    /// with the raw string as tie-break; price compares numerically.
    #[must_use]
    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        let mut view: Vec<Product> = products
            .iter()
            .filter(|product| self.matches(product))
            .cloned()
            .collect();

        view.sort_by(|a, b| {
            let ordering = match self.sort_by {
                SortKey::Name => compare_text(&a.name, &b.name),
                SortKey::Price => a.price.cmp(&b.price),
                SortKey::Category => compare_text(&a.category, &b.category),
            };
            match self.sort_order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });

        view
    }
}

/// Case-insensitive text ordering, tie-broken by the raw string so equal
/// names still order deterministically.
fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::super::id::ProductId;
    use super::*;

    fn product(id: i32, name: &str, category: &str, price: &str) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            category: category.to_string(),
            description: format!("descrição de {name}"),
            price: price.parse().expect("decimal literal"),
            stock_quantity: 1,
        }
    }

    fn sample_collection() -> Vec<Product> {
        vec![
            product(1, "B", "Livros", "10"),
            product(2, "A", "Eletrônicos", "5"),
            product(3, "c", "Livros", "7.50"),
        ]
    }

    #[test]
    fn test_default_filters_sort_by_name_ascending() {
        let filters = ProductFilters::default();
        let view = filters.apply(&[
            product(1, "B", "Livros", "10"),
            product(2, "A", "Livros", "5"),
        ]);

        let names: Vec<&str> = view.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["A", "B"]);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let filters = ProductFilters {
            search_term: "b".to_string(),
            ..ProductFilters::default()
        };

        let view = filters.apply(&sample_collection());
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].name, "B");
    }

    #[test]
    fn test_category_filter_exact_match() {
        let collection = sample_collection();
        let filters = ProductFilters {
            category: "Livros".to_string(),
            ..ProductFilters::default()
        };

        let view = filters.apply(&collection);
        let expected = collection
            .iter()
            .filter(|p| p.category == "Livros")
            .count();
        assert_eq!(view.len(), expected);
        assert!(view.iter().all(|p| p.category == "Livros"));
    }

    #[test]
    fn test_empty_category_matches_all() {
        let filters = ProductFilters::default();
        assert_eq!(filters.apply(&sample_collection()).len(), 3);
    }

    #[test]
    fn test_price_range_is_inclusive_on_both_ends() {
        let filters = ProductFilters {
            price_min: "5".parse().expect("decimal"),
            price_max: "10".parse().expect("decimal"),
            ..ProductFilters::default()
        };

        let view = filters.apply(&sample_collection());
        assert_eq!(view.len(), 3);
    }

    #[test]
    fn test_inverted_price_range_yields_empty_view() {
        let filters = ProductFilters {
            price_min: "100".parse().expect("decimal"),
            price_max: "1".parse().expect("decimal"),
            ..ProductFilters::default()
        };

        assert!(filters.apply(&sample_collection()).is_empty());
    }

    #[test]
    fn test_sort_by_price_descending() {
        let filters = ProductFilters {
            sort_by: SortKey::Price,
            sort_order: SortOrder::Desc,
            ..ProductFilters::default()
        };

        let view = filters.apply(&sample_collection());
        let prices: Vec<String> = view.iter().map(|p| p.price.to_string()).collect();
        assert_eq!(prices, ["10", "7.50", "5"]);
    }

    #[test]
    fn test_text_sort_ignores_case() {
        let filters = ProductFilters::default();
        let view = filters.apply(&sample_collection());
        let names: Vec<&str> = view.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["A", "B", "c"]);
    }

    #[test]
    fn test_merge_is_shallow_and_partial() {
        let mut filters = ProductFilters::default();
        filters.merge(FilterUpdate {
            category: Some("Livros".to_string()),
            ..FilterUpdate::default()
        });

        assert_eq!(filters.category, "Livros");
        assert_eq!(filters.search_term, "");
        assert_eq!(filters.sort_by, SortKey::Name);
    }

    #[test]
    fn test_toggle_sort_flips_direction_on_same_key() {
        let mut filters = ProductFilters::default();
        filters.toggle_sort(SortKey::Name);
        assert_eq!(filters.sort_order, SortOrder::Desc);

        filters.toggle_sort(SortKey::Price);
        assert_eq!(filters.sort_by, SortKey::Price);
        assert_eq!(filters.sort_order, SortOrder::Asc);
    }

    #[test]
    fn test_is_active_ignores_sort() {
        let mut filters = ProductFilters::default();
        assert!(!filters.is_active());

        filters.toggle_sort(SortKey::Price);
        assert!(!filters.is_active());

        filters.search_term = "fone".to_string();
        assert!(filters.is_active());
    }

    #[test]
    fn test_sort_key_from_str() {
        assert_eq!("nome".parse::<SortKey>(), Ok(SortKey::Name));
        assert_eq!("preco".parse::<SortKey>(), Ok(SortKey::Price));
        assert_eq!("categoria".parse::<SortKey>(), Ok(SortKey::Category));
        assert!("rating".parse::<SortKey>().is_err());
    }
}
