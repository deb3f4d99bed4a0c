//! Catalog filtering and sorting.
//!
//! Pure functions over in-memory product lists. [`apply`] is deterministic
//! and idempotent: the same inputs always produce the same output, and ties
//! keep their input order (stable sorts).

use sparkshop_core::{CategoryId, Product};

use super::intent::SearchIntent;

/// Explicit category selection from the UI chips.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    /// The "all" sentinel: no category filter applied.
    #[default]
    All,
    Category(CategoryId),
}

impl CategoryFilter {
    /// Parse from URL parameter value; the "all" sentinel (or empty) means
    /// no filter.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "" | "all" => Self::All,
            id => Self::Category(CategoryId::new(id)),
        }
    }
}

/// Sort order for the product list. Crosses the wire as a URL parameter
/// value via [`Self::parse`] and [`Self::as_str`], never through serde.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SortMode {
    /// Input order, unchanged.
    #[default]
    Default,
    /// Ascending by name, case-insensitive.
    NameAsc,
    /// Ascending by price (missing price sorts as 0).
    PriceAsc,
    /// Descending by price (missing price sorts as 0).
    PriceDesc,
}

impl SortMode {
    /// Parse from URL parameter value.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "az" | "name-asc" => Self::NameAsc,
            "low" | "price-ascending" => Self::PriceAsc,
            "high" | "price-descending" => Self::PriceDesc,
            _ => Self::Default,
        }
    }

    /// Convert to URL parameter value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::NameAsc => "az",
            Self::PriceAsc => "low",
            Self::PriceDesc => "high",
        }
    }
}

/// Apply the search intent and explicit selections to a product list.
///
/// A category parsed from free text overrides the explicit UI selection for
/// this evaluation - typing a category name in the search box re-points the
/// active category filter. Filtering runs before sorting; sorting is stable.
#[must_use]
pub fn apply(
    products: &[Product],
    intent: &SearchIntent,
    explicit_category: &CategoryFilter,
    sort: SortMode,
) -> Vec<Product> {
    let effective_category = intent.category_id.as_ref().map_or_else(
        || match explicit_category {
            CategoryFilter::All => None,
            CategoryFilter::Category(id) => Some(id),
        },
        Some,
    );

    let mut result: Vec<Product> = products
        .iter()
        .filter(|product| {
            effective_category.is_none_or(|id| product.category.as_ref() == Some(id))
        })
        .filter(|product| matches_text(product, &intent.residual_text))
        .filter(|product| {
            intent
                .price_max
                .is_none_or(|ceiling| product.effective_price() <= ceiling)
        })
        .cloned()
        .collect();

    sort_products(&mut result, sort);
    result
}

/// The "best selling" rail: a pure filter of an already-filtered list.
///
/// Independent of sort mode by design - the rail keeps the list's order.
#[must_use]
pub fn best_selling(products: &[Product]) -> Vec<Product> {
    products
        .iter()
        .filter(|product| product.best_selling)
        .cloned()
        .collect()
}

fn matches_text(product: &Product, residual: &str) -> bool {
    if residual.is_empty() {
        return true;
    }
    product.name.to_lowercase().contains(residual)
        || product.description.to_lowercase().contains(residual)
}

fn sort_products(products: &mut [Product], sort: SortMode) {
    match sort {
        SortMode::Default => {}
        SortMode::NameAsc => {
            // Case-insensitive compare with a raw-name tiebreak keeps the
            // order strict and consistent across calls; remaining ties keep
            // input order (sort_by is stable).
            products.sort_by(|a, b| {
                a.name
                    .to_lowercase()
                    .cmp(&b.name.to_lowercase())
                    .then_with(|| a.name.cmp(&b.name))
            });
        }
        SortMode::PriceAsc => {
            products.sort_by_key(Product::effective_price);
        }
        SortMode::PriceDesc => {
            products.sort_by_key(|p| std::cmp::Reverse(p.effective_price()));
        }
    }
}

#[cfg(test)]
mod tests {
    use sparkshop_core::ProductId;

    use super::*;

    fn product(id: &str, name: &str, price: Option<&str>, category: Option<&str>) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_owned(),
            description: String::new(),
            price: price.map(|p| p.parse().expect("valid decimal")),
            category: category.map(CategoryId::new),
            best_selling: false,
            image: None,
        }
    }

    fn fixture() -> Vec<Product> {
        vec![
            product("1", "Sparkler", Some("50"), Some("c1")),
            product("2", "Rocket", Some("150"), Some("c2")),
            product("3", "Anar", Some("75"), Some("c1")),
            product("4", "Chakra", None, None),
        ]
    }

    fn intent_with(price_max: Option<&str>, category: Option<&str>, text: &str) -> SearchIntent {
        SearchIntent {
            price_max: price_max.map(|p| p.parse().expect("valid decimal")),
            category_id: category.map(CategoryId::new),
            residual_text: text.to_owned(),
        }
    }

    #[test]
    fn test_noop_intent_keeps_input_order() {
        let products = fixture();
        let out = apply(
            &products,
            &SearchIntent::default(),
            &CategoryFilter::All,
            SortMode::Default,
        );
        assert_eq!(out, products);
    }

    #[test]
    fn test_price_ceiling_filters() {
        let products = fixture();
        let out = apply(
            &products,
            &intent_with(Some("100"), None, ""),
            &CategoryFilter::All,
            SortMode::Default,
        );
        let ids: Vec<&str> = out.iter().map(|p| p.id.as_str()).collect();
        // Missing price counts as 0 and always passes.
        assert_eq!(ids, ["1", "3", "4"]);
    }

    #[test]
    fn test_intent_category_overrides_explicit_selection() {
        let products = fixture();
        let out = apply(
            &products,
            &intent_with(None, Some("c1"), ""),
            &CategoryFilter::Category(CategoryId::new("c2")),
            SortMode::Default,
        );
        let ids: Vec<&str> = out.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["1", "3"]);
    }

    #[test]
    fn test_explicit_category_used_when_intent_has_none() {
        let products = fixture();
        let out = apply(
            &products,
            &SearchIntent::default(),
            &CategoryFilter::Category(CategoryId::new("c2")),
            SortMode::Default,
        );
        let ids: Vec<&str> = out.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["2"]);
    }

    #[test]
    fn test_uncategorized_product_passes_only_all() {
        let products = fixture();
        let all = apply(
            &products,
            &SearchIntent::default(),
            &CategoryFilter::All,
            SortMode::Default,
        );
        assert!(all.iter().any(|p| p.id.as_str() == "4"));

        let c1 = apply(
            &products,
            &SearchIntent::default(),
            &CategoryFilter::Category(CategoryId::new("c1")),
            SortMode::Default,
        );
        assert!(c1.iter().all(|p| p.id.as_str() != "4"));
    }

    #[test]
    fn test_text_matches_name_or_description() {
        let mut products = fixture();
        if let Some(p) = products.get_mut(1) {
            p.description = "A Loud Aerial firework".to_owned();
        }
        let out = apply(
            &products,
            &intent_with(None, None, "aerial"),
            &CategoryFilter::All,
            SortMode::Default,
        );
        let ids: Vec<&str> = out.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["2"]);
    }

    #[test]
    fn test_sort_name_asc() {
        let products = fixture();
        let out = apply(
            &products,
            &SearchIntent::default(),
            &CategoryFilter::All,
            SortMode::NameAsc,
        );
        let names: Vec<&str> = out.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Anar", "Chakra", "Rocket", "Sparkler"]);
    }

    #[test]
    fn test_sort_price_asc_missing_price_first() {
        let products = fixture();
        let out = apply(
            &products,
            &SearchIntent::default(),
            &CategoryFilter::All,
            SortMode::PriceAsc,
        );
        let ids: Vec<&str> = out.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["4", "1", "3", "2"]);
        for pair in out.windows(2) {
            if let [a, b] = pair {
                assert!(a.effective_price() <= b.effective_price());
            }
        }
    }

    #[test]
    fn test_sort_price_desc() {
        let products = fixture();
        let out = apply(
            &products,
            &SearchIntent::default(),
            &CategoryFilter::All,
            SortMode::PriceDesc,
        );
        let ids: Vec<&str> = out.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["2", "3", "1", "4"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_prices() {
        let products = vec![
            product("a", "First", Some("10"), None),
            product("b", "Second", Some("10"), None),
            product("c", "Third", Some("5"), None),
        ];
        let out = apply(
            &products,
            &SearchIntent::default(),
            &CategoryFilter::All,
            SortMode::PriceAsc,
        );
        let ids: Vec<&str> = out.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["c", "a", "b"]);
    }

    #[test]
    fn test_best_selling_is_independent_of_sort() {
        let mut products = fixture();
        if let Some(p) = products.first_mut() {
            p.best_selling = true;
        }
        if let Some(p) = products.get_mut(2) {
            p.best_selling = true;
        }
        let rail = best_selling(&products);
        let ids: Vec<&str> = rail.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["1", "3"]);
    }

    #[test]
    fn test_category_filter_parse() {
        assert_eq!(CategoryFilter::parse("all"), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse(""), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::parse("c7"),
            CategoryFilter::Category(CategoryId::new("c7"))
        );
    }

    #[test]
    fn test_sort_mode_parse_round_trip() {
        for mode in [
            SortMode::Default,
            SortMode::NameAsc,
            SortMode::PriceAsc,
            SortMode::PriceDesc,
        ] {
            assert_eq!(SortMode::parse(mode.as_str()), mode);
        }
        assert_eq!(SortMode::parse("bogus"), SortMode::Default);
    }
}
