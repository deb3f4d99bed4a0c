//! Free-text search interpretation.
//!
//! Turns the raw search box contents into a structured [`SearchIntent`]:
//! a price ceiling ("under 100", "< $250", "price: 50"), a category picked
//! up from the text, and whatever residual text is left for plain substring
//! matching. Parsing is total - malformed phrases simply leave the
//! corresponding field empty, they never error.

use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;
use sparkshop_core::{Category, CategoryId};

/// Price-ceiling phrases: `(under|below|less than|price:|price<|<=|<)`
/// followed by a number with an optional leading `$`.
///
/// The word-prefixed forms require a word boundary so "thunder 100" does not
/// read as "under 100". `price<` is literal; a spaced "price < 50" still
/// matches through the bare `<`, leaving "price" in the residual text.
static PRICE_PHRASE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\b(?:under|below|less\s+than)\s+|price:|price<|<=|<)\s*\$?(\d+(?:\.\d+)?)")
        .expect("price phrase pattern is valid")
});

/// The structured result of interpreting a search string.
///
/// Created fresh per evaluation; never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchIntent {
    /// Inclusive price ceiling parsed from the text, if any.
    pub price_max: Option<Decimal>,
    /// Category whose name appeared in the text, if any. Overrides the
    /// explicit UI category selection for this evaluation.
    pub category_id: Option<CategoryId>,
    /// Lowercased text left over after removing recognized phrases, used
    /// for name/description substring matching. Empty means no text filter.
    pub residual_text: String,
}

impl SearchIntent {
    /// True when the intent filters nothing.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.price_max.is_none() && self.category_id.is_none() && self.residual_text.is_empty()
    }
}

/// Interpret a raw search string against the known categories.
///
/// - Only the first price phrase is honored; later ones are ignored.
/// - The first category (in list order) whose lowercased name appears as a
///   substring anywhere in the lowercased query wins. A short category name
///   inside an unrelated longer phrase can false-positively match; that
///   ambiguity is deliberate and matches how users type category names.
/// - Matched phrases are removed from the residual text; the category name
///   is removed at its first occurrence only, and only where it survived
///   the price-phrase removal.
#[must_use]
pub fn interpret(raw_query: &str, categories: &[Category]) -> SearchIntent {
    let query = raw_query.trim().to_lowercase();
    if query.is_empty() {
        return SearchIntent::default();
    }

    let mut working = query.clone();
    let mut price_max = None;

    if let Some(caps) = PRICE_PHRASE.captures(&query) {
        price_max = caps.get(1).and_then(|m| m.as_str().parse::<Decimal>().ok());
        if price_max.is_some()
            && let Some(m) = caps.get(0)
        {
            working.replace_range(m.range(), "");
        }
    }

    let mut category_id = None;
    for category in categories {
        let name = category.name.trim().to_lowercase();
        if name.is_empty() {
            // An unnamed category would match every query.
            continue;
        }
        if query.contains(&name) {
            category_id = Some(category.id.clone());
            if let Some(pos) = working.find(&name) {
                working.replace_range(pos..pos + name.len(), "");
            }
            break;
        }
    }

    // Removing an interior phrase can leave doubled spaces that would defeat
    // substring matching, so normalize runs of whitespace.
    let residual_text = working.split_whitespace().collect::<Vec<_>>().join(" ");

    SearchIntent {
        price_max,
        category_id,
        residual_text,
    }
}

#[cfg(test)]
mod tests {
    use sparkshop_core::CategoryId;

    use super::*;

    fn category(id: &str, name: &str) -> Category {
        Category {
            id: CategoryId::new(id),
            name: name.to_owned(),
            image: None,
        }
    }

    fn dec(s: &str) -> Decimal {
        s.parse().expect("valid decimal")
    }

    #[test]
    fn test_empty_query_is_noop() {
        let intent = interpret("   ", &[]);
        assert!(intent.is_noop());
        assert_eq!(intent, SearchIntent::default());
    }

    #[test]
    fn test_price_phrase_under() {
        let intent = interpret("under 100", &[]);
        assert_eq!(intent.price_max, Some(dec("100")));
        assert_eq!(intent.residual_text, "");
    }

    #[test]
    fn test_price_phrase_variants() {
        for query in [
            "below 250",
            "less than 250",
            "price: 250",
            "price:250",
            "price < 250",
            "< 250",
            "<=250",
            "under $250",
            "<$250",
        ] {
            let intent = interpret(query, &[]);
            assert_eq!(intent.price_max, Some(dec("250")), "query: {query}");
        }
    }

    #[test]
    fn test_price_phrase_decimal_number() {
        let intent = interpret("under 99.50", &[]);
        assert_eq!(intent.price_max, Some(dec("99.50")));
    }

    #[test]
    fn test_only_first_price_phrase_honored() {
        let intent = interpret("under 100 below 50", &[]);
        assert_eq!(intent.price_max, Some(dec("100")));
        assert_eq!(intent.residual_text, "below 50");
    }

    #[test]
    fn test_keyword_inside_word_does_not_match() {
        let intent = interpret("thunder 100", &[]);
        assert_eq!(intent.price_max, None);
        assert_eq!(intent.residual_text, "thunder 100");
    }

    #[test]
    fn test_malformed_price_is_absent() {
        let intent = interpret("under water", &[]);
        assert_eq!(intent.price_max, None);
        assert_eq!(intent.residual_text, "under water");
    }

    #[test]
    fn test_category_and_price_combined() {
        let categories = [category("c1", "Sparklers")];
        let intent = interpret("sparklers under 100", &categories);
        assert_eq!(intent.price_max, Some(dec("100")));
        assert_eq!(intent.category_id, Some(CategoryId::new("c1")));
        assert_eq!(intent.residual_text, "");
    }

    #[test]
    fn test_first_category_in_list_order_wins() {
        let categories = [category("c1", "Rockets"), category("c2", "Rocket")];
        let intent = interpret("rocket pack", &categories);
        // "Rockets" is checked first but doesn't appear; "Rocket" does.
        assert_eq!(intent.category_id, Some(CategoryId::new("c2")));
        assert_eq!(intent.residual_text, "pack");
    }

    #[test]
    fn test_category_substring_false_positive_is_accepted() {
        let categories = [category("c1", "Anar")];
        let intent = interpret("anarkali dress", &categories);
        assert_eq!(intent.category_id, Some(CategoryId::new("c1")));
        assert_eq!(intent.residual_text, "kali dress");
    }

    #[test]
    fn test_category_only_first_occurrence_removed() {
        let categories = [category("c1", "Rocket")];
        let intent = interpret("rocket rocket", &categories);
        assert_eq!(intent.category_id, Some(CategoryId::new("c1")));
        assert_eq!(intent.residual_text, "rocket");
    }

    #[test]
    fn test_category_inside_price_phrase_matches_but_removes_nothing() {
        // Pins down the documented overlap behavior: detection runs on the
        // full query, removal on the price-stripped text.
        let categories = [category("c1", "der 10")];
        let intent = interpret("under 100", &categories);
        assert_eq!(intent.price_max, Some(dec("100")));
        assert_eq!(intent.category_id, Some(CategoryId::new("c1")));
        assert_eq!(intent.residual_text, "");
    }

    #[test]
    fn test_spaced_price_keyword_matches_bare_angle() {
        // "price<" is a literal trigger; with a space the bare "<" matches
        // instead and the word "price" stays in the residual text.
        let intent = interpret("price < 50", &[]);
        assert_eq!(intent.price_max, Some(dec("50")));
        assert_eq!(intent.residual_text, "price");
    }

    #[test]
    fn test_residual_whitespace_collapsed() {
        let intent = interpret("red  hot   under 50  deals", &[]);
        assert_eq!(intent.price_max, Some(dec("50")));
        assert_eq!(intent.residual_text, "red hot deals");
    }

    #[test]
    fn test_unnamed_category_is_skipped() {
        let categories = [category("c0", "  "), category("c1", "Rocket")];
        let intent = interpret("rocket", &categories);
        assert_eq!(intent.category_id, Some(CategoryId::new("c1")));
    }
}
