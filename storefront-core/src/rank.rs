//! Personalised catalogue ordering.
//!
//! A stateless pure transform: each call scores products against the
//! shopper's latest signals and reorders a copy. Nothing is filtered out
//! and nothing is cached between calls.

use std::cmp::Reverse;

use crate::{ProductRecord, UserPreferences};

/// Points awarded when the last search term appears in a product title.
const SEARCH_TERM_POINTS: u32 = 2;

/// Points awarded when the last category matches exactly.
const CATEGORY_POINTS: u32 = 1;

/// Calculate a personalisation score for a catalogue record.
///
/// Higher scores rank earlier. Implementations must be pure and cheap:
/// [`rank_with`] calls them once per product on every render. They must be
/// thread-safe (`Send` + `Sync`) so ranking can run across threads.
///
/// # Examples
/// ```
/// use rust_decimal::Decimal;
/// use storefront_core::{ProductRecord, ProductScorer, UserPreferences};
///
/// struct UnitScorer;
///
/// impl ProductScorer for UnitScorer {
///     fn score(&self, _product: &ProductRecord, _prefs: &UserPreferences) -> u32 {
///         1
///     }
/// }
///
/// let product = ProductRecord::new("p-1", "Red Ball", "Sports", Decimal::new(99, 0));
/// assert_eq!(UnitScorer.score(&product, &UserPreferences::new()), 1);
/// ```
pub trait ProductScorer: Send + Sync {
    /// Return a score for `product` according to `prefs`.
    fn score(&self, product: &ProductRecord, prefs: &UserPreferences) -> u32;
}

/// Default scorer over the shopper's last search and category signals.
///
/// Awards two points when the non-empty last search term is contained in
/// the title and one point when the non-empty last category equals the
/// product category, both case-insensitively. Empty signals contribute
/// nothing, so empty preferences score every product zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct SignalScorer;

impl ProductScorer for SignalScorer {
    fn score(&self, product: &ProductRecord, prefs: &UserPreferences) -> u32 {
        let mut score = 0;
        let term = prefs.last_search_term().to_lowercase();
        if !term.is_empty() && product.title.to_lowercase().contains(&term) {
            score += SEARCH_TERM_POINTS;
        }
        let category = prefs.last_category().to_lowercase();
        if !category.is_empty() && product.category.to_lowercase() == category {
            score += CATEGORY_POINTS;
        }
        score
    }
}

/// Reorder a catalogue copy using the default [`SignalScorer`].
///
/// # Examples
/// ```
/// use rust_decimal::Decimal;
/// use storefront_core::{ProductRecord, UserPreferences, rank};
///
/// let catalogue = vec![
///     ProductRecord::new("p-1", "Blue Bat", "Sports", Decimal::new(499, 0)),
///     ProductRecord::new("p-2", "Red Ball", "Sports", Decimal::new(99, 0)),
/// ];
/// let prefs = UserPreferences::new().with_search_term("red");
/// let ranked = rank(&catalogue, &prefs);
/// assert_eq!(ranked[0].id, "p-2");
/// ```
#[must_use]
pub fn rank(products: &[ProductRecord], prefs: &UserPreferences) -> Vec<ProductRecord> {
    rank_with(products, prefs, &SignalScorer)
}

/// Reorder a catalogue copy with a caller-supplied scorer, highest first.
///
/// A stable sort keeps tied products in their original relative order, so
/// an all-zero scoring pass is an identity reorder. The input slice is
/// never mutated and every product appears exactly once in the result.
#[must_use]
pub fn rank_with<S>(
    products: &[ProductRecord],
    prefs: &UserPreferences,
    scorer: &S,
) -> Vec<ProductRecord>
where
    S: ProductScorer + ?Sized,
{
    let mut ranked = products.to_vec();
    ranked.sort_by_key(|product| Reverse(scorer.score(product, prefs)));
    ranked
}
