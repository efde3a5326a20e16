//! Catalogue records as surfaced to ranking.

use std::collections::HashMap;

use rust_decimal::Decimal;

/// A read-only catalogue row.
///
/// Owned by the external product catalogue; this crate only reorders
/// copies. `attributes` carries display-only fields (image URL, minimum
/// order quantity, seller name) the ranking logic never inspects.
///
/// # Examples
/// ```
/// use rust_decimal::Decimal;
/// use storefront_core::ProductRecord;
///
/// let product = ProductRecord::new("p-1", "Red Ball", "Sports", Decimal::new(1999, 2));
/// assert_eq!(product.title, "Red Ball");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProductRecord {
    /// Unique catalogue identifier.
    pub id: String,
    /// Display title, matched against the shopper's last search term.
    pub title: String,
    /// Catalogue category, matched against the shopper's last category.
    pub category: String,
    /// Listed price.
    pub price: Decimal,
    /// Display-only fields the ranking logic never inspects.
    pub attributes: HashMap<String, String>,
}

impl ProductRecord {
    /// Construct a record with no extra display fields.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        category: impl Into<String>,
        price: Decimal,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            category: category.into(),
            price,
            attributes: HashMap::new(),
        }
    }

    /// Attach a display-only field while consuming `self`, enabling chaining.
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }
}
