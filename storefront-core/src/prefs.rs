//! Shopper preference signals driving personalisation.

/// The shopper's most recent search term and category.
///
/// Owned by the calling application and supplied fresh on every ranking
/// call; the ranker holds no state. Both signals default to empty, which
/// contributes nothing to scores.
///
/// # Examples
/// ```
/// use storefront_core::UserPreferences;
///
/// let prefs = UserPreferences::new()
///     .with_search_term("red")
///     .with_category("Sports");
/// assert_eq!(prefs.last_search_term(), "red");
/// assert_eq!(prefs.last_category(), "Sports");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UserPreferences {
    last_search_term: String,
    last_category: String,
}

impl UserPreferences {
    /// Construct empty preferences.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The last search term, possibly empty.
    #[must_use]
    pub fn last_search_term(&self) -> &str {
        &self.last_search_term
    }

    /// The last browsed category, possibly empty.
    #[must_use]
    pub fn last_category(&self) -> &str {
        &self.last_category
    }

    /// Record a search term. Surrounding whitespace is trimmed.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.last_search_term = term.into().trim().to_owned();
    }

    /// Record a category. Surrounding whitespace is trimmed.
    pub fn set_category(&mut self, category: impl Into<String>) {
        self.last_category = category.into().trim().to_owned();
    }

    /// Record a search term while returning `self` for chaining.
    #[must_use]
    pub fn with_search_term(mut self, term: impl Into<String>) -> Self {
        self.set_search_term(term);
        self
    }

    /// Record a category while returning `self` for chaining.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.set_category(category);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setters_trim_whitespace() {
        let prefs = UserPreferences::new()
            .with_search_term("  red ball ")
            .with_category(" Sports\n");
        assert_eq!(prefs.last_search_term(), "red ball");
        assert_eq!(prefs.last_category(), "Sports");
    }

    #[test]
    fn defaults_are_empty() {
        let prefs = UserPreferences::new();
        assert!(prefs.last_search_term().is_empty());
        assert!(prefs.last_category().is_empty());
    }
}
