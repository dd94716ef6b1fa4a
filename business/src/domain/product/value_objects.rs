use super::errors::ProductError;
use super::model::Product;

/// Opaque product identifier. Only guaranteed to be non-blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProductId(String);

impl ProductId {
    pub fn parse(id: impl Into<String>) -> Result<Self, ProductError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ProductError::InvalidId);
        }
        Ok(Self(id))
    }

    /// Constructor for identifiers read back from the repository (no validation).
    pub fn from_repository(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A trimmed, non-empty free-text search term.
///
/// Matching is a case-insensitive substring test over a product's name,
/// description and category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    term: String,
    folded: String,
}

impl SearchQuery {
    /// Returns `None` for blank input.
    pub fn parse(raw: &str) -> Option<Self> {
        let term = raw.trim();
        if term.is_empty() {
            return None;
        }
        Some(Self {
            term: term.to_string(),
            folded: term.to_lowercase(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.term
    }

    pub fn matches(&self, product: &Product) -> bool {
        [&product.name, &product.description, &product.category]
            .iter()
            .any(|field| field.to_lowercase().contains(&self.folded))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::sample_catalog::sample_products;

    #[test]
    fn should_reject_blank_product_id() {
        assert!(matches!(ProductId::parse(""), Err(ProductError::InvalidId)));
        assert!(matches!(ProductId::parse("   "), Err(ProductError::InvalidId)));
    }

    #[test]
    fn should_accept_any_non_blank_product_id() {
        let id = ProductId::parse("clx9z1abc").unwrap();
        assert_eq!(id.as_str(), "clx9z1abc");
    }

    #[test]
    fn should_not_build_query_from_blank_input() {
        assert!(SearchQuery::parse("").is_none());
        assert!(SearchQuery::parse(" \t\n").is_none());
    }

    #[test]
    fn should_trim_search_term() {
        let query = SearchQuery::parse("  phone ").unwrap();
        assert_eq!(query.as_str(), "phone");
    }

    #[test]
    fn should_match_name_ignoring_case() {
        let headphones = &sample_products()[0];
        assert!(SearchQuery::parse("HEADPHONES").unwrap().matches(headphones));
        assert!(SearchQuery::parse("bluetooth").unwrap().matches(headphones));
    }

    #[test]
    fn should_match_description_and_category() {
        let bottle = &sample_products()[2];
        assert!(SearchQuery::parse("vacuum").unwrap().matches(bottle));
        assert!(SearchQuery::parse("home & garden").unwrap().matches(bottle));
    }

    #[test]
    fn should_not_match_other_fields() {
        let bottle = &sample_products()[2];
        assert!(!SearchQuery::parse("sample-3").unwrap().matches(bottle));
        assert!(!SearchQuery::parse("unsplash").unwrap().matches(bottle));
    }
}
