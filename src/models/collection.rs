use super::variables::VariableMap;
use indexmap::IndexMap;

/// Ordered set of recorded transactions
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Collection {
    /// Collection name from the document metadata
    pub name: Option<String>,

    /// Recorded requests in document order (folders flattened)
    pub transactions: Vec<Transaction>,

    /// Variables declared on the collection itself
    pub variables: VariableMap,
}

/// One recorded HTTP request
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub name: String,
    pub method: String,
    pub url: String,
    pub headers: IndexMap<String, String>,
    pub body: Body,
}

/// Recorded request body
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Body {
    #[default]
    None,
    Raw(String),
    Form(IndexMap<String, String>),
    UrlEncoded(IndexMap<String, String>),
}

impl Body {
    #[cfg(test)]
    pub fn is_none(&self) -> bool {
        matches!(self, Body::None)
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Body::None => "none",
            Body::Raw(_) => "raw",
            Body::Form(_) => "form",
            Body::UrlEncoded(_) => "urlencoded",
        }
    }
}

impl Transaction {
    /// Validate the transaction
    pub fn validate(&self) -> Result<(), crate::error::ConvertError> {
        if self.method.trim().is_empty() {
            return Err(crate::error::ConvertError::ValidationError(format!(
                "Transaction '{}' has no method",
                self.name
            )));
        }

        if self.url.trim().is_empty() {
            return Err(crate::error::ConvertError::ValidationError(format!(
                "Transaction '{}' has no URL",
                self.name
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transaction(method: &str, url: &str) -> Transaction {
        Transaction {
            name: "t".to_string(),
            method: method.to_string(),
            url: url.to_string(),
            headers: IndexMap::new(),
            body: Body::None,
        }
    }

    #[test]
    fn test_validate_transaction() {
        assert!(transaction("GET", "http://example.com").validate().is_ok());
        assert!(transaction("", "http://example.com").validate().is_err());
        assert!(transaction("GET", "  ").validate().is_err());
    }

    #[test]
    fn test_body_kind() {
        assert!(Body::default().is_none());
        assert_eq!(Body::Raw("x".to_string()).kind(), "raw");
        assert_eq!(Body::UrlEncoded(IndexMap::new()).kind(), "urlencoded");
    }
}
