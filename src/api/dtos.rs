use serde::{Deserialize, Serialize};

use crate::extractor::Isbn;
use crate::matcher::Rule;

#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    pub url: String,
    /// Page markup; only needed by rules that scan it.
    #[serde(default)]
    pub html: String,
}

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub isbn: Isbn,
    pub lookup_url: String,
}

#[derive(Debug, Deserialize)]
pub struct RedirectParams {
    pub url: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RuleResponse {
    pub name: String,
    pub hostname: String,
    pub pathname: String,
    pub strategy: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl From<&Rule> for RuleResponse {
    fn from(rule: &Rule) -> Self {
        Self {
            name: rule.name().to_string(),
            hostname: rule.pattern().hostname().to_string(),
            pathname: rule.pattern().pathname().to_string(),
            strategy: rule.strategy().kind().to_string(),
            key: rule.strategy().key().map(str::to_string),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
