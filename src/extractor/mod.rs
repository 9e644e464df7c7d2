pub mod isbn;
pub mod markup;
pub mod strategy;

pub use isbn::{Isbn, is_isbn};
pub use strategy::Strategy;

use thiserror::Error;
use tracing::debug;
use url::Url;

use crate::matcher::RuleSet;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Resolves a page to an ISBN using an ordered rule set.
///
/// Holds no per-call state; the same URL and markup always give the same answer.
#[derive(Debug, Clone)]
pub struct Extractor {
    rules: RuleSet,
}

impl Extractor {
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn extract(&self, url: &Url, html: &str) -> Option<Isbn> {
        let matched = self.rules.first_match(url)?;
        let isbn = matched.extract(html);
        debug!(
            rule = matched.rule().name(),
            strategy = %matched.rule().strategy(),
            found = isbn.is_some(),
            "extraction finished"
        );
        isbn
    }

    pub fn extract_str(&self, url: &str, html: &str) -> Result<Option<Isbn>, ExtractError> {
        let url = Url::parse(url)?;
        Ok(self.extract(&url, html))
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(RuleSet::standard().clone())
    }
}

/// Extract with the built-in rules.
pub fn extract_isbn(url: &Url, html: &str) -> Option<Isbn> {
    RuleSet::standard().first_match(url)?.extract(html)
}

pub fn extract_isbn_from_str(url: &str, html: &str) -> Result<Option<Isbn>, ExtractError> {
    let url = Url::parse(url)?;
    Ok(extract_isbn(&url, html))
}
