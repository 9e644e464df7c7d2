use std::borrow::Cow;
use std::fmt::{self, Display, Formatter};

use crate::extractor::{isbn::Isbn, markup};
use crate::matcher::PatternMatch;

/// Where a matched rule looks for its candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Strategy {
    /// Named path capture, taken verbatim.
    PathSegment(String),
    /// First value of the named query parameter.
    QueryParam(String),
    /// Labelled digit run in the page markup.
    MarkupScan,
}

impl Strategy {
    pub fn candidate<'a>(&self, captures: &'a PatternMatch, html: &'a str) -> Option<Cow<'a, str>> {
        match self {
            Self::PathSegment(name) => captures.group(name).map(Cow::Borrowed),
            Self::QueryParam(name) => captures
                .url()
                .query_pairs()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value),
            Self::MarkupScan => markup::scan_isbn(html).map(Cow::Borrowed),
        }
    }

    /// Pull the candidate and keep it only if it has the shape of an ISBN.
    pub fn apply(&self, captures: &PatternMatch, html: &str) -> Option<Isbn> {
        self.candidate(captures, html)
            .and_then(|candidate| Isbn::parse(&candidate))
    }

    pub fn needs_markup(&self) -> bool {
        matches!(self, Self::MarkupScan)
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::PathSegment(_) => "path-segment",
            Self::QueryParam(_) => "query-param",
            Self::MarkupScan => "markup-scan",
        }
    }

    /// Capture or parameter name the strategy reads, if any.
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::PathSegment(name) | Self::QueryParam(name) => Some(name.as_str()),
            Self::MarkupScan => None,
        }
    }
}

impl Display for Strategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.key() {
            Some(key) => write!(f, "{}:{}", self.kind(), key),
            None => f.write_str(self.kind()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::UrlPattern;
    use url::Url;

    fn captures(pathname: &str, url: &str) -> PatternMatch {
        UrlPattern::new("example.jp", pathname)
            .unwrap()
            .exec(&Url::parse(url).unwrap())
            .unwrap()
    }

    #[test]
    fn test_path_segment_candidate() {
        let m = captures("/products/:productId", "https://example.jp/products/9784798638614");
        let strategy = Strategy::PathSegment("productId".to_string());

        assert_eq!(strategy.apply(&m, "").unwrap().as_str(), "9784798638614");
    }

    #[test]
    fn test_path_segment_rejects_malformed_candidate() {
        let m = captures("/products/:productId", "https://example.jp/products/gift-card");
        let strategy = Strategy::PathSegment("productId".to_string());

        assert_eq!(strategy.candidate(&m, "").as_deref(), Some("gift-card"));
        assert!(strategy.apply(&m, "").is_none());
    }

    #[test]
    fn test_path_segment_missing_capture() {
        let m = captures("/products/:productId", "https://example.jp/products/1");
        let strategy = Strategy::PathSegment("other".to_string());

        assert!(strategy.candidate(&m, "").is_none());
    }

    #[test]
    fn test_query_param_candidate() {
        let m = captures(
            "/pages/shoplist",
            "https://example.jp/pages/shoplist?utm=x&product=9784798638614&product=4798640313",
        );
        let strategy = Strategy::QueryParam("product".to_string());

        assert_eq!(strategy.apply(&m, "").unwrap().as_str(), "9784798638614");
    }

    #[test]
    fn test_query_param_absent_or_malformed() {
        let strategy = Strategy::QueryParam("product".to_string());

        let m = captures("/pages/shoplist", "https://example.jp/pages/shoplist");
        assert!(strategy.apply(&m, "").is_none());

        let m = captures("/pages/shoplist", "https://example.jp/pages/shoplist?product=978-4798638614");
        assert!(strategy.apply(&m, "").is_none());

        let m = captures("/pages/shoplist", "https://example.jp/pages/shoplist?product=");
        assert!(strategy.apply(&m, "").is_none());
    }

    #[test]
    fn test_query_param_is_decoded() {
        let m = captures("/pages/shoplist", "https://example.jp/pages/shoplist?product=%39784798638614");
        let strategy = Strategy::QueryParam("product".to_string());

        assert_eq!(strategy.apply(&m, "").unwrap().as_str(), "9784798638614");
    }

    #[test]
    fn test_markup_scan_ignores_url() {
        let m = captures("/item/1/:pageId", "https://example.jp/item/1/9784798638614");

        assert!(Strategy::MarkupScan.apply(&m, "<p>no label here</p>").is_none());
        assert_eq!(
            Strategy::MarkupScan
                .apply(&m, "<p>ISBN・EAN: 9784798640310</p>")
                .unwrap()
                .as_str(),
            "9784798640310"
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Strategy::MarkupScan.to_string(), "markup-scan");
        assert_eq!(
            Strategy::QueryParam("product".to_string()).to_string(),
            "query-param:product"
        );
        assert!(Strategy::MarkupScan.needs_markup());
        assert!(!Strategy::PathSegment("id".to_string()).needs_markup());
    }
}
