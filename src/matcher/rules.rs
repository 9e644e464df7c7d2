use std::sync::LazyLock;

use tracing::debug;
use url::Url;

use crate::extractor::{Isbn, Strategy};
use crate::matcher::pattern::{PatternError, PatternMatch, UrlPattern};

pub const BOOKLOG_HOST: &str = "booklog.jp";
pub const JUNKUDO_HOST: &str = "www.maruzenjunkudo.co.jp";

static STANDARD_RULES: LazyLock<RuleSet> = LazyLock::new(|| {
    RuleSet::from_rules(vec![
        // https://booklog.jp/item/1/4798640313
        Rule::new(
            "booklog",
            BOOKLOG_HOST,
            "/item/1/:pageId",
            Strategy::MarkupScan,
        ),
        // https://www.maruzenjunkudo.co.jp/products/9784798638614
        Rule::new(
            "junkudo-details",
            JUNKUDO_HOST,
            "/products/:productId",
            Strategy::PathSegment("productId".to_string()),
        ),
        // https://www.maruzenjunkudo.co.jp/pages/shoplist?product=9784798638614
        Rule::new(
            "junkudo-search",
            JUNKUDO_HOST,
            "/pages/shoplist",
            Strategy::QueryParam("product".to_string()),
        ),
    ])
    .expect("built-in rules must compile")
});

/// A supported source site: where it lives and how its ISBN is found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    name: &'static str,
    pattern: UrlPattern,
    strategy: Strategy,
}

impl Rule {
    fn new(
        name: &'static str,
        hostname: &str,
        pathname: &str,
        strategy: Strategy,
    ) -> Result<Self, PatternError> {
        Ok(Self {
            name,
            pattern: UrlPattern::new(hostname, pathname)?,
            strategy,
        })
    }

    pub fn with_pattern(name: &'static str, pattern: UrlPattern, strategy: Strategy) -> Self {
        Self {
            name,
            pattern,
            strategy,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn pattern(&self) -> &UrlPattern {
        &self.pattern
    }

    pub fn strategy(&self) -> &Strategy {
        &self.strategy
    }
}

/// Rules in priority order. The first rule whose pattern matches wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    fn from_rules(rules: Vec<Result<Rule, PatternError>>) -> Result<Self, PatternError> {
        Ok(Self {
            rules: rules.into_iter().collect::<Result<_, _>>()?,
        })
    }

    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// The three built-in rules: booklog, junkudo product page, junkudo shop list.
    pub fn standard() -> &'static RuleSet {
        &STANDARD_RULES
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn first_match(&self, url: &Url) -> Option<RuleMatch<'_>> {
        for rule in &self.rules {
            if let Some(captures) = rule.pattern.exec(url) {
                debug!(rule = rule.name, url = %url, "rule matched");
                return Some(RuleMatch { rule, captures });
            }
        }
        debug!(url = %url, "no rule matched");
        None
    }
}

/// The selected rule bound to what its pattern captured.
#[derive(Debug, Clone)]
pub struct RuleMatch<'a> {
    rule: &'a Rule,
    captures: PatternMatch,
}

impl<'a> RuleMatch<'a> {
    pub fn rule(&self) -> &'a Rule {
        self.rule
    }

    pub fn captures(&self) -> &PatternMatch {
        &self.captures
    }

    pub fn extract(&self, html: &str) -> Option<Isbn> {
        self.rule.strategy.apply(&self.captures, html)
    }
}
