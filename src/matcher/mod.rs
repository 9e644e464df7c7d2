pub mod pattern;
pub mod rules;

pub use pattern::{PatternError, PatternMatch, UrlPattern};
pub use rules::{Rule, RuleMatch, RuleSet};
