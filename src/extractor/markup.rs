use regex::Regex;
use std::sync::LazyLock;

/// Label booklog prints in front of the identifier, e.g. `ISBN・EAN: 9784798640310`.
pub const ISBN_LABEL: &str = "ISBN・EAN:";

static ISBN_LABEL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"ISBN・EAN:\s*([0-9]{10}(?:[0-9]{3})?)").expect("Failed to compile ISBN label regex")
});

/// Find the first labelled digit run in raw page markup.
///
/// Only the first occurrence of the label followed by at least ten digits is
/// considered. The run is not bounded on the right, so a longer run yields its
/// leading 13 (or 10) digits.
pub fn scan_isbn(html: &str) -> Option<&str> {
    ISBN_LABEL_REGEX
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
