use url::Url;

use crate::extractor::Isbn;

pub const DEFAULT_LOOKUP_URL: &str = "https://hondoko.nakashima723.info/";
pub const ISBN_PARAM: &str = "isbn";

/// Attach `isbn=<value>` to the lookup service URL.
///
/// An existing `isbn` pair is replaced in place and any further ones dropped;
/// every other query pair is kept in order.
pub fn lookup_url(base: &Url, isbn: &Isbn) -> Url {
    let mut pairs: Vec<(String, String)> = Vec::new();
    let mut replaced = false;
    for (key, value) in base.query_pairs() {
        if key == ISBN_PARAM {
            if !replaced {
                pairs.push((ISBN_PARAM.to_string(), isbn.to_string()));
                replaced = true;
            }
            continue;
        }
        pairs.push((key.into_owned(), value.into_owned()));
    }
    if !replaced {
        pairs.push((ISBN_PARAM.to_string(), isbn.to_string()));
    }

    let mut url = base.clone();
    url.set_query(None);
    url.query_pairs_mut().extend_pairs(pairs);
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    fn isbn(s: &str) -> Isbn {
        Isbn::parse(s).unwrap()
    }

    #[test]
    fn test_appends_isbn_to_default_service() {
        let base = Url::parse(DEFAULT_LOOKUP_URL).unwrap();
        let url = lookup_url(&base, &isbn("9784798638611"));

        assert_eq!(
            url.as_str(),
            "https://hondoko.nakashima723.info/?isbn=9784798638611"
        );
    }

    #[test]
    fn test_replaces_existing_isbn_and_keeps_other_pairs() {
        let base = Url::parse("https://lookup.example/search?lang=ja&isbn=1&src=bm&isbn=2").unwrap();
        let url = lookup_url(&base, &isbn("4798640313"));

        assert_eq!(
            url.as_str(),
            "https://lookup.example/search?lang=ja&isbn=4798640313&src=bm"
        );
    }

    #[test]
    fn test_keeps_fragment() {
        let base = Url::parse("https://lookup.example/#results").unwrap();
        let url = lookup_url(&base, &isbn("4798640313"));

        assert_eq!(url.query(), Some("isbn=4798640313"));
        assert_eq!(url.fragment(), Some("results"));
    }
}
