#![no_main]

use libfuzzer_sys::fuzz_target;
use url::Url;

use hondoko::extractor::{extract_isbn, is_isbn};

fuzz_target!(|data: &[u8]| {
    // Convert raw bytes to string, handling invalid UTF-8 gracefully
    let html = String::from_utf8_lossy(data);
    let url = Url::parse("https://booklog.jp/item/1/123456").unwrap();

    // Markup scanning must never panic, and anything it returns is ISBN-shaped
    if let Some(isbn) = extract_isbn(&url, &html) {
        assert!(is_isbn(isbn.as_str()));
    }
});
