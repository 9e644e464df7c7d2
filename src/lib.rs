//! Hondoko ISBN extraction engine.
//!
//! Given a page URL and its markup, pick the first matching site rule, pull an
//! ISBN out of the path, the query string or the markup, and send the user to
//! the Hondoko lookup service with it.
//!
//! - `matcher`: hostname and path-template rules, first match wins
//! - `extractor`: candidate strategies and ISBN shape validation
//! - `runner`: one-shot orchestration against a `host::Host`
//! - `api`: the same engine over HTTP

pub mod api;
pub mod app_state;
pub mod config;
pub mod extractor;
pub mod health;
pub mod host;
pub mod lookup;
pub mod matcher;
pub mod runner;

pub use extractor::{Extractor, Isbn, extract_isbn, extract_isbn_from_str};
pub use runner::{Outcome, Runner};
