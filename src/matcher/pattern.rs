use std::collections::{HashMap, HashSet};

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use thiserror::Error;
use url::Url;

/// Characters the URL parser escapes inside a path component. Literal template
/// segments are encoded with the same set so they compare against `Url::path`.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

const WEB_PROTOCOLS: &[&str] = &["http", "https"];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("hostname must not be empty")]
    EmptyHostname,

    #[error("path template must start with '/': {0}")]
    MissingLeadingSlash(String),

    #[error("empty capture name in path template: {0}")]
    EmptyCaptureName(String),

    #[error("duplicate capture name: {0}")]
    DuplicateCapture(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Capture(String),
}

/// Hostname plus path template, matched against http(s) URLs.
///
/// A template such as `/item/1/:pageId` is split on `/`. Literal segments must
/// equal the URL's path component; `:name` segments capture exactly one
/// non-empty component. Query string, fragment and port are not consulted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlPattern {
    hostname: String,
    pathname: String,
    segments: Vec<Segment>,
}

impl UrlPattern {
    pub fn new(hostname: &str, pathname: &str) -> Result<Self, PatternError> {
        let hostname = hostname.trim().to_ascii_lowercase();
        if hostname.is_empty() {
            return Err(PatternError::EmptyHostname);
        }

        let rest = pathname
            .strip_prefix('/')
            .ok_or_else(|| PatternError::MissingLeadingSlash(pathname.to_string()))?;

        let mut seen = HashSet::new();
        let mut segments = Vec::new();
        for part in rest.split('/') {
            match part.strip_prefix(':') {
                Some("") => return Err(PatternError::EmptyCaptureName(pathname.to_string())),
                Some(name) => {
                    if !seen.insert(name) {
                        return Err(PatternError::DuplicateCapture(name.to_string()));
                    }
                    segments.push(Segment::Capture(name.to_string()));
                }
                None => {
                    let encoded = utf8_percent_encode(part, PATH_SEGMENT).to_string();
                    segments.push(Segment::Literal(encoded));
                }
            }
        }

        Ok(Self {
            hostname,
            pathname: pathname.to_string(),
            segments,
        })
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn pathname(&self) -> &str {
        &self.pathname
    }

    /// Test `url` against the pattern, returning the captured segments on success.
    pub fn exec(&self, url: &Url) -> Option<PatternMatch> {
        if !WEB_PROTOCOLS.contains(&url.scheme()) {
            return None;
        }
        if url.host_str()? != self.hostname {
            return None;
        }

        let components: Vec<&str> = url.path().strip_prefix('/')?.split('/').collect();
        if components.len() != self.segments.len() {
            return None;
        }

        let mut groups = HashMap::new();
        for (segment, component) in self.segments.iter().zip(components) {
            match segment {
                Segment::Literal(literal) if literal == component => {}
                Segment::Literal(_) => return None,
                Segment::Capture(_) if component.is_empty() => return None,
                Segment::Capture(name) => {
                    groups.insert(name.clone(), component.to_string());
                }
            }
        }

        Some(PatternMatch {
            groups,
            url: url.clone(),
        })
    }

    pub fn test(&self, url: &Url) -> bool {
        self.exec(url).is_some()
    }
}

/// Named path captures of a successful match, together with the matched URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternMatch {
    groups: HashMap<String, String>,
    url: Url,
}

impl PatternMatch {
    /// Raw (still percent-encoded) value of a named capture.
    pub fn group(&self, name: &str) -> Option<&str> {
        self.groups.get(name).map(String::as_str)
    }

    pub fn groups(&self) -> &HashMap<String, String> {
        &self.groups
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}
