use url::Url;

use crate::host::Host;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SideEffect {
    Alert(String),
    Open(Url),
    ScriptRemoved,
}

/// In-memory host that records every side effect instead of performing it.
#[derive(Debug, Clone)]
pub struct RecordingHost {
    url: String,
    markup: String,
    supports_url_pattern: bool,
    effects: Vec<SideEffect>,
}

impl RecordingHost {
    pub fn new(url: impl Into<String>, markup: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            markup: markup.into(),
            supports_url_pattern: true,
            effects: Vec::new(),
        }
    }

    /// Simulate a browser without URL-pattern support.
    pub fn without_url_pattern(mut self) -> Self {
        self.supports_url_pattern = false;
        self
    }

    pub fn effects(&self) -> &[SideEffect] {
        &self.effects
    }

    pub fn alerts(&self) -> Vec<&str> {
        self.effects
            .iter()
            .filter_map(|effect| match effect {
                SideEffect::Alert(message) => Some(message.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn opened(&self) -> Vec<&Url> {
        self.effects
            .iter()
            .filter_map(|effect| match effect {
                SideEffect::Open(url) => Some(url),
                _ => None,
            })
            .collect()
    }

    pub fn script_removed(&self) -> bool {
        self.effects.contains(&SideEffect::ScriptRemoved)
    }
}

impl Host for RecordingHost {
    fn supports_url_pattern(&self) -> bool {
        self.supports_url_pattern
    }

    fn current_url(&self) -> String {
        self.url.clone()
    }

    fn document_markup(&self) -> String {
        self.markup.clone()
    }

    fn alert(&mut self, message: &str) {
        self.effects.push(SideEffect::Alert(message.to_string()));
    }

    fn open_in_new_tab(&mut self, url: &Url) {
        self.effects.push(SideEffect::Open(url.clone()));
    }

    fn remove_script(&mut self) {
        self.effects.push(SideEffect::ScriptRemoved);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_effects_in_order() {
        let mut host = RecordingHost::new("https://example.com/", "<p></p>");
        host.alert("hello");
        host.open_in_new_tab(&Url::parse("https://example.org/").unwrap());
        host.remove_script();

        assert_eq!(host.effects().len(), 3);
        assert_eq!(host.alerts(), vec!["hello"]);
        assert_eq!(host.opened()[0].as_str(), "https://example.org/");
        assert!(host.script_removed());
    }

    #[test]
    fn test_reports_inputs() {
        let host = RecordingHost::new("https://example.com/", "<p></p>").without_url_pattern();

        assert!(!host.supports_url_pattern());
        assert_eq!(host.current_url(), "https://example.com/");
        assert_eq!(host.document_markup(), "<p></p>");
    }
}
