//! The environment the engine runs in.
//!
//! A browser page supplies the current URL and markup and receives exactly one
//! side effect: a new tab or a blocking alert. Hosts here play that role for the
//! terminal, for the HTTP surface and for tests.

pub mod recording;
pub mod terminal;

pub use recording::{RecordingHost, SideEffect};
pub use terminal::TerminalHost;

use std::fmt::{self, Display, Formatter};

use url::Url;

#[cfg_attr(test, mockall::automock)]
pub trait Host {
    /// Whether structured URL-pattern matching is available.
    fn supports_url_pattern(&self) -> bool;

    /// The page URL as of invocation.
    fn current_url(&self) -> String;

    /// The page markup as of invocation.
    fn document_markup(&self) -> String;

    fn alert(&mut self, message: &str);

    fn open_in_new_tab(&mut self, url: &Url);

    /// Detach the injected script from the page.
    fn remove_script(&mut self);
}

/// The two fixed messages a run can end with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    UnsupportedEnvironment,
    IsbnNotFound,
}

impl Notice {
    pub fn message(self) -> &'static str {
        match self {
            Self::UnsupportedEnvironment => {
                "This bookmarklet requires browser support for the URLPattern API."
            }
            Self::IsbnNotFound => "Could not extract ISBN.",
        }
    }
}

impl Display for Notice {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
