use tracing::{info, instrument, warn};
use url::Url;

use crate::config::Config;
use crate::extractor::Extractor;
use crate::host::{Host, Notice};
use crate::lookup::lookup_url;

/// What a run did to its host. Exactly one of the two happens per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Opened(Url),
    Alerted(Notice),
}

/// One-shot entry point: read the page, extract, then open or alert.
#[derive(Debug, Clone)]
pub struct Runner {
    extractor: Extractor,
    lookup_base: Url,
}

impl Runner {
    pub fn new(extractor: Extractor, lookup_base: Url) -> Self {
        Self {
            extractor,
            lookup_base,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(Extractor::default(), config.lookup_url().clone())
    }

    pub fn extractor(&self) -> &Extractor {
        &self.extractor
    }

    pub fn lookup_base(&self) -> &Url {
        &self.lookup_base
    }

    /// Run once against `host`. The injected script is always detached last.
    #[instrument(skip_all)]
    pub fn run<H: Host + ?Sized>(&self, host: &mut H) -> Outcome {
        let outcome = self.execute(host);
        host.remove_script();
        outcome
    }

    fn execute<H: Host + ?Sized>(&self, host: &mut H) -> Outcome {
        if !host.supports_url_pattern() {
            warn!("host lacks url pattern support");
            return alert(host, Notice::UnsupportedEnvironment);
        }

        let current_url = host.current_url();
        let markup = host.document_markup();

        match self.extractor.extract_str(&current_url, &markup) {
            Ok(Some(isbn)) => {
                let target = lookup_url(&self.lookup_base, &isbn);
                info!(isbn = %isbn, lookup = %target, "opening lookup page");
                host.open_in_new_tab(&target);
                Outcome::Opened(target)
            }
            Ok(None) => {
                info!(url = %current_url, "no isbn found");
                alert(host, Notice::IsbnNotFound)
            }
            Err(e) => {
                warn!(url = %current_url, error = %e, "current url could not be parsed");
                alert(host, Notice::IsbnNotFound)
            }
        }
    }
}

fn alert<H: Host + ?Sized>(host: &mut H, notice: Notice) -> Outcome {
    host.alert(notice.message());
    Outcome::Alerted(notice)
}

/// Run the built-in rules against `host` with the configured lookup service.
pub fn run<H: Host + ?Sized>(host: &mut H, config: &Config) -> Outcome {
    Runner::from_config(config).run(host)
}
