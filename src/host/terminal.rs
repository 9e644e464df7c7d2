use std::io;
use std::process::{Command, Stdio};

use tracing::{debug, info, warn};
use url::Url;

use crate::host::Host;

/// Host for the command line: alerts go to stderr, the lookup URL to stdout.
///
/// With `open_browser` set the URL is also handed to the platform opener. A
/// failure to launch is logged only; the URL has already been printed.
#[derive(Debug, Clone)]
pub struct TerminalHost {
    url: String,
    markup: String,
    open_browser: bool,
}

impl TerminalHost {
    pub fn new(url: impl Into<String>, markup: impl Into<String>, open_browser: bool) -> Self {
        Self {
            url: url.into(),
            markup: markup.into(),
            open_browser,
        }
    }
}

impl Host for TerminalHost {
    fn supports_url_pattern(&self) -> bool {
        true
    }

    fn current_url(&self) -> String {
        self.url.clone()
    }

    fn document_markup(&self) -> String {
        self.markup.clone()
    }

    fn alert(&mut self, message: &str) {
        eprintln!("{}", message);
    }

    fn open_in_new_tab(&mut self, url: &Url) {
        println!("{}", url);
        if self.open_browser {
            match launch_browser(url) {
                Ok(()) => info!(url = %url, "opened lookup page in browser"),
                Err(e) => warn!(url = %url, error = %e, "failed to launch browser"),
            }
        }
    }

    fn remove_script(&mut self) {
        debug!("nothing to detach in terminal host");
    }
}

fn launch_browser(url: &Url) -> io::Result<()> {
    #[cfg(target_os = "macos")]
    let mut command = Command::new("open");

    #[cfg(target_os = "windows")]
    let mut command = {
        let mut command = Command::new("cmd");
        command.args(["/C", "start", ""]);
        command
    };

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    let mut command = Command::new("xdg-open");

    command
        .arg(url.as_str())
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
}
