use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use hondoko::{Outcome, config::Config, host::TerminalHost, runner};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "hondoko")]
#[command(about = "Extract an ISBN from a book page and print its Hondoko lookup URL")]
struct Cli {
    /// URL of the page the ISBN should be taken from
    url: String,

    /// File holding the page markup; `-` reads stdin
    #[arg(long)]
    html: Option<PathBuf>,

    /// Lookup service to attach the ISBN to (overrides HONDOKO_LOOKUP_URL)
    #[arg(long)]
    lookup_url: Option<String>,

    /// Also open the lookup page in the system browser
    #[arg(long, default_value_t = false)]
    open: bool,
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    if let Some(lookup_url) = &cli.lookup_url {
        config = config.with_lookup_url(lookup_url)?;
    }
    if cli.open {
        config = config.with_open_browser(true);
    }

    let markup = read_markup(cli.html.as_ref())?;
    let mut host = TerminalHost::new(cli.url, markup, config.open_browser());

    match runner::run(&mut host, &config) {
        Outcome::Opened(_) => Ok(ExitCode::SUCCESS),
        Outcome::Alerted(_) => Ok(ExitCode::FAILURE),
    }
}

fn read_markup(path: Option<&PathBuf>) -> Result<String> {
    match path {
        None => Ok(String::new()),
        Some(path) if path.as_os_str() == "-" => {
            let mut markup = String::new();
            io::stdin()
                .read_to_string(&mut markup)
                .context("failed to read markup from stdin")?;
            Ok(markup)
        }
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read markup from {}", path.display())),
    }
}
