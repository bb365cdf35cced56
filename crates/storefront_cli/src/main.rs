//! Storefront CLI
//!
//! Drives the header locale switcher without a UI toolkit: list regions,
//! render the popover as text, and replay a region/language pick through the
//! in-memory router.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{error, warn};

use storefront_locale::{RegionIndex, SwitcherEvent};

mod config;
mod host;

use config::StorefrontConfig;
use host::Storefront;

#[derive(Parser)]
#[command(name = "storefront")]
#[command(about = "Inspect locale catalogs and drive the storefront locale switcher")]
#[command(version)]
struct Cli {
    /// Config file (defaults to ./storefront.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Start in this locale instead of the configured one
    #[arg(short, long, global = true)]
    locale: Option<String>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List regions with their languages
    Regions,

    /// Render the locale switcher for the current locale
    Show {
        /// Render with the popover open
        #[arg(long)]
        open: bool,
    },

    /// Pick a region (and optionally a language) and submit
    Switch {
        /// Region to pick
        #[arg(short, long)]
        region: String,

        /// Language to pick; defaults to the region's first language
        #[arg(short = 'g', long)]
        language: Option<String>,
    },

    /// Validate the catalog and header translations
    Check,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        })
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose >= 2)
        .init();
}

fn run(cli: Cli) -> Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let config = StorefrontConfig::discover(cli.config.as_deref(), &cwd)?;
    let store = Storefront::from_config(&config, cli.locale.as_deref())?;

    match cli.command {
        Commands::Regions => {
            let index = RegionIndex::build(store.catalog());
            if cli.json {
                print_json(&index)?;
            } else {
                for (region, group) in index.iter() {
                    println!("{} {:<6} {}", group.flag, region, group.languages.join(", "));
                }
            }
        }

        Commands::Show { open } => {
            let mut switcher = store.mount()?;
            switcher.set_open(open);
            match switcher.view(store.i18n()) {
                Some(view) if cli.json => print_json(&view)?,
                Some(view) => print!("{view}"),
                None => {
                    if !cli.json {
                        println!("(single-locale storefront: switcher hidden)");
                    } else {
                        println!("null");
                    }
                }
            }
        }

        Commands::Switch { region, language } => {
            let mut switcher = store.mount()?;
            let router = store.router();
            let mut events = vec![
                SwitcherEvent::OpenChange(true),
                SwitcherEvent::RegionChanged(region),
            ];
            if let Some(language) = language {
                events.push(SwitcherEvent::LanguageChanged(language));
            }
            for event in events {
                switcher.dispatch(event, router);
            }
            let selection = switcher.selection().clone();

            match switcher.dispatch(SwitcherEvent::Submit, router) {
                Some(_) if cli.json => print_json(&router.current())?,
                Some(_) => println!("{}", router.current().href),
                None => {
                    eprintln!(
                        "no locale for region `{}` and language `{}`",
                        selection.region, selection.language
                    );
                    return Ok(ExitCode::from(2));
                }
            }
        }

        Commands::Check => {
            let catalog = store.catalog();
            let ambiguous = catalog.ambiguous_pairs();
            for pair in &ambiguous {
                let ids: Vec<&str> = pair.locales.iter().map(|l| l.as_str()).collect();
                warn!(
                    language = %pair.language,
                    region = %pair.region,
                    locales = ?ids,
                    "pair claimed by several locales; only the first is reachable"
                );
            }
            let missing = store.missing_messages();
            for (locale, id) in &missing {
                warn!(%locale, message = %id, "missing translation");
            }

            if cli.json {
                print_json(&CheckReport {
                    locales: catalog.len(),
                    supported: catalog.supported_count(),
                    ambiguous: ambiguous.len(),
                    missing_messages: missing.len(),
                })?;
            } else {
                println!(
                    "{} locales ({} supported), {} ambiguous pairs, {} missing messages",
                    catalog.len(),
                    catalog.supported_count(),
                    ambiguous.len(),
                    missing.len()
                );
            }
            if !ambiguous.is_empty() || !missing.is_empty() {
                return Ok(ExitCode::from(1));
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

#[derive(Serialize)]
struct CheckReport {
    locales: usize,
    supported: usize,
    ambiguous: usize,
    missing_messages: usize,
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
