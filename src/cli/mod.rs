//! Command-line interface parsing and handling
//!
//! This module handles parsing command-line arguments and executing the appropriate commands.

pub mod catalog_list;
pub mod generate;
pub mod probe;
pub mod settings;

use std::error::Error;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::cli::catalog_list::{list_features, list_themes};
use crate::cli::generate::{run_generate, GenerateArgs};
use crate::cli::probe::run_probe;
use crate::cli::settings::{SettingError, SettingRegistry};
use crate::core::config::data::path_display;
use crate::core::config::Config;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\ncommit: ",
    env!("VERGEN_GIT_SHA"),
    "\nbuilt: ",
    env!("VERGEN_BUILD_TIMESTAMP"),
    "\nrustc: ",
    env!("VERGEN_RUSTC_SEMVER"),
);

#[derive(Parser)]
#[command(name = "appspark")]
#[command(version, long_version = LONG_VERSION)]
#[command(about = "Generate app ideas from a theme and a few features")]
#[command(
    long_about = "Appspark asks a chat-completion service for a unique app concept built \
around a theme and up to three features, then prints the result as text, HTML or \
styled HTML.\n\n\
Examples:\n\
  appspark generate -t Space -f \"Real-time Chat\" -f \"Maps & Geolocation\"\n\
  appspark generate -t Retro --detailed --format styled -o idea.html\n\
  appspark themes\n\
  appspark set max-attempts 3\n\n\
Failed requests are retried with a constant delay (see 'appspark config').\n\
Set RUST_LOG or pass -v to see each attempt."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Append prompts and results to the specified file
    #[arg(short = 'l', long, global = true, value_name = "FILE")]
    pub log: Option<String>,

    /// Print debug logging to stderr
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate an app idea from a theme and features
    Generate(GenerateArgs),
    /// Send one request without retries and print the unprocessed reply
    Probe {
        /// Prompt to send (a built-in sample prompt if omitted)
        #[arg(trailing_var_arg = true)]
        prompt: Vec<String>,
    },
    /// List available themes
    Themes,
    /// List available features
    Features,
    /// Show the effective configuration
    Config,
    /// Set configuration values
    Set {
        /// Configuration key to set
        key: String,
        /// Value to set for the key
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        value: Vec<String>,
    },
    /// Unset configuration values
    Unset {
        /// Configuration key to unset
        key: String,
    },
}

pub fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_tracing(args.verbose);

    tokio::runtime::Runtime::new()?.block_on(async_main(args))
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "appspark=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

async fn async_main(args: Args) -> Result<(), Box<dyn Error>> {
    match args.command {
        Commands::Generate(generate_args) => run_generate(generate_args, args.log).await,
        Commands::Probe { prompt } => run_probe(prompt).await,
        Commands::Themes => {
            list_themes();
            Ok(())
        }
        Commands::Features => {
            list_features();
            Ok(())
        }
        Commands::Config => {
            let config = Config::load()?;
            config.print_all();
            println!();
            println!("Config file: {}", path_display(Config::get_config_path()?));
            println!(
                "Settable keys: {}",
                SettingRegistry::new().keys_display_order().join(", ")
            );
            Ok(())
        }
        Commands::Set { key, value } => {
            let mut config = Config::load()?;
            let outcome = SettingRegistry::new().set(&key, &value, &mut config);
            persist_setting(&config, outcome);
            Ok(())
        }
        Commands::Unset { key } => {
            let mut config = Config::load()?;
            let outcome = SettingRegistry::new().unset(&key, &mut config);
            persist_setting(&config, outcome);
            Ok(())
        }
    }
}

fn persist_setting(config: &Config, outcome: Result<String, SettingError>) {
    let outcome = outcome.and_then(|message| {
        config
            .save()
            .map_err(|err| SettingError::ConfigError(err.to_string()))?;
        Ok(message)
    });

    match outcome {
        Ok(message) => println!("{message}"),
        Err(err) => {
            err.print();
            std::process::exit(err.exit_code());
        }
    }
}
