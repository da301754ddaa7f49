//! # Andaz Cart CLI Library
//!
//! Core library for the `andaz-cart` binary. `main.rs` only parses
//! arguments and maps errors to exit codes; everything else lives here so
//! it can be tested without spawning a process.
//!
//! ## Module Organization
//! ```text
//! andaz_cli/
//! ├── lib.rs          ◄─── You are here (Cli, run, tracing setup)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── cart.rs     ◄─── CartStore ownership and storage selection
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Subcommands and dispatch
//! │   └── cart.rs     ◄─── Cart manipulation commands
//! ├── render.rs       ◄─── Text view and header badge
//! └── error.rs        ◄─── Command error type
//! ```

pub mod commands;
pub mod error;
pub mod render;
pub mod state;

use std::path::PathBuf;

use clap::Parser;
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use commands::{Command, Output};
use error::{CliError, ErrorCode};
use render::TextRenderer;
use state::{CartState, ConfigState};

/// Shopping cart for the Andaz storefront.
#[derive(Debug, Clone, Parser)]
#[command(name = "andaz-cart", version, about)]
pub struct Cli {
    /// Print JSON instead of the text view
    #[arg(long, global = true)]
    pub json: bool,

    /// Directory holding the cart file (overrides ANDAZ_DATA_DIR)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Keep the cart in memory for this run only
    #[arg(long, global = true, conflicts_with = "data_dir")]
    pub memory: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Environment config with command line overrides applied.
    pub fn config(&self) -> ConfigState {
        let mut config = ConfigState::from_env();
        if let Some(dir) = &self.data_dir {
            config.data_dir = Some(dir.clone());
        }
        config
    }
}

/// Runs one command and returns what should be printed on stdout.
///
/// ## Flow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. ConfigState::from_env() + --data-dir                                │
/// │  2. CartState::open() (or in_memory with --memory)                      │
/// │  3. commands::execute()                                                 │
/// │  4. TextRenderer, or serde_json with --json                             │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run(cli: &Cli) -> anyhow::Result<String> {
    let config = cli.config();
    debug!(?config, "Configuration loaded");

    let mut cart = if cli.memory {
        info!("Cart is session-only (--memory)");
        CartState::in_memory(&config)
    } else {
        CartState::open(&config)
    };

    let command = cli.command.clone().unwrap_or(Command::Show);
    let output = commands::execute(command, &mut cart)?;

    if cli.json {
        let rendered = match &output {
            Output::Cart(response) => to_json(response)?,
            Output::Count(count) => to_json(&serde_json::json!({ "count": count }))?,
        };
        return Ok(rendered);
    }

    let renderer = TextRenderer::new(config);
    Ok(match output {
        Output::Cart(response) => renderer.render_cart(&response),
        Output::Count(count) => renderer.render_badge(count),
    })
}

/// Pretty JSON for `--json`; a failure here is an internal error.
fn to_json<T: Serialize>(value: &T) -> Result<String, CliError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| CliError::internal(format!("Failed to serialize command output: {}", e)))
}

/// How a failed run is reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    /// Text to print: `{code, message}` JSON with `--json`, else `error: ...`.
    pub output: String,
    /// Process exit status.
    pub exit_code: u8,
}

/// Turns an error from [`run`] into what the user sees.
///
/// Errors that did not come from a command are reported as `CART_ERROR`.
pub fn report(err: &anyhow::Error, json: bool) -> Failure {
    let cli_err = err
        .downcast_ref::<CliError>()
        .cloned()
        .unwrap_or_else(|| CliError::new(ErrorCode::CartError, format!("{:#}", err)));

    let output = if json {
        serde_json::to_string_pretty(&cli_err)
            .unwrap_or_else(|_| format!("error: {}", cli_err.message))
    } else {
        format!("error: {}", cli_err.message)
    };

    Failure {
        output,
        exit_code: cli_err.exit_code(),
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so stdout stays clean for `--json`.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=andaz_store=trace` - Trace the store only
/// - Default: INFO, DEBUG for the andaz_* crates (targets match by prefix)
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,andaz=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args.iter().copied()).unwrap()
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_default_command_is_show() {
        let cli = parse(&["andaz-cart", "--memory"]);
        let text = run(&cli).unwrap();
        assert!(text.contains(render::EMPTY_CART_MESSAGE));
    }

    #[test]
    fn test_negative_quantity_parses() {
        let cli = parse(&["andaz-cart", "set", "a", "-1"]);
        assert!(matches!(cli.command, Some(Command::Set { qty: -1, .. })));
    }

    #[test]
    fn test_cart_persists_between_runs() {
        let dir = tempfile::tempdir().unwrap();
        let data_dir = dir.path().to_str().unwrap();

        let add = parse(&[
            "andaz-cart", "--data-dir", data_dir, "add", "--id", "a", "--name", "Scarf", "--price",
            "10",
        ]);
        run(&add).unwrap();
        run(&add).unwrap();

        let count = parse(&["andaz-cart", "--data-dir", data_dir, "count"]);
        assert_eq!(run(&count).unwrap(), "2");

        let show = parse(&["andaz-cart", "--data-dir", data_dir, "--json", "show"]);
        let json: serde_json::Value = serde_json::from_str(&run(&show).unwrap()).unwrap();
        assert_eq!(json["totals"]["total"], 2160);
        assert_eq!(json["items"][0]["qty"], 2);
    }

    #[test]
    fn test_json_count() {
        let cli = parse(&["andaz-cart", "--memory", "--json", "count"]);
        let json: serde_json::Value = serde_json::from_str(&run(&cli).unwrap()).unwrap();
        assert_eq!(json["count"], 0);
    }

    #[test]
    fn test_bad_price_is_cli_error() {
        let cli = parse(&[
            "andaz-cart", "--memory", "add", "--id", "a", "--name", "Scarf", "--price", "-3",
        ]);
        let err = run(&cli).unwrap_err();
        let cli_err = err.downcast_ref::<CliError>().unwrap();
        assert_eq!(cli_err.exit_code(), 65);

        let failure = report(&err, false);
        assert_eq!(failure.output, "error: price must be a non-negative number");
        assert_eq!(failure.exit_code, 65);
    }

    #[test]
    fn test_unserializable_output_is_internal_error() {
        // JSON object keys must be strings
        let mut bad = std::collections::HashMap::new();
        bad.insert(vec![1_u8], 1_u8);

        let err = to_json(&bad).unwrap_err();
        assert_eq!(err.code, ErrorCode::Internal);

        let failure = report(&anyhow::Error::new(err), true);
        assert_eq!(failure.exit_code, 70);
        let json: serde_json::Value = serde_json::from_str(&failure.output).unwrap();
        assert_eq!(json["code"], "INTERNAL");
        assert!(json["message"]
            .as_str()
            .unwrap()
            .starts_with("Failed to serialize command output"));
    }

    #[test]
    fn test_other_errors_report_as_cart_error() {
        let failure = report(&anyhow::anyhow!("disk on fire"), true);
        assert_eq!(failure.exit_code, 1);
        let json: serde_json::Value = serde_json::from_str(&failure.output).unwrap();
        assert_eq!(json["code"], "CART_ERROR");
        assert_eq!(json["message"], "disk on fire");
    }
}
