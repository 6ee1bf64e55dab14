//! # tidyfmt
//!
//! A small CLI over the `tidyfmt` library: format currency amounts, dates and
//! byte counts as en-US display strings, and check email addresses and
//! password strength.
//!
//! ## Usage
//!
//! ```bash
//! tidyfmt currency 1234.5        # $1,234.50
//! tidyfmt date 2026-03-09        # March 9, 2026
//! tidyfmt size 1536              # 1.5 KB
//! tidyfmt email user@example.com # valid
//! tidyfmt --json password hunter2
//! ```
//!
//! Validation commands exit with status 1 when the input is rejected.

mod cli;

use anyhow::{Result, bail};
use chrono::Local;
use clap::Parser;
use cli::{Cli, Commands, ConfigCommand};
use colored::Colorize;
use std::process::exit;
use tidyfmt::{
    config::{FileConfig, OutputOptions},
    format_currency, format_date, format_file_size, parse_date,
    output::JsonOutput,
};

/// Entry point for the tidyfmt application.
///
/// Runs [`inner_main`], printing any error to stderr. Exits with a non-zero
/// status on error or when a validation command rejects its input.
fn main() {
    match inner_main() {
        Ok(true) => {}
        Ok(false) => exit(1),
        Err(err) => {
            eprintln!("Error: {err}");

            exit(1);
        }
    }
}

/// Main application logic that can return errors.
///
/// Returns `Ok(false)` when a validation command rejected its input.
///
/// # Errors
///
/// Returns errors from invalid formatter input, config-file handling, or
/// JSON serialization.
fn inner_main() -> Result<bool> {
    let args = Cli::parse();

    if let Commands::Config { command } = &args.command {
        handle_config_command(command)?;
        return Ok(true);
    }

    let file_config = load_config(args.json());
    let options = args.output_options(&file_config);

    if !options.color {
        colored::control::set_override(false);
    }

    if options.verbose
        && let Some(path) = FileConfig::config_path()
    {
        debug(&format!("config file: {}", path.display()));
    }

    let record = resolve_record(&args.command, &options)?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        print_record(&record);
    }

    Ok(record.succeeded())
}

/// Run a command, turning a failure into an error record in JSON mode.
///
/// Outside JSON mode the error is returned and printed by [`main`].
fn resolve_record(command: &Commands, options: &OutputOptions) -> Result<JsonOutput> {
    match run_command(command, options) {
        Ok(record) => Ok(record),
        Err(err) if options.json => Ok(JsonOutput::failed(command.name(), err.to_string())),
        Err(err) => Err(err),
    }
}

/// Run a formatting or validation command and collect its result.
fn run_command(command: &Commands, options: &OutputOptions) -> Result<JsonOutput> {
    let record = match command {
        Commands::Currency { amount } => {
            JsonOutput::formatted("currency", amount.to_string(), format_currency(*amount)?)
        }
        Commands::Date { date } => {
            let (input, parsed) = match date {
                Some(input) => (input.clone(), parse_date(input)?),
                None => {
                    let today = Local::now().date_naive();
                    if options.verbose {
                        debug(&format!("no date given, using today ({today})"));
                    }
                    (today.to_string(), today)
                }
            };
            JsonOutput::formatted("date", input, format_date(parsed))
        }
        Commands::Size { bytes } => {
            JsonOutput::formatted("size", bytes.to_string(), format_file_size(*bytes)?)
        }
        Commands::Email { address } => JsonOutput::for_email(address),
        Commands::Password { password } => JsonOutput::for_password(password),
        Commands::Config { .. } => bail!("config commands are handled separately"),
    };

    if options.verbose {
        debug(&format!("{} ok: {}", record.command, record.succeeded()));
    }

    Ok(record)
}

/// Print a record as human-readable text.
fn print_record(record: &JsonOutput) {
    if let Some(output) = &record.output {
        println!("{output}");
        return;
    }

    match record.valid {
        Some(true) => println!("{}", "✅ valid".green()),
        Some(false) => {
            println!("{}", "❌ invalid".red());
            for rule in &record.unmet_rules {
                println!("  {} {rule}", "missing:".yellow());
            }
        }
        None => {}
    }
}

/// Write a diagnostic line to stderr.
fn debug(message: &str) {
    eprintln!("{}", message.dimmed());
}

// ── Config subcommand ────────────────────────────────────────────────

/// Default config file template written by `config init`.
const CONFIG_TEMPLATE: &str = r"# tidyfmt configuration
# All values shown are their defaults. Uncomment and change as needed.

[output]
# Print a single JSON object instead of human-readable text
# json = false

# Use colors in human-readable output
# color = true

# Print diagnostic messages to stderr
# verbose = false
";

/// Dispatch a `config` subcommand.
fn handle_config_command(cmd: &ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Path => match FileConfig::config_path() {
            Some(path) => println!("{}", path.display()),
            None => bail!("Could not determine the config directory on this platform"),
        },
        ConfigCommand::Show => show_config()?,
        ConfigCommand::Init => init_config()?,
    }
    Ok(())
}

/// Print the effective configuration (file values merged with defaults).
fn show_config() -> Result<()> {
    let path = FileConfig::config_path();

    let (file_exists, config) = match &path {
        Some(p) if p.exists() => (true, FileConfig::load_from(p)?),
        _ => (false, FileConfig::default()),
    };

    match &path {
        Some(p) if file_exists => println!("Config file: {} (found)", p.display()),
        Some(p) => println!(
            "Config file: {} (not found - showing defaults)",
            p.display()
        ),
        None => println!("Config file: (cannot determine path on this platform)"),
    }

    println!();
    println!("{}", format_config(&config));
    Ok(())
}

/// Format a [`FileConfig`] as a human-readable table, showing defaults for `None` fields.
fn format_config(config: &FileConfig) -> String {
    fn show_bool(val: Option<bool>, default: bool) -> String {
        val.map_or_else(|| format!("{default}  (default)"), |v| v.to_string())
    }

    let defaults = OutputOptions::default();

    format!(
        "\
[output]
json    = {json}
color   = {color}
verbose = {verbose}",
        json = show_bool(config.output.json, defaults.json),
        color = show_bool(config.output.color, defaults.color),
        verbose = show_bool(config.output.verbose, defaults.verbose),
    )
}

/// Write a default config template to the config file path if it does not exist yet.
fn init_config() -> Result<()> {
    let Some(path) = FileConfig::config_path() else {
        bail!("Could not determine the config directory on this platform");
    };

    if path.exists() {
        println!("Config file already exists at: {}", path.display());
        println!("Remove it first if you want to regenerate it.");
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create config directory {}: {e}",
                parent.display()
            )
        })?;
    }

    std::fs::write(&path, CONFIG_TEMPLATE)
        .map_err(|e| anyhow::anyhow!("Failed to write config file {}: {e}", path.display()))?;

    println!("Config file written to: {}", path.display());
    Ok(())
}

/// Load the configuration file, falling back to defaults on failure.
fn load_config(json_mode: bool) -> FileConfig {
    match FileConfig::load() {
        Ok(config) => config,
        Err(e) => {
            if !json_mode {
                eprintln!("{} {e}", "Warning: Failed to load config file:".yellow());
            }
            FileConfig::default()
        }
    }
}
