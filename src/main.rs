//! Operator CLI for mail-tracker.
//!
//! Runs the tracking transform from the command line without any sending
//! pipeline: useful for previewing tracked HTML, checking how many links a
//! body will carry, and verifying collector configuration.
//!
//! # Usage
//!
//! ```bash
//! # Generate tracked HTML for one recipient (body from a file)
//! trackctl generate --to user@example.com --body body.txt
//!
//! # Same, as JSON, with personalization and a signature block
//! trackctl generate --to user@example.com --body body.txt \
//!     --name "Ada" --company "Acme" --signature sig.html --json
//!
//! # Count / list trackable links (body from stdin)
//! cat body.txt | trackctl count
//! cat body.txt | trackctl links
//!
//! # Validate collector configuration from the environment
//! trackctl config check
//! ```
//!
//! # Environment Variables
//!
//! - `TRACK_OPEN_URL` (required for `generate` / `config check`)
//! - `TRACK_CLICK_URL` (required for `generate` / `config check`)

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use mail_tracker::config;
use mail_tracker::domain::entities::TrackingRequest;
use mail_tracker::tracking::scanner;
use mail_tracker::tracking::transform::TrackingTransform;
use mail_tracker::utils::email::validate_send_input;
use std::fs;
use std::io::Read as _;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// CLI tool for the email tracking transform.
#[derive(Parser)]
#[command(name = "trackctl")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate tracked HTML for one recipient
    Generate {
        /// Recipient email address
        #[arg(short, long)]
        to: String,

        /// Body file (reads stdin when omitted)
        #[arg(short, long)]
        body: Option<PathBuf>,

        /// Signature HTML file, appended verbatim (never link-wrapped)
        #[arg(short, long)]
        signature: Option<PathBuf>,

        /// Value for {{name}} placeholders
        #[arg(long)]
        name: Option<String>,

        /// Value for {{company}} placeholders
        #[arg(long)]
        company: Option<String>,

        /// Print the full result as JSON instead of a summary
        #[arg(long)]
        json: bool,
    },

    /// Count trackable links in a body
    Count {
        /// Body file (reads stdin when omitted)
        body: Option<PathBuf>,
    },

    /// List trackable links in a body
    Links {
        /// Body file (reads stdin when omitted)
        body: Option<PathBuf>,
    },

    /// Configuration operations
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Configuration subcommands.
#[derive(Subcommand)]
enum ConfigAction {
    /// Load and validate tracking configuration from the environment
    Check,
}

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            to,
            body,
            signature,
            name,
            company,
            json,
        } => generate(to, body, signature, name, company, json),
        Commands::Count { body } => {
            let text = read_body(body)?;
            println!("{}", scanner::count_links(&text));
            Ok(())
        }
        Commands::Links { body } => list_links(body),
        Commands::Config { action } => match action {
            ConfigAction::Check => config_check(),
        },
    }
}

/// Reads the email body from a file, or stdin when no path is given.
fn read_body(path: Option<PathBuf>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(&path)
            .with_context(|| format!("Failed to read body file '{}'", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read body from stdin")?;
            Ok(text)
        }
    }
}

fn generate(
    to: String,
    body: Option<PathBuf>,
    signature: Option<PathBuf>,
    name: Option<String>,
    company: Option<String>,
    json: bool,
) -> Result<()> {
    let config = config::load_from_env()?;
    config.print_summary();

    let body = read_body(body)?;

    if let Err(err) = validate_send_input(&to, &body) {
        if json {
            eprintln!("{}", err.to_json());
        } else {
            eprintln!("{} {}", "✗".red().bold(), err);
        }
        std::process::exit(2);
    }

    let signature_html = signature
        .map(|path| {
            fs::read_to_string(&path)
                .with_context(|| format!("Failed to read signature file '{}'", path.display()))
        })
        .transpose()?;

    let mut request = TrackingRequest::new(body, to);
    request.recipient_name = name;
    request.recipient_company = company;
    request.signature_html = signature_html;

    let result = TrackingTransform::new(config).generate(&request);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{} tracking id: {}", "✓".green().bold(), result.tracking_id);
        println!("  tracked links: {}", result.link_count);
        println!();
        println!("{}", result.tracked_html);
    }

    Ok(())
}

fn list_links(body: Option<PathBuf>) -> Result<()> {
    let text = read_body(body)?;
    let links = scanner::extract_links(&text);

    if links.is_empty() {
        println!("{}", "No trackable links found".yellow());
        return Ok(());
    }

    for (i, link) in links.iter().enumerate() {
        println!("{:>3}. {}", i + 1, link);
    }
    println!();
    println!("{} {} trackable link(s)", "✓".green().bold(), links.len());

    Ok(())
}

fn config_check() -> Result<()> {
    match config::load_from_env() {
        Ok(config) => {
            println!("{} tracking configuration is valid", "✓".green().bold());
            println!("  open collector:  {}", config.open_base_url);
            println!("  click collector: {}", config.click_base_url);
            Ok(())
        }
        Err(err) => {
            eprintln!("{} {:#}", "✗".red().bold(), err);
            std::process::exit(1);
        }
    }
}
