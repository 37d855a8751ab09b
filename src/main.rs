//! Command-line front end for the shortening service.
//!
//! # Usage
//!
//! ```bash
//! # Shorten one URL and copy the result
//! shorten url https://example.com/some/long/path --copy
//!
//! # Prompt for URLs until an empty line
//! shorten
//! shorten interactive
//!
//! # Show the loaded configuration
//! shorten config
//! ```
//!
//! # Environment Variables
//!
//! - `SHORTENER_API_URL` (required unless `--api-url` is given): service base URL
//!
//! See [`url_shortener_client::config`] for the optional ones.

use url_shortener_client::app::{self, AppForm};
use url_shortener_client::config::{self, Config};
use url_shortener_client::ui;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use std::process::ExitCode;

/// Shorten URLs from the terminal.
#[derive(Parser)]
#[command(name = "shorten")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Shortening service base URL (overrides SHORTENER_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Shorten a single URL
    Url {
        /// URL to shorten, sent as typed
        url: String,

        /// Copy the short URL to the clipboard. On Linux the copied text
        /// disappears when this command exits unless a clipboard manager
        /// keeps it; use `shorten interactive` there instead.
        #[arg(short, long)]
        copy: bool,
    },

    /// Prompt for URLs until an empty line is entered (default)
    Interactive,

    /// Show the loaded configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env(cli.api_url).context("Invalid configuration")?;
    app::init_tracing(&config);
    config.print_summary();

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Url { url, copy } => shorten_once(&config, url, copy).await,
        Commands::Interactive => interactive(&config).await,
        Commands::Config => {
            show_config(&config);
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Submits one URL and prints the form.
///
/// Exits with status 1 when the URL was not shortened.
async fn shorten_once(config: &Config, url: String, copy: bool) -> Result<ExitCode> {
    let form = app::build_form(config)?;
    form.set_input(url);

    let result = form.submit().await;
    if copy && result.is_shortened() {
        form.copy().await;
    }

    print!("{}", ui::render(&form.view()));

    if result.is_shortened() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

/// Prompt loop.
///
/// # Flow
///
/// 1. Prompt for a URL (empty input exits)
/// 2. Submit and show the result
/// 3. Offer to copy whatever the result area shows
async fn interactive(config: &Config) -> Result<ExitCode> {
    let form = app::build_form(config)?;

    println!("{}", "🔗 URL Shortener".bright_blue().bold());
    println!("{}", "  Press Enter on an empty line to quit.".bright_black());
    println!();

    loop {
        let input: String = Input::new()
            .with_prompt("Enter your URL")
            .allow_empty(true)
            .interact_text()?;

        if input.is_empty() {
            break;
        }

        form.set_input(input);
        form.submit().await;

        println!();
        print!("{}", ui::render(&form.view()));
        println!();

        offer_copy(&form).await?;
    }

    println!("{}", "👋 Bye".bright_black());
    Ok(ExitCode::SUCCESS)
}

async fn offer_copy(form: &AppForm) -> Result<()> {
    if form.view().copy_control.is_none() {
        return Ok(());
    }

    let confirmed = Confirm::new()
        .with_prompt("Copy to clipboard?")
        .default(true)
        .interact()?;

    if confirmed {
        if form.copy().await {
            print!("{}", ui::render(&form.view()));
        } else {
            println!("{}", "⚠️  Could not access the clipboard".yellow());
        }
        println!();
    }

    Ok(())
}

fn show_config(config: &Config) {
    println!("{}", "⚙️  Configuration".bright_blue().bold());
    println!();
    println!("  Service:        {}", config.masked_api_base_url().cyan());
    println!(
        "  Endpoint:       {}",
        format!("{}/shorten", config.masked_api_base_url().trim_end_matches('/')).cyan()
    );
    println!("  URL validation: {}", config.url_validation.to_string().cyan());
    println!("  Log level:      {}", config.log_level.bright_black());
    println!("  Log format:     {}", config.log_format.bright_black());
    println!();
}
