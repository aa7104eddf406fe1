//! CLI administration tool for urlshort.
//!
//! Manages path mappings directly against the store, without going through
//! the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Create the table if it does not exist
//! cargo run --bin admin -- db init
//!
//! # Add a mapping (fails if the path exists)
//! cargo run --bin admin -- mapping add docs https://example.com/docs
//!
//! # Add or overwrite a mapping
//! cargo run --bin admin -- mapping set docs https://example.com/v2/docs
//!
//! # List, inspect and remove
//! cargo run --bin admin -- mapping list
//! cargo run --bin admin -- mapping get docs
//! cargo run --bin admin -- mapping remove docs
//!
//! # Row count
//! cargo run --bin admin -- stats
//! ```
//!
//! # Environment Variables
//!
//! Reads the same database settings as the server (`DATABASE_URL` or
//! `DB_*`); see `urlshort::config`.

use urlshort::application::services::MappingService;
use urlshort::config;
use urlshort::domain::entities::PathMapping;
use urlshort::domain::repositories::PathMappingRepository;
use urlshort::infrastructure::persistence::SqlPathMappingRepository;
use urlshort::utils::path_key::normalize_path_key;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use std::sync::Arc;

type Service = MappingService<SqlPathMappingRepository>;

/// CLI tool for managing urlshort.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage path mappings
    Mapping {
        #[command(subcommand)]
        action: MappingAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Mapping management subcommands.
#[derive(Subcommand)]
enum MappingAction {
    /// List all mappings
    List,

    /// Show the URL stored for a path
    Get { path: String },

    /// Add a new mapping; fails if the path already exists
    Add { path: String, url: String },

    /// Add a mapping or overwrite the URL of an existing one
    Set { path: String, url: String },

    /// Remove a mapping
    Remove {
        path: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Create the mapping table if missing
    Init,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let repository = SqlPathMappingRepository::connect(&config.store_options())
        .await
        .context("Failed to connect to database")?;
    let repository = Arc::new(repository);
    let service = MappingService::new(repository.clone());

    let result = match cli.command {
        Commands::Mapping { action } => handle_mapping_action(action, &service).await,
        Commands::Stats => handle_stats(&service).await,
        Commands::Db { action } => handle_db_action(action, &repository).await,
    };

    repository.close().await;
    result
}

/// Dispatches mapping management commands.
async fn handle_mapping_action(action: MappingAction, service: &Service) -> Result<()> {
    match action {
        MappingAction::List => list_mappings(service).await,
        MappingAction::Get { path } => get_mapping(service, &path).await,
        MappingAction::Add { path, url } => add_mapping(service, &path, url).await,
        MappingAction::Set { path, url } => {
            let mapping = PathMapping::new(normalize_path_key(&path)?, url);
            let key = mapping.path.clone();

            service
                .update(mapping)
                .await
                .context("Failed to update mapping")?;

            println!("{} {}", "✅ Saved".green().bold(), key.cyan());
            Ok(())
        }
        MappingAction::Remove { path, yes } => remove_mapping(service, &path, yes).await,
    }
}

/// Inserts a new mapping. An existing path is an error, so scripts can tell
/// from the exit status that nothing was written.
async fn add_mapping(service: &Service, path: &str, url: String) -> Result<()> {
    let key = normalize_path_key(path)?;

    match service.create(PathMapping::new(key.clone(), url)).await {
        Ok(()) => {
            println!("{} {}", "✅ Created".green().bold(), key.cyan());
            Ok(())
        }
        Err(e) if e.is_duplicate_key() => {
            println!(
                "{} {} already exists (use {} to overwrite)",
                "❌".red(),
                key.cyan(),
                "mapping set".bright_cyan()
            );
            anyhow::bail!("Path '{}' already exists", key)
        }
        Err(e) => Err(e).context("Failed to create mapping"),
    }
}

/// Lists every mapping.
///
/// # Output Format
///
/// ```text
/// 📋 Path Mappings
///
///   Path                 URL
///   ─────────────────────────────────────────────
///   docs                 https://example.com/docs
/// ```
async fn list_mappings(service: &Service) -> Result<()> {
    println!("{}", "📋 Path Mappings".bright_blue().bold());
    println!();

    let mappings = service.list().await.context("Failed to list mappings")?;

    if mappings.is_empty() {
        println!("{}", "  No mappings found".yellow());
        println!();
        println!(
            "  Create one with: {} admin -- mapping add <path> <url>",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<20} {}",
        "Path".bright_white().bold(),
        "URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for mapping in &mappings {
        println!("  {:<20} {}", mapping.path.cyan(), mapping.url);
    }

    println!();
    println!(
        "  Total: {}",
        mappings.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

async fn get_mapping(service: &Service, path: &str) -> Result<()> {
    let key = normalize_path_key(path)?;

    match service.resolve(&key).await.context("Failed to look up path")? {
        Some(mapping) => println!("{} → {}", mapping.path.cyan(), mapping.url.bright_white()),
        None => println!("{} {}", "No mapping for".yellow(), key.cyan()),
    }

    Ok(())
}

/// Removes a mapping after confirmation.
async fn remove_mapping(service: &Service, path: &str, skip_confirm: bool) -> Result<()> {
    let key = normalize_path_key(path)?;

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt(format!("Remove mapping '{}'?", key))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let existed = service
        .delete(&key)
        .await
        .context("Failed to remove mapping")?;

    if existed {
        println!("{} {}", "✅ Removed".green().bold(), key.cyan());
    } else {
        println!("{} {}", "ℹ️  Nothing stored for".yellow(), key.cyan());
    }

    Ok(())
}

/// Shows the number of stored mappings.
async fn handle_stats(service: &Service) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let count = service.count().await.context("Failed to count mappings")?;

    println!(
        "  Mappings: {}",
        count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, repository: &SqlPathMappingRepository) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            repository.ping().await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Init => {
            println!("{}", "🛠  Initializing database...".bright_blue());

            repository.initialize().await?;

            println!("{}", "✅ url_table ready".green().bold());
        }
    }

    Ok(())
}
