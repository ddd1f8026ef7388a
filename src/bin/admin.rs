//! CLI administration tool for short-url.
//!
//! Runs mapping operations and database maintenance directly against
//! PostgreSQL, without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Create (or look up) a mapping
//! cargo run --bin admin -- shorten https://www.freecodecamp.org
//!
//! # Same, without the DNS check
//! cargo run --bin admin -- shorten https://internal.example.com --skip-dns
//!
//! # Look up where an identifier points
//! cargo run --bin admin -- resolve 1
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection / apply migrations
//! cargo run --bin admin -- db check
//! cargo run --bin admin -- db migrate
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` or `DB_*` components (required)
//! - `DNS_TIMEOUT_MS` (optional, default 5000)

use short_url::application::services::MappingService;
use short_url::config::{Config, mask_connection_string};
use short_url::domain::entities::Mapping;
use short_url::domain::repositories::MappingRepository;
use short_url::error::{CreateError, ResolveError};
use short_url::infrastructure::dns::{HostResolver, NoopResolver, SystemResolver};
use short_url::infrastructure::persistence::PgMappingRepository;
use short_url::server;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;

/// CLI tool for managing short-url.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Create a mapping for a URL, or show the existing one
    Shorten {
        /// The original URL
        url: String,

        /// Skip the DNS reachability check
        #[arg(long)]
        skip_dns: bool,
    },

    /// Show the original URL behind an identifier
    Resolve {
        /// The short identifier
        id: String,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Apply pending migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = Config::load_database_url()?;
    let pool = PgPool::connect(&database_url)
        .await
        .with_context(|| format!("Failed to connect to {}", mask_connection_string(&database_url)))?;

    match cli.command {
        Commands::Shorten { url, skip_dns } => shorten(&pool, &url, skip_dns).await?,
        Commands::Resolve { id } => resolve(&pool, &id).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

fn mapping_service(pool: &PgPool, skip_dns: bool) -> MappingService {
    let repository: Arc<dyn MappingRepository> =
        Arc::new(PgMappingRepository::new(Arc::new(pool.clone())));

    let resolver: Arc<dyn HostResolver> = if skip_dns {
        Arc::new(NoopResolver::new())
    } else {
        let timeout_ms = std::env::var("DNS_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5000);
        Arc::new(SystemResolver::new(Duration::from_millis(timeout_ms)))
    };

    MappingService::new(repository, resolver)
}

/// Creates or reuses a mapping and prints it.
async fn shorten(pool: &PgPool, url: &str, skip_dns: bool) -> Result<()> {
    let service = mapping_service(pool, skip_dns);
    report_created(service.create_or_get(url).await)
}

/// Prints the outcome of a creation. Rejections are returned as errors so
/// the process exits non-zero.
fn report_created(result: std::result::Result<Mapping, CreateError>) -> Result<()> {
    match result {
        Ok(mapping) => {
            println!("{}", "Mapping ready".green().bold());
            println!("  {} {}", "Short URL:".bold(), mapping.short_id.to_string().cyan());
            println!("  {} {}", "Original: ".bold(), mapping.original_url);
            println!(
                "  {} {}",
                "Created:  ".bold(),
                mapping.created_at.format("%Y-%m-%d %H:%M:%S UTC")
            );
        }
        Err(CreateError::Malformed) => {
            println!("{} {}", "✗".red(), "URL does not match the accepted pattern".red());
            anyhow::bail!("invalid url");
        }
        Err(CreateError::Unreachable { host, source }) => {
            println!("{} Host {} is unreachable: {}", "✗".red(), host.yellow(), source);
            anyhow::bail!("invalid url");
        }
        Err(CreateError::Storage(e)) => return Err(e).context("Failed to store mapping"),
    }

    Ok(())
}

/// Prints the original URL behind an identifier.
async fn resolve(pool: &PgPool, id: &str) -> Result<()> {
    let service = mapping_service(pool, true);
    report_resolved(service.resolve_identifier(id).await)
}

fn report_resolved(result: std::result::Result<Mapping, ResolveError>) -> Result<()> {
    match result {
        Ok(mapping) => {
            println!("{} → {}", mapping.short_id.to_string().cyan(), mapping.original_url);
        }
        Err(ResolveError::NotFound(short_id)) => {
            println!("{} No mapping for {}", "✗".red(), short_id.to_string().yellow());
            anyhow::bail!("invalid url");
        }
        Err(ResolveError::BadIdentifier(raw)) => {
            println!("{} '{}' is not a valid identifier", "✗".red(), raw.yellow());
            anyhow::bail!("invalid url");
        }
        Err(ResolveError::Storage(e)) => return Err(e).context("Failed to look up mapping"),
    }

    Ok(())
}

/// Displays mapping statistics.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "Statistics".green().bold());
    println!();

    let total = mapping_service(pool, true).count().await?;
    println!("{} {}", "Total mappings:".bold(), total.to_string().cyan());

    Ok(())
}

/// Dispatches database commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            sqlx::query("SELECT 1").execute(pool).await?;
            println!("{} {}", "✓".green(), "Database connection OK".green());
        }
        DbAction::Migrate => {
            server::migrate(pool).await?;
            println!("{} {}", "✓".green(), "Migrations applied".green());
        }
    }

    Ok(())
}
