//! CLI administration tool for slashlink.
//!
//! Creates and inspects short links and performs database checks without
//! going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Create a short link with a generated code
//! cargo run --bin admin -- link create example.com/some/page
//!
//! # Create a short link with a custom code
//! cargo run --bin admin -- link create https://example.com --code promo
//!
//! # Show a short link
//! cargo run --bin admin -- link show promo
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string
//! - `BASE_URL` (optional): Public origin used when printing short URLs

use slashlink::application::services::{DEFAULT_CACHE_TTL_SECONDS, ShortLinkService};
use slashlink::domain::entities::{CreateShortLink, MAX_CODE_LENGTH, ShortLink};
use slashlink::domain::repositories::ShortLinkRepository;
use slashlink::domain::visitor_queue::VisitorQueue;
use slashlink::infrastructure::cache::{CacheService, NullCache};
use slashlink::infrastructure::persistence::PgShortLinkRepository;
use slashlink::utils::code_generator::is_valid_custom_code;
use slashlink::utils::url_normalizer::normalize_destination;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing slashlink.
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
    /// Manage short links
    Link {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Short link subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// Create a new short link
    Create {
        /// Destination URL (scheme optional, defaults to https)
        destination: String,

        /// Custom short code (generated if not provided)
        #[arg(short, long)]
        code: Option<String>,
    },

    /// Show a short link and its visitor count
    Show {
        /// Short code to look up
        code: String,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let base_url =
        std::env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:5000".to_string());

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Link { action } => handle_link_action(action, &pool, &base_url).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Builds a service without a cache; admin commands always hit the store.
fn build_service(pool: &PgPool) -> ShortLinkService {
    let repository: Arc<dyn ShortLinkRepository> =
        Arc::new(PgShortLinkRepository::new(Arc::new(pool.clone())));
    let cache: Arc<dyn CacheService> = Arc::new(NullCache::new());
    let visitor_queue = VisitorQueue::new(repository.clone());

    ShortLinkService::new(repository, cache, visitor_queue, DEFAULT_CACHE_TTL_SECONDS)
}

/// Dispatches short link commands.
async fn handle_link_action(action: LinkAction, pool: &PgPool, base_url: &str) -> Result<()> {
    let service = build_service(pool);

    match action {
        LinkAction::Create { destination, code } => {
            create_link(&service, destination, code, base_url).await?;
        }
        LinkAction::Show { code } => {
            show_link(&service, &code, base_url).await?;
        }
    }

    Ok(())
}

/// Normalizes the destination and creates the link.
async fn create_link(
    service: &ShortLinkService,
    destination: String,
    code: Option<String>,
    base_url: &str,
) -> Result<()> {
    println!("{}", "🔗 Create Short Link".bright_blue().bold());
    println!();

    let destination = normalize_destination(&destination)
        .map_err(|e| anyhow::anyhow!("Invalid destination: {}", e))?;

    let code = code.filter(|c| !c.is_empty());
    if let Some(code) = &code
        && !is_valid_custom_code(code)
    {
        anyhow::bail!(
            "Invalid code '{}': use 1 to {} characters of [A-Za-z0-9_-]",
            code,
            MAX_CODE_LENGTH
        );
    }

    let link = service
        .create_short_link(CreateShortLink { code, destination })
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create short link: {}", e))?;

    println!("{}", "✅ Short link created successfully!".green().bold());
    println!();
    print_link(&link, base_url);

    Ok(())
}

/// Prints a stored link, including its current visitor count.
async fn show_link(service: &ShortLinkService, code: &str, base_url: &str) -> Result<()> {
    let link = service
        .get_link_by_code(code)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    print_link(&link, base_url);

    Ok(())
}

fn print_link(link: &ShortLink, base_url: &str) {
    println!(
        "  Short URL:   {}",
        format!("{}/{}", base_url.trim_end_matches('/'), link.code)
            .bright_yellow()
            .bold()
    );
    println!("  Destination: {}", link.destination.cyan());
    println!(
        "  Visitors:    {}",
        link.visitors.to_string().bright_green().bold()
    );
    println!(
        "  Created:     {}",
        link.created_at
            .format("%Y-%m-%d %H:%M")
            .to_string()
            .bright_black()
    );
    println!();
}

/// Displays link and visitor totals.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let links_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM short_links")
        .fetch_one(pool)
        .await?;

    let visitors_total: i64 =
        sqlx::query_scalar("SELECT COALESCE(SUM(visitors), 0)::BIGINT FROM short_links")
            .fetch_one(pool)
            .await?;

    println!(
        "  Links:    {}",
        links_count.to_string().bright_green().bold()
    );
    println!(
        "  Visitors: {}",
        visitors_total.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}
