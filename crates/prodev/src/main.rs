//! # prodev
//!
//! CLI binary wiring the prodev crates together: database seeding and
//! inspection on one side, GitHub organization lookups on the other.

#![deny(unsafe_code)]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use prodev_core::retry::RetryConfig;
use prodev_github::{DEFAULT_BASE_URL, GithubOrgClient};
use prodev_store::schema::DEFAULT_DB_FILENAME;
use prodev_store::{Database, seed, stream};

/// prodev command line interface.
#[derive(Parser, Debug)]
#[command(name = "prodev", about = "User-data seeding and GitHub org lookups")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create the schema and load users from a CSV file.
    Seed {
        /// Path to a CSV file with header `user_id,name,email,age`.
        csv: PathBuf,
        /// Database file path.
        #[arg(long, env = "PRODEV_DB", default_value = DEFAULT_DB_FILENAME)]
        db: PathBuf,
    },
    /// Check that the table exists and report the row count.
    Validate {
        /// Database file path.
        #[arg(long, env = "PRODEV_DB", default_value = DEFAULT_DB_FILENAME)]
        db: PathBuf,
    },
    /// Print a few stored rows.
    Sample {
        /// Database file path.
        #[arg(long, env = "PRODEV_DB", default_value = DEFAULT_DB_FILENAME)]
        db: PathBuf,
        /// Maximum rows to print.
        #[arg(long, default_value_t = 5)]
        limit: usize,
    },
    /// Streaming statistics over the stored users.
    Stats {
        /// Database file path.
        #[arg(long, env = "PRODEV_DB", default_value = DEFAULT_DB_FILENAME)]
        db: PathBuf,
    },
    /// Fetch a GitHub organization payload.
    Org {
        /// Organization name, e.g. `google`.
        name: String,
        /// GitHub API base URL.
        #[arg(long, env = "PRODEV_GITHUB_URL", default_value = DEFAULT_BASE_URL)]
        api_url: String,
    },
    /// List an organization's public repositories.
    Repos {
        /// Organization name, e.g. `google`.
        name: String,
        /// Only repositories with this license key, e.g. `apache-2.0`.
        #[arg(long)]
        license: Option<String>,
        /// GitHub API base URL.
        #[arg(long, env = "PRODEV_GITHUB_URL", default_value = DEFAULT_BASE_URL)]
        api_url: String,
    },
}

fn open_db(path: &PathBuf) -> Result<Database> {
    Database::open_with_retry(path, &RetryConfig::default())
        .with_context(|| format!("failed to open database at {}", path.display()))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Seed { csv, db } => {
            let db = open_db(&db)?;
            tracing::info!(csv = %csv.display(), "seeding user_data");
            let report = seed::seed_from_csv(&db, &csv)
                .with_context(|| format!("failed to seed from {}", csv.display()))?;
            println!(
                "seeded {} of {} rows ({} duplicates, {} invalid)",
                report.inserted, report.total_rows, report.duplicates, report.invalid
            );
        }
        Command::Validate { db } => {
            let db = open_db(&db)?;
            let status = seed::validate_setup(&db)?;
            if status.table_exists {
                println!("user_data table present, {} rows", status.row_count);
            } else {
                println!("user_data table missing");
                std::process::exit(1);
            }
        }
        Command::Sample { db, limit } => {
            let db = open_db(&db)?;
            for user in seed::sample(&db, limit)? {
                println!("{}  {}  {}  {}", user.user_id, user.name, user.email, user.age);
            }
        }
        Command::Stats { db } => {
            let db = open_db(&db)?;
            let count = seed::count_users(&db)?;
            match stream::average_age(&db)? {
                Some(avg) => println!("{count} users, average age {avg:.2}"),
                None => println!("no users stored"),
            }
        }
        Command::Org { name, api_url } => {
            let client = GithubOrgClient::with_base_url(&name, api_url);
            let org = client
                .org()
                .await
                .with_context(|| format!("failed to fetch org {name}"))?;
            println!("{}", serde_json::to_string_pretty(org)?);
        }
        Command::Repos {
            name,
            license,
            api_url,
        } => {
            let client = GithubOrgClient::with_base_url(&name, api_url);
            let repos = client
                .public_repos(license.as_deref())
                .await
                .with_context(|| format!("failed to list repos for {name}"))?;
            for repo in repos {
                println!("{repo}");
            }
        }
    }

    Ok(())
}
