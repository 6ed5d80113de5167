//! CLI administration tool for bookclub-picker.
//!
//! Provides commands for managing clubs, semesters, and invite links, and
//! for basic database checks, without requiring HTTP API access.
//!
//! # Usage
//!
//! ```bash
//! # Create a club
//! cargo run --bin admin -- club create --name "Wednesday Humanities" --slug wed-club
//!
//! # List clubs
//! cargo run --bin admin -- club list
//!
//! # Open a semester
//! cargo run --bin admin -- semester create --club wed-club --title "2025 Fall" --start-date 2025-09-01
//!
//! # Mint an invite link
//! cargo run --bin admin -- invite create --club wed-club --note "autumn recruits"
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string
//! - `BASE_URL` (optional): base for generated share links
//!   (default: `http://localhost:3000/`)

use bookclub_picker::application::services::AdminService;
use bookclub_picker::infrastructure::persistence::{
    PgClubRepository, PgInviteRepository, PgSemesterRepository,
};
use bookclub_picker::utils::share_link::build_share_link;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

type Admin = AdminService<PgClubRepository, PgSemesterRepository, PgInviteRepository>;

/// CLI tool for managing bookclub-picker.
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
    /// Manage clubs
    Club {
        #[command(subcommand)]
        action: ClubAction,
    },

    /// Manage semesters
    Semester {
        #[command(subcommand)]
        action: SemesterAction,
    },

    /// Manage invite links
    Invite {
        #[command(subcommand)]
        action: InviteAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Club management subcommands.
#[derive(Subcommand)]
enum ClubAction {
    /// Create a new club
    Create {
        /// Club name (e.g., "Wednesday Humanities")
        #[arg(short, long)]
        name: Option<String>,

        /// URL-safe slug used in share links (e.g., "wed-club")
        #[arg(short, long)]
        slug: Option<String>,
    },

    /// List all clubs
    List,
}

/// Semester management subcommands.
#[derive(Subcommand)]
enum SemesterAction {
    /// Open a new semester for a club
    Create {
        /// Club slug
        #[arg(short, long)]
        club: String,

        /// Semester title (e.g., "2025 Fall")
        #[arg(short, long)]
        title: Option<String>,

        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        start_date: Option<NaiveDate>,

        /// End date (YYYY-MM-DD)
        #[arg(long)]
        end_date: Option<NaiveDate>,
    },

    /// List a club's semesters
    List {
        /// Club slug
        #[arg(short, long)]
        club: String,
    },
}

/// Invite management subcommands.
#[derive(Subcommand)]
enum InviteAction {
    /// Mint an invite code and print its share link
    Create {
        /// Club slug
        #[arg(short, long)]
        club: String,

        /// Optional note (e.g., "autumn recruits")
        #[arg(short, long)]
        note: Option<String>,

        /// Pin the link to one semester id
        #[arg(long)]
        semester: Option<Uuid>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List a club's invites
    List {
        /// Club slug
        #[arg(short, long)]
        club: String,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show row counts per table
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Club { action } => handle_club_action(action, &pool).await?,
        Commands::Semester { action } => handle_semester_action(action, &pool).await?,
        Commands::Invite { action } => handle_invite_action(action, &pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

fn admin_service(pool: &PgPool) -> Admin {
    let pool = Arc::new(pool.clone());
    AdminService::new(
        Arc::new(PgClubRepository::new(pool.clone())),
        Arc::new(PgSemesterRepository::new(pool.clone())),
        Arc::new(PgInviteRepository::new(pool)),
    )
}

/// Dispatches club management commands.
async fn handle_club_action(action: ClubAction, pool: &PgPool) -> Result<()> {
    let admin = admin_service(pool);

    match action {
        ClubAction::Create { name, slug } => {
            let name = match name {
                Some(n) => n,
                None => Input::new().with_prompt("Club name").interact_text()?,
            };
            let slug = match slug {
                Some(s) => s,
                None => Input::new().with_prompt("Club slug").interact_text()?,
            };

            let club = admin.create_club(&name, &slug).await?;

            println!("{} {}", "Club created:".green().bold(), club.name);
            println!("  slug: {}", club.slug.cyan());
            println!("  id:   {}", club.id);
        }
        ClubAction::List => {
            let clubs = admin.list_clubs().await?;

            if clubs.is_empty() {
                println!("{}", "No clubs yet.".yellow());
                return Ok(());
            }

            for club in clubs {
                println!("{}  {} ({})", club.id, club.name.bold(), club.slug.cyan());
            }
        }
    }

    Ok(())
}

/// Dispatches semester management commands.
async fn handle_semester_action(action: SemesterAction, pool: &PgPool) -> Result<()> {
    let admin = admin_service(pool);

    match action {
        SemesterAction::Create {
            club,
            title,
            start_date,
            end_date,
        } => {
            let title = match title {
                Some(t) => t,
                None => Input::new().with_prompt("Semester title").interact_text()?,
            };

            let semester = admin
                .create_semester(&club, &title, start_date, end_date)
                .await?;

            println!("{} {}", "Semester created:".green().bold(), semester.title);
            println!("  id:    {}", semester.id);
            if let Some(start) = semester.start_date {
                println!("  start: {start}");
            }
        }
        SemesterAction::List { club } => {
            let semesters = admin.list_semesters(&club).await?;

            if semesters.is_empty() {
                println!("{}", "No semesters yet.".yellow());
                return Ok(());
            }

            for semester in semesters {
                let dates = match (semester.start_date, semester.end_date) {
                    (Some(s), Some(e)) => format!("{s} – {e}"),
                    (Some(s), None) => format!("from {s}"),
                    _ => "no dates".to_string(),
                };
                println!("{}  {} ({})", semester.id, semester.title.bold(), dates);
            }
        }
    }

    Ok(())
}

/// Dispatches invite management commands.
async fn handle_invite_action(action: InviteAction, pool: &PgPool) -> Result<()> {
    let admin = admin_service(pool);
    let base_url =
        std::env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:3000/".to_string());

    match action {
        InviteAction::Create {
            club,
            note,
            semester,
            yes,
        } => {
            if !yes {
                let proceed = Confirm::new()
                    .with_prompt(format!("Mint an invite link for '{club}'?"))
                    .default(true)
                    .interact()?;

                if !proceed {
                    println!("{}", "Cancelled.".yellow());
                    return Ok(());
                }
            }

            let (club, invite) = admin.create_invite(&club, note).await?;
            let share_url = build_share_link(&base_url, &club.slug, &invite.code, semester)?;

            println!("{} {}", "Invite created:".green().bold(), invite.code);
            if let Some(note) = &invite.note {
                println!("  note: {note}");
            }
            println!("  share link: {}", share_url.cyan().underline());
        }
        InviteAction::List { club } => {
            let invites = admin.list_invites(&club).await?;

            if invites.is_empty() {
                println!("{}", "No invites yet.".yellow());
                return Ok(());
            }

            for invite in invites {
                let note = invite.note.as_deref().unwrap_or("-");
                println!("{}  {}  {}", invite.id, invite.code.cyan(), note);
            }
        }
    }

    Ok(())
}

/// Dispatches database commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            sqlx::query_scalar::<_, i32>("SELECT 1")
                .fetch_one(pool)
                .await
                .context("Database check failed")?;

            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Info => {
            for table in ["clubs", "semesters", "invites", "books", "votes"] {
                let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
                    .fetch_one(pool)
                    .await?;
                println!("{:<10} {count}", table.bold());
            }
        }
    }

    Ok(())
}
