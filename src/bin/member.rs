//! CLI member client for bookclub-picker.
//!
//! Opens a secret share link from the terminal: derives the device's voter
//! token, shows the current ballot board, suggests books, toggles votes,
//! and browses past semesters.
//!
//! # Usage
//!
//! ```bash
//! # See the current semester's board
//! cargo run --bin member -- --link "http://localhost:3000/?club=wed-club&invite=x7kq2m9f" show
//!
//! # Suggest a book
//! cargo run --bin member -- --club wed-club --invite x7kq2m9f suggest \
//!     --title "The Dispossessed" --author "Ursula K. Le Guin"
//!
//! # Toggle a vote
//! cargo run --bin member -- --club wed-club --invite x7kq2m9f vote <book-id>
//!
//! # Past semesters
//! cargo run --bin member -- --club wed-club --invite x7kq2m9f history
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string
//! - `VOTER_TOKEN_FILE` (optional): where this device keeps its voter
//!   tokens (default: `.voter_tokens.json`). Each link context gets its own
//!   stable token; deleting the file yields fresh, unlinked identities.

use bookclub_picker::application::services::{
    BallotBoard, HistoryService, LinkParams, SessionService, VotingService,
};
use bookclub_picker::domain::entities::BookDraft;
use bookclub_picker::error::AppError;
use bookclub_picker::identity::{FileTokenStore, LinkContext, VoterIdentity};
use bookclub_picker::infrastructure::persistence::{
    PgBookRepository, PgClubRepository, PgSemesterRepository, PgVoteRepository,
};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

type Session = SessionService<PgClubRepository, PgSemesterRepository>;
type Voting = VotingService<PgBookRepository, PgVoteRepository>;
type History = HistoryService<PgSemesterRepository, PgBookRepository, PgVoteRepository>;

/// Member client for a shared secret link.
#[derive(Parser)]
#[command(name = "member")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Full share link; alternative to the individual flags below
    #[arg(long)]
    link: Option<String>,

    /// Club slug from the share link
    #[arg(long)]
    club: Option<String>,

    /// Invite code from the share link
    #[arg(long)]
    invite: Option<String>,

    /// Semester id from the share link
    #[arg(long)]
    semester: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Member actions.
#[derive(Subcommand)]
enum Commands {
    /// Show the current board: books ranked by votes, your ballot marked
    Show,

    /// Suggest a book for the current semester
    Suggest {
        /// Book title (required)
        #[arg(short, long)]
        title: String,

        /// Author
        #[arg(short, long)]
        author: Option<String>,

        /// ISBN
        #[arg(long)]
        isbn: Option<String>,

        /// Link to more information
        #[arg(long)]
        info_url: Option<String>,

        /// Cover image URL
        #[arg(long)]
        cover_url: Option<String>,

        /// Your name or nickname
        #[arg(long)]
        by: Option<String>,
    },

    /// Toggle your vote on a book
    Vote {
        /// Book id as shown by `show`
        book_id: Uuid,
    },

    /// Show past semesters, each tallied independently
    History,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let ctx = match &cli.link {
        Some(link) => LinkContext::from_share_url(link)?,
        None => LinkContext::new(
            cli.club.as_deref(),
            cli.invite.as_deref(),
            cli.semester.as_deref(),
        ),
    };

    if ctx.club.is_empty() {
        bail!("A share link is required: pass --link or --club/--invite");
    }

    let token_file =
        std::env::var("VOTER_TOKEN_FILE").unwrap_or_else(|_| ".voter_tokens.json".to_string());
    let identity = VoterIdentity::new(FileTokenStore::new(token_file));
    let voter_token = identity.voter_token(&ctx)?;

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let pool = Arc::new(
        PgPool::connect(&database_url)
            .await
            .context("Failed to connect to database")?,
    );

    let session = Session::new(
        Arc::new(PgClubRepository::new(pool.clone())),
        Arc::new(PgSemesterRepository::new(pool.clone())),
    );
    let voting = Voting::new(
        Arc::new(PgBookRepository::new(pool.clone())),
        Arc::new(PgVoteRepository::new(pool.clone())),
    );

    match cli.command {
        Commands::Show => {
            let board = load_board(&session, &voting, &ctx).await?;
            print_board(&board, &voter_token);
        }
        Commands::Suggest {
            title,
            author,
            isbn,
            info_url,
            cover_url,
            by,
        } => {
            let board = load_board(&session, &voting, &ctx).await?;
            let draft = BookDraft {
                title,
                author,
                isbn,
                info_url,
                cover_url,
                suggested_by: by,
            };

            let book = voting
                .suggest(draft.into_new_book(board.club.id, board.semester.id))
                .await?;

            println!("{} {}", "Suggested:".green().bold(), book.title);
            println!("  id: {}", book.id);
        }
        Commands::Vote { book_id } => {
            let board = load_board(&session, &voting, &ctx).await?;

            match voting.toggle_vote(&board, book_id, &voter_token).await {
                Ok(board) => print_vote_result(&board, book_id, &voter_token),
                Err(AppError::Conflict { .. }) => {
                    // Lost a race against another toggle under the same
                    // token; drop the optimistic state and show the store's
                    // view.
                    let board = voting.refresh_votes(&board, book_id).await?;
                    println!(
                        "{}",
                        "Vote already recorded elsewhere; showing current state.".yellow()
                    );
                    print_vote_result(&board, book_id, &voter_token);
                }
                Err(e) => return Err(e.into()),
            }
        }
        Commands::History => {
            let Some(club) = session.find_club(&ctx.club).await? else {
                bail!("Unknown club '{}'", ctx.club);
            };

            let history = History::new(
                Arc::new(PgSemesterRepository::new(pool.clone())),
                Arc::new(PgBookRepository::new(pool.clone())),
                Arc::new(PgVoteRepository::new(pool.clone())),
            );

            let archives = history.history(&club).await?;

            if archives.is_empty() {
                println!("{}", "No semesters yet.".yellow());
                return Ok(());
            }

            println!("{}", club.name.bold());
            for archive in archives {
                println!("\n{}", archive.semester.title.bold().underline());
                if archive.books.is_empty() {
                    println!("  {}", "no books".dimmed());
                }
                for book in &archive.books {
                    let votes = archive.tally.get(&book.id).copied().unwrap_or(0);
                    println!("  {:>3}  {}", votes, book.title);
                }
            }
        }
    }

    Ok(())
}

/// Resolves the link and loads the board, or explains why it cannot.
async fn load_board(session: &Session, voting: &Voting, ctx: &LinkContext) -> Result<BallotBoard> {
    let params = LinkParams {
        club: non_empty(&ctx.club),
        invite: non_empty(&ctx.invite),
        semester: non_empty(&ctx.semester),
    };

    let resolved = session.resolve(&params).await?;

    match (resolved.club, resolved.semester) {
        (Some(club), Some(semester)) => Ok(voting.load_board(club, semester).await?),
        (Some(club), None) => bail!("Club '{}' has no open semester", club.slug),
        _ => bail!("This link does not open any club"),
    }
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() { None } else { Some(s.to_string()) }
}

fn print_board(board: &BallotBoard, voter_token: &str) {
    let tally = board.tally();
    let ballot = board.ballot(voter_token);

    println!(
        "{} — {}",
        board.club.name.bold(),
        board.semester.title.bold()
    );

    if board.books.is_empty() {
        println!("{}", "No books suggested yet.".yellow());
        return;
    }

    for book in board.ranked_books() {
        let votes = tally.get(&book.id).copied().unwrap_or(0);
        let mark = if ballot.contains(&book.id) {
            "✓".green().bold().to_string()
        } else {
            " ".to_string()
        };
        let author = book.author.as_deref().unwrap_or("unknown author");

        println!("{mark} {:>3}  {}  {}", votes, book.title.bold(), author.dimmed());
        println!("       id: {}", book.id.to_string().dimmed());
    }
}

fn print_vote_result(board: &BallotBoard, book_id: Uuid, voter_token: &str) {
    let votes = board.tally().get(&book_id).copied().unwrap_or(0);

    if board.ballot(voter_token).contains(&book_id) {
        println!("{} current count: {votes}", "Vote cast.".green().bold());
    } else {
        println!("{} current count: {votes}", "Vote retracted.".green().bold());
    }
}
