use clap::Parser;
use std::path::PathBuf;

use projects::{ProjectDb, Session, finish_session, init_logging};

#[derive(Parser)]
#[command(name = "projects")]
#[command(about = "Track hobby projects interactively")]
struct Cli {
    /// SQLite database file (created if missing)
    #[arg(long, value_name = "FILE", default_value = "projects.db")]
    database: PathBuf,

    /// Log level written to stderr (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Shorthand for --log-level debug
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let level = if args.verbose { "debug" } else { args.log_level.as_str() };
    init_logging(level)?;

    let db = ProjectDb::new(&args.database).await?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = Session::new(db.clone(), stdin.lock(), stdout.lock());
    let result = session.run().await;

    // Checkpoint and close on every exit path, including terminal failures.
    let closed = db.close().await;
    finish_session(result, closed)
}
