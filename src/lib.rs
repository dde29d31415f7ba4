pub mod core;
pub mod session;

pub use crate::core::db::{Hours, NewProject, Project, ProjectDb, ProjectRepository};
pub use crate::core::{ProjectError, ProjectResult};
pub use session::{InputCollector, Session};

/// Install the tracing subscriber. Output goes to stderr so it never
/// interleaves with the prompts on stdout.
pub fn init_logging(level: &str) -> anyhow::Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("projects={}", level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()?;

    Ok(())
}

/// Combine the session outcome with the result of closing the database.
/// A session failure wins; a close failure is attached to it as context.
pub fn finish_session(session: anyhow::Result<()>, closed: anyhow::Result<()>) -> anyhow::Result<()> {
    match (session, closed) {
        (Err(e), Err(close_err)) => {
            Err(e.context(format!("Failed to close database afterwards: {:#}", close_err)))
        }
        (Err(e), Ok(())) => Err(e),
        (Ok(()), closed) => closed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_error_survives_close_failure() {
        let result = finish_session(
            Err(anyhow::anyhow!("Terminal I/O failed")),
            Err(anyhow::anyhow!("database is locked")),
        );
        let msg = format!("{:#}", result.unwrap_err());
        assert!(msg.contains("Terminal I/O failed"), "got {}", msg);
        assert!(msg.contains("database is locked"), "got {}", msg);
    }

    #[test]
    fn test_close_failure_reported_after_clean_session() {
        let result = finish_session(Ok(()), Err(anyhow::anyhow!("database is locked")));
        assert_eq!(result.unwrap_err().to_string(), "database is locked");
        assert!(finish_session(Ok(()), Ok(())).is_ok());
    }
}
