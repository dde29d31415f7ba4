/// Failures surfaced by input collection and the project store.
///
/// Everything except `Io` is recoverable: the session prints it and shows
/// the menu again.
#[derive(Debug, thiserror::Error)]
pub enum ProjectError {
    #[error("{0}")]
    Validation(String),
    #[error("Project with ID={0} does not exist.")]
    NotFound(i64),
    #[error("Storage failure: {0}")]
    Service(String),
    #[error("Terminal I/O failure: {0}")]
    Io(#[from] std::io::Error),
}

impl From<sqlx::Error> for ProjectError {
    fn from(e: sqlx::Error) -> Self {
        ProjectError::Service(e.to_string())
    }
}

impl ProjectError {
    /// Operator mistakes are already shown on the terminal; only store
    /// failures are worth a log line at the default level.
    pub fn is_storage_failure(&self) -> bool {
        matches!(self, ProjectError::Service(_))
    }
}

pub type ProjectResult<T> = Result<T, ProjectError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_service_errors_are_storage_failures() {
        assert!(ProjectError::Service("disk full".into()).is_storage_failure());
        assert!(!ProjectError::Validation("abc is not a valid number.".into()).is_storage_failure());
        assert!(!ProjectError::NotFound(7).is_storage_failure());
    }
}
