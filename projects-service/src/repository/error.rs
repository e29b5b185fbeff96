//! Repository error types
//!
//! Structured errors for Data Accessor calls. They never reach API clients
//! verbatim; the handler layer logs them and answers with a generic 500.

use std::fmt;

/// Operation being performed when the repository error occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepositoryOperation {
    /// Listing every project
    List,
    /// Finding a single project by ID
    FindById,
    /// Inserting a new project
    Insert,
    /// Applying a partial update
    Update,
    /// Deleting a project
    Delete,
}

impl fmt::Display for RepositoryOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List => write!(f, "list"),
            Self::FindById => write!(f, "find_by_id"),
            Self::Insert => write!(f, "insert"),
            Self::Update => write!(f, "update"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// Category of repository error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepositoryErrorKind {
    /// Database constraint violation
    ConstraintViolation,
    /// Failed to reach the database
    ConnectionFailed,
    /// Pool acquisition or statement timed out
    Timeout,
    /// Row could not be decoded
    Decode,
    /// Underlying database error
    DatabaseError,
}

impl fmt::Display for RepositoryErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConstraintViolation => write!(f, "constraint_violation"),
            Self::ConnectionFailed => write!(f, "connection_failed"),
            Self::Timeout => write!(f, "timeout"),
            Self::Decode => write!(f, "decode"),
            Self::DatabaseError => write!(f, "database_error"),
        }
    }
}

/// Structured repository error with operation context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryError {
    /// The operation being performed when the error occurred
    pub operation: RepositoryOperation,
    /// The category of error
    pub kind: RepositoryErrorKind,
    /// Human-readable error message
    pub message: String,
    /// The project involved, when known
    pub project_id: Option<i64>,
}

impl RepositoryError {
    /// Create a new repository error
    pub fn new(
        operation: RepositoryOperation,
        kind: RepositoryErrorKind,
        message: impl Into<String>,
    ) -> Self {
        Self {
            operation,
            kind,
            message: message.into(),
            project_id: None,
        }
    }

    /// Attach the project ID involved
    #[must_use]
    pub fn with_project_id(mut self, id: i64) -> Self {
        self.project_id = Some(id);
        self
    }

    /// Classify an sqlx error raised during `operation`
    pub fn from_sqlx(operation: RepositoryOperation, err: sqlx::Error) -> Self {
        use sqlx::Error as E;
        let kind = match &err {
            E::PoolTimedOut => RepositoryErrorKind::Timeout,
            E::PoolClosed | E::Io(_) | E::Tls(_) | E::WorkerCrashed => {
                RepositoryErrorKind::ConnectionFailed
            }
            E::ColumnDecode { .. } | E::Decode(_) | E::TypeNotFound { .. } => {
                RepositoryErrorKind::Decode
            }
            E::Database(db)
                if db.is_unique_violation()
                    || db.is_foreign_key_violation()
                    || db.is_check_violation() =>
            {
                RepositoryErrorKind::ConstraintViolation
            }
            _ => RepositoryErrorKind::DatabaseError,
        };
        Self::new(operation, kind, err.to_string())
    }
}

impl fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Repository {} error during {}: {}",
            self.kind, self.operation, self.message
        )?;
        if let Some(id) = self.project_id {
            write!(f, " [project: {}]", id)?;
        }
        Ok(())
    }
}

impl std::error::Error for RepositoryError {}
