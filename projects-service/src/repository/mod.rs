//! Data Accessor for projects
//!
//! - [`ProjectRepository`]: the storage contract consumed by the handlers
//! - [`PgProjectRepository`]: PostgreSQL implementation (sqlx)
//! - [`InMemoryProjectRepository`]: in-process implementation

mod error;
mod memory;
mod postgres;
mod traits;

pub use error::{RepositoryError, RepositoryErrorKind, RepositoryOperation};
pub use memory::InMemoryProjectRepository;
pub use postgres::PgProjectRepository;
pub use traits::{ProjectRepository, RepositoryResult};
