//! projects-service binary
//!
//! Serves the projects collection over PostgreSQL when `[database]` is
//! configured, otherwise over an in-memory store.

use anyhow::Context;
use projects_service::prelude::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;
    init_tracing(&config)?;

    let server = Server::new(config.clone());

    match config.database.clone() {
        Some(db_config) => {
            let pool = create_pool(&db_config).await?;

            if db_config.run_migrations {
                run_migrations(&pool).await?;
            }

            let state = AppState::new(config, PgProjectRepository::new(pool));
            server.serve(app(state)).await?;
        }
        None => {
            warn!("No [database] configured, projects are kept in memory and lost on shutdown");

            let state = AppState::new(config, InMemoryProjectRepository::new());
            server.serve(app(state)).await?;
        }
    }

    Ok(())
}
