//! Roster user-management API.
//!
//! Five parameterized database operations behind a thin HTTP surface;
//! every failure funnels through one classification, logging, and
//! response path before the client hears back.

mod config;
mod error_log;
mod responder;
mod routes;
mod state;

use std::sync::Arc;

use database::Database;
use tracing::info;

use crate::config::Config;
use crate::error_log::FileErrorLogger;
use crate::responder::ErrorResponder;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    // Load configuration
    let config = Config::from_env()?;
    info!(addr = %config.addr, "Starting roster API");

    // Connect to database
    let db = Database::connect(&config.database_url).await?;
    db.migrate().await?;

    // Build application state with the injected error sink
    let logger = Arc::new(FileErrorLogger::new(config.log_dir.clone()));
    let state = AppState::new(db, ErrorResponder::new(logger));

    // Build router
    let app = routes::router().with_state(state);

    // Start server
    info!(addr = %config.addr, "Roster API listening");
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
