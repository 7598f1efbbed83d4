//! MongoDB access layer: connection helpers, document models, repositories.

pub mod models;
pub mod repositories;

use mongodb::bson::doc;
use mongodb::{Client, Database};

/// Connect to MongoDB and return a handle to the named database.
///
/// The driver connects lazily; use [`health_check`] at startup to verify
/// the server is actually reachable.
pub async fn connect(uri: &str, db_name: &str) -> Result<Database, mongodb::error::Error> {
    let client = Client::with_uri_str(uri).await?;
    Ok(client.database(db_name))
}

/// Ping the database server.
pub async fn health_check(db: &Database) -> Result<(), mongodb::error::Error> {
    db.run_command(doc! { "ping": 1 }).await?;
    Ok(())
}
