//! Database Config

use clap::Args;

/// Promotions store settings.
#[derive(Debug, Args)]
pub struct DatabaseConfig {
    /// `PostgreSQL` connection string; migrations run against it on start-up
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: String,
}
