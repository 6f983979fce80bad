use anyhow::Result;
use sqlx::{
    postgres::{PgConnectOptions, PgPoolOptions, PgSslMode},
    PgPool,
};
use std::str::FromStr;
use std::time::Duration;
use tracing::{info, instrument};

use crate::util::env::env_flag;

/// Schema bootstrap executed when AUTO_MIGRATE is enabled. The unique
/// index on (nome, produtora) is what enforces the catalog invariant
/// under concurrent writers.
const SCHEMA_SQL: &str = "
CREATE TABLE IF NOT EXISTS jogos (
    id        UUID PRIMARY KEY,
    nome      TEXT NOT NULL,
    produtora TEXT NOT NULL,
    preco     DOUBLE PRECISION NOT NULL CHECK (preco >= 0)
);
CREATE UNIQUE INDEX IF NOT EXISTS jogos_nome_produtora_key ON jogos (nome, produtora);
";

#[derive(Clone)]
pub struct Db {
    pub pool: PgPool,
}

impl Db {
    // SECURITY: never include raw DSNs in tracing spans (they may contain credentials).
    #[instrument(skip(database_url))]
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
        let mut connect_options = PgConnectOptions::from_str(database_url)?;

        // Be explicit about TLS when the DSN asks for it
        if database_url.contains("sslmode=require") && !database_url.contains("sslmode=disable") {
            connect_options = connect_options.ssl_mode(PgSslMode::Require);
        }

        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(600))
            .connect_with(connect_options)
            .await?;
        info!("connected to db");

        // Schema bootstrap gate (default: OFF). Enable explicitly with
        // AUTO_MIGRATE=1/true/on when the database is owned by this service.
        if env_flag("AUTO_MIGRATE", false) {
            info!("running schema bootstrap (AUTO_MIGRATE=on)");
            sqlx::raw_sql(SCHEMA_SQL).execute(&pool).await?;
        } else {
            info!("AUTO_MIGRATE disabled; skipping schema bootstrap");
        }

        Ok(Self { pool })
    }
}
