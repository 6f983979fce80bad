// HTTP API server binary for the game catalog
// STORAGE_BACKEND selects the persistence variant (memory | postgres)

use std::sync::Arc;

use anyhow::{bail, Result};
use catalogo_jogos::api::ApiServer;
use catalogo_jogos::catalog::CatalogService;
use catalogo_jogos::storage::{GameRepository, MemoryRepository, PostgresRepository};
use catalogo_jogos::util::db::Db;
use catalogo_jogos::util::env as env_util;

#[actix_web::main]
async fn main() -> Result<()> {
    catalogo_jogos::tracing::init_tracing("info,sqlx=warn")?;

    tracing::info!("Initializing catalogo-jogos API server");

    // Load dotenv/env once (safe to call multiple times)
    env_util::init_env();

    // Load configuration from environment
    let server = ApiServer::from_env()?;

    let backend = env_util::env_opt("STORAGE_BACKEND").unwrap_or_else(|| "memory".to_string());
    let repo: Arc<dyn GameRepository> = match backend.as_str() {
        "memory" => Arc::new(MemoryRepository::new()),
        "postgres" => {
            let database_url = env_util::env_req("DATABASE_URL")?;
            let max_connections: u32 = env_util::env_parse("DB_MAX_CONNS", 10u32);
            let db = Db::connect(&database_url, max_connections).await?;
            tracing::info!("Database connected successfully");
            Arc::new(PostgresRepository::new(db))
        }
        other => bail!("unknown STORAGE_BACKEND '{other}' (expected memory or postgres)"),
    };

    // Start HTTP server
    server.run(CatalogService::new(repo)).await?;

    Ok(())
}
