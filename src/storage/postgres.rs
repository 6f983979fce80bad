// Postgres storage gateway. All caller-supplied values travel as typed
// binds; SQL text is static. Connections come from the shared pool and
// go back to it when the query future resolves.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::catalog::Game;
use crate::storage::{GameRepository, StorageError};
use crate::util::db::Db;

#[derive(sqlx::FromRow)]
struct JogoRow {
    id: Uuid,
    nome: String,
    produtora: String,
    preco: f64,
}

impl From<JogoRow> for Game {
    fn from(row: JogoRow) -> Self {
        Self {
            id: row.id,
            name: row.nome,
            publisher: row.produtora,
            price: row.preco,
        }
    }
}

pub struct PostgresRepository {
    pool: PgPool,
}

impl PostgresRepository {
    pub fn new(db: Db) -> Self {
        Self { pool: db.pool }
    }
}

fn map_err(err: sqlx::Error) -> StorageError {
    if let sqlx::Error::Database(ref db_err) = err {
        // jogos_nome_produtora_key guards the (nome, produtora) invariant
        if db_err.is_unique_violation() {
            return StorageError::DuplicatePair;
        }
    }
    StorageError::Unavailable(err.into())
}

#[async_trait]
impl GameRepository for PostgresRepository {
    async fn list(&self, page: u32, page_size: u32) -> Result<Vec<Game>, StorageError> {
        let offset = (page as i64).saturating_sub(1) * page_size as i64;
        let rows: Vec<JogoRow> = sqlx::query_as(
            "SELECT id, nome, produtora, preco FROM jogos ORDER BY id OFFSET $1 LIMIT $2",
        )
        .bind(offset)
        .bind(page_size as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(map_err)?;

        Ok(rows.into_iter().map(Game::from).collect())
    }

    async fn get(&self, id: Uuid) -> Result<Option<Game>, StorageError> {
        let row: Option<JogoRow> =
            sqlx::query_as("SELECT id, nome, produtora, preco FROM jogos WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(map_err)?;

        Ok(row.map(Game::from))
    }

    async fn find_by_name_and_publisher(
        &self,
        name: &str,
        publisher: &str,
    ) -> Result<Vec<Game>, StorageError> {
        let rows: Vec<JogoRow> = sqlx::query_as(
            "SELECT id, nome, produtora, preco FROM jogos WHERE nome = $1 AND produtora = $2",
        )
        .bind(name)
        .bind(publisher)
        .fetch_all(&self.pool)
        .await
        .map_err(map_err)?;

        Ok(rows.into_iter().map(Game::from).collect())
    }

    async fn insert(&self, game: &Game) -> Result<(), StorageError> {
        sqlx::query("INSERT INTO jogos (id, nome, produtora, preco) VALUES ($1, $2, $3, $4)")
            .bind(game.id)
            .bind(&game.name)
            .bind(&game.publisher)
            .bind(game.price)
            .execute(&self.pool)
            .await
            .map_err(map_err)?;
        Ok(())
    }

    async fn update(&self, game: &Game) -> Result<(), StorageError> {
        sqlx::query("UPDATE jogos SET nome = $2, produtora = $3, preco = $4 WHERE id = $1")
            .bind(game.id)
            .bind(&game.name)
            .bind(&game.publisher)
            .bind(game.price)
            .execute(&self.pool)
            .await
            .map_err(map_err)?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), StorageError> {
        sqlx::query("DELETE FROM jogos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_err)?;
        Ok(())
    }

    async fn ping(&self) -> Result<(), StorageError> {
        sqlx::query_scalar::<_, bool>("SELECT true")
            .fetch_one(&self.pool)
            .await
            .map_err(map_err)?;
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "postgres"
    }
}
