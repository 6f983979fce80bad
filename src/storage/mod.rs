// Storage gateway: the persistence boundary between business logic and
// the backing store. Two interchangeable implementations, selected at
// startup via STORAGE_BACKEND.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use uuid::Uuid;

use crate::catalog::Game;

pub use memory::MemoryRepository;
pub use postgres::PostgresRepository;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The store rejected a write that would duplicate a
    /// (nome, produtora) pair. Only the Postgres backend raises this,
    /// from its unique index; the memory backend relies on the
    /// service-level check alone.
    #[error("registro duplicado para (nome, produtora)")]
    DuplicatePair,
    /// Backend unavailable or the query itself failed.
    #[error("armazenamento indisponível: {0}")]
    Unavailable(#[source] anyhow::Error),
}

/// Capability interface over the backing store. Absence is an empty
/// result at this layer, never an error; business-rule errors live in
/// the catalog service.
#[async_trait]
pub trait GameRepository: Send + Sync {
    /// Page `page` (1-based) of records, `page_size` per page. The
    /// gateway trusts the caller for range validation.
    async fn list(&self, page: u32, page_size: u32) -> Result<Vec<Game>, StorageError>;

    async fn get(&self, id: Uuid) -> Result<Option<Game>, StorageError>;

    /// Exact-match lookup used by the uniqueness check.
    async fn find_by_name_and_publisher(
        &self,
        name: &str,
        publisher: &str,
    ) -> Result<Vec<Game>, StorageError>;

    /// Persist a new record; the id is already assigned by the caller.
    async fn insert(&self, game: &Game) -> Result<(), StorageError>;

    /// Overwrite the stored record addressed by `game.id`.
    async fn update(&self, game: &Game) -> Result<(), StorageError>;

    /// Remove the record with that id; no-op if absent.
    async fn delete(&self, id: Uuid) -> Result<(), StorageError>;

    /// Connectivity probe for the health endpoint.
    async fn ping(&self) -> Result<(), StorageError>;

    fn backend_name(&self) -> &'static str;
}
