// Catalog domain: the persisted game record, its wire-facing shapes and
// the domain error taxonomy.

pub mod service;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::storage::StorageError;

pub use service::CatalogService;

/// A persisted catalog entry. The id is assigned by the service on insert
/// and never changes afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    pub id: Uuid,
    pub name: String,
    pub publisher: String,
    pub price: f64,
}

/// Externally-facing representation of a [`Game`]. Field names follow the
/// original API contract (Portuguese wire names).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameView {
    pub id: Uuid,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "produtora")]
    pub publisher: String,
    #[serde(rename = "preco")]
    pub price: f64,
}

impl From<Game> for GameView {
    fn from(game: Game) -> Self {
        Self {
            id: game.id,
            name: game.name,
            publisher: game.publisher,
            price: game.price,
        }
    }
}

/// Client-supplied fields for insert and full update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameInput {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "produtora")]
    pub publisher: String,
    #[serde(rename = "preco")]
    pub price: f64,
}

impl GameInput {
    /// Field-level validation, run at the HTTP boundary before any
    /// service call: non-empty name/publisher, non-negative price.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("o campo nome não pode ser vazio".to_string());
        }
        if self.publisher.trim().is_empty() {
            return Err("o campo produtora não pode ser vazio".to_string());
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err("o campo preco deve ser um valor não negativo".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// No record exists with the addressed id.
    #[error("não existe este jogo")]
    NotRegistered,
    /// A record with the same (nome, produtora) pair already exists.
    #[error("já existe um jogo com este nome para esta produtora")]
    AlreadyRegistered,
    /// Anything the storage gateway could not serve. Rendered as a
    /// generic failure at the HTTP boundary; the cause is only logged.
    #[error("falha no armazenamento")]
    Storage(#[from] StorageError),
}
