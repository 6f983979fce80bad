// Business rules over the storage gateway: uniqueness on insert and
// full update, existence checks on every id-addressed operation.

use std::sync::Arc;

use tracing::instrument;
use uuid::Uuid;

use crate::catalog::{CatalogError, Game, GameInput, GameView};
use crate::storage::{GameRepository, StorageError};

/// Stateless orchestrator; all persisted state lives in the repository.
#[derive(Clone)]
pub struct CatalogService {
    repo: Arc<dyn GameRepository>,
}

impl CatalogService {
    pub fn new(repo: Arc<dyn GameRepository>) -> Self {
        Self { repo }
    }

    pub async fn list(&self, page: u32, page_size: u32) -> Result<Vec<GameView>, CatalogError> {
        let games = self.repo.list(page, page_size).await?;
        Ok(games.into_iter().map(GameView::from).collect())
    }

    pub async fn get(&self, id: Uuid) -> Result<GameView, CatalogError> {
        let game = self.repo.get(id).await?.ok_or(CatalogError::NotRegistered)?;
        Ok(game.into())
    }

    #[instrument(skip(self, input), fields(nome = %input.name, produtora = %input.publisher))]
    pub async fn insert(&self, input: GameInput) -> Result<GameView, CatalogError> {
        let existing = self
            .repo
            .find_by_name_and_publisher(&input.name, &input.publisher)
            .await?;
        if !existing.is_empty() {
            return Err(CatalogError::AlreadyRegistered);
        }

        let game = Game {
            id: Uuid::new_v4(),
            name: input.name,
            publisher: input.publisher,
            price: input.price,
        };

        // The unique index is the authority under concurrent writers;
        // the check above only buys the friendlier error most of the time.
        match self.repo.insert(&game).await {
            Ok(()) => Ok(game.into()),
            Err(StorageError::DuplicatePair) => Err(CatalogError::AlreadyRegistered),
            Err(e) => Err(e.into()),
        }
    }

    /// Overwrite nome/produtora/preco of an existing record. Uniqueness
    /// is re-validated when the (nome, produtora) pair changes, excluding
    /// the record being updated.
    #[instrument(skip(self, input))]
    pub async fn update_full(&self, id: Uuid, input: GameInput) -> Result<(), CatalogError> {
        let mut game = self.repo.get(id).await?.ok_or(CatalogError::NotRegistered)?;

        if game.name != input.name || game.publisher != input.publisher {
            let clashes = self
                .repo
                .find_by_name_and_publisher(&input.name, &input.publisher)
                .await?;
            if clashes.iter().any(|g| g.id != id) {
                return Err(CatalogError::AlreadyRegistered);
            }
        }

        game.name = input.name;
        game.publisher = input.publisher;
        game.price = input.price;

        match self.repo.update(&game).await {
            Ok(()) => Ok(()),
            Err(StorageError::DuplicatePair) => Err(CatalogError::AlreadyRegistered),
            Err(e) => Err(e.into()),
        }
    }

    /// Change only the price; nome and produtora stay as stored.
    #[instrument(skip(self))]
    pub async fn update_price(&self, id: Uuid, price: f64) -> Result<(), CatalogError> {
        let mut game = self.repo.get(id).await?.ok_or(CatalogError::NotRegistered)?;
        game.price = price;
        self.repo.update(&game).await?;
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn remove(&self, id: Uuid) -> Result<(), CatalogError> {
        if self.repo.get(id).await?.is_none() {
            return Err(CatalogError::NotRegistered);
        }
        self.repo.delete(id).await?;
        Ok(())
    }

    pub async fn ping_storage(&self) -> Result<(), CatalogError> {
        self.repo.ping().await?;
        Ok(())
    }

    pub fn backend_name(&self) -> &'static str {
        self.repo.backend_name()
    }
}
