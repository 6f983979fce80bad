// In-memory storage gateway for local/dev runs and tests.

use async_trait::async_trait;
use indexmap::IndexMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::catalog::Game;
use crate::storage::{GameRepository, StorageError};

/// Map keyed by id; IndexMap keeps insertion order, so pagination over
/// it is stable as long as nothing is removed mid-scan.
#[derive(Default)]
pub struct MemoryRepository {
    games: RwLock<IndexMap<Uuid, Game>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GameRepository for MemoryRepository {
    async fn list(&self, page: u32, page_size: u32) -> Result<Vec<Game>, StorageError> {
        let games = self.games.read().await;
        let skip = (page as usize).saturating_sub(1) * page_size as usize;
        Ok(games
            .values()
            .skip(skip)
            .take(page_size as usize)
            .cloned()
            .collect())
    }

    async fn get(&self, id: Uuid) -> Result<Option<Game>, StorageError> {
        Ok(self.games.read().await.get(&id).cloned())
    }

    async fn find_by_name_and_publisher(
        &self,
        name: &str,
        publisher: &str,
    ) -> Result<Vec<Game>, StorageError> {
        Ok(self
            .games
            .read()
            .await
            .values()
            .filter(|g| g.name == name && g.publisher == publisher)
            .cloned()
            .collect())
    }

    async fn insert(&self, game: &Game) -> Result<(), StorageError> {
        self.games.write().await.insert(game.id, game.clone());
        Ok(())
    }

    async fn update(&self, game: &Game) -> Result<(), StorageError> {
        self.games.write().await.insert(game.id, game.clone());
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), StorageError> {
        // shift_remove keeps the ordering of the remaining entries
        self.games.write().await.shift_remove(&id);
        Ok(())
    }

    async fn ping(&self) -> Result<(), StorageError> {
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(name: &str, publisher: &str, price: f64) -> Game {
        Game {
            id: Uuid::new_v4(),
            name: name.to_string(),
            publisher: publisher.to_string(),
            price,
        }
    }

    #[tokio::test]
    async fn get_returns_none_for_unknown_id() {
        let repo = MemoryRepository::new();
        assert!(repo.get(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn insert_then_get_round_trips() {
        let repo = MemoryRepository::new();
        let g = game("Chrono Trigger", "Square", 59.99);
        repo.insert(&g).await.unwrap();

        assert_eq!(repo.get(g.id).await.unwrap(), Some(g));
    }

    #[tokio::test]
    async fn pages_partition_without_overlap_or_gaps() {
        let repo = MemoryRepository::new();
        let mut inserted = Vec::new();
        for i in 0..7 {
            let g = game(&format!("Game {i}"), "Pub", i as f64);
            repo.insert(&g).await.unwrap();
            inserted.push(g);
        }

        let p1 = repo.list(1, 3).await.unwrap();
        let p2 = repo.list(2, 3).await.unwrap();
        let p3 = repo.list(3, 3).await.unwrap();
        let p4 = repo.list(4, 3).await.unwrap();

        assert_eq!(p1.len(), 3);
        assert_eq!(p2.len(), 3);
        assert_eq!(p3.len(), 1);
        assert!(p4.is_empty());

        let joined: Vec<Game> = p1.into_iter().chain(p2).chain(p3).collect();
        assert_eq!(joined, inserted);
    }

    #[tokio::test]
    async fn find_by_pair_matches_exactly() {
        let repo = MemoryRepository::new();
        repo.insert(&game("Chrono Trigger", "Square", 59.99))
            .await
            .unwrap();
        repo.insert(&game("Chrono Trigger", "Enix", 49.99))
            .await
            .unwrap();

        let hits = repo
            .find_by_name_and_publisher("Chrono Trigger", "Square")
            .await
            .unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].publisher, "Square");

        assert!(repo
            .find_by_name_and_publisher("Chrono Trigger", "Capcom")
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn delete_is_noop_for_unknown_id() {
        let repo = MemoryRepository::new();
        let g = game("Chrono Trigger", "Square", 59.99);
        repo.insert(&g).await.unwrap();

        repo.delete(Uuid::new_v4()).await.unwrap();
        assert!(repo.get(g.id).await.unwrap().is_some());

        repo.delete(g.id).await.unwrap();
        assert!(repo.get(g.id).await.unwrap().is_none());
    }
}
