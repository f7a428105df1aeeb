use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    domain::{Roundtable, roundtable::abbreviation_key},
    error::{DirectoryError, DirectoryResult},
};

#[async_trait]
pub trait RoundtableStore: Send + Sync {
    /// Point-in-time copy of every roundtable in insertion order.
    async fn snapshot(&self) -> Vec<Roundtable>;
    async fn find_by_id(&self, id: &str) -> Option<Roundtable>;
    async fn is_abbreviation_available(&self, abbreviation: &str) -> bool;
    /// Appends `roundtable` unless its abbreviation (case-insensitive) or id is taken.
    /// The check and the append happen under one exclusive lock.
    async fn insert_unique(&self, roundtable: Roundtable) -> DirectoryResult<Roundtable>;
    async fn len(&self) -> usize;

    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[derive(Debug, Default)]
struct StoreState {
    entries: Vec<Roundtable>,
    by_id: HashMap<String, usize>,
    by_abbreviation: HashMap<String, usize>,
}

impl StoreState {
    fn insert(&mut self, roundtable: Roundtable) -> DirectoryResult<Roundtable> {
        let key = roundtable.abbreviation_key();
        if self.by_abbreviation.contains_key(&key) {
            return Err(DirectoryError::already_exists(format!(
                "roundtable abbreviation '{}' already exists",
                roundtable.abbreviation
            )));
        }
        if self.by_id.contains_key(&roundtable.id) {
            return Err(DirectoryError::already_exists(format!(
                "roundtable with id '{}' already exists",
                roundtable.id
            )));
        }

        let position = self.entries.len();
        self.by_abbreviation.insert(key, position);
        self.by_id.insert(roundtable.id.clone(), position);
        self.entries.push(roundtable.clone());
        Ok(roundtable)
    }
}

/// Process-local store. Build one and share it behind an `Arc`.
#[derive(Debug, Default)]
pub struct InMemoryRoundtableStore {
    state: RwLock<StoreState>,
}

impl InMemoryRoundtableStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store pre-populated with `roundtables`, applying the same
    /// uniqueness rules as [`RoundtableStore::insert_unique`].
    pub fn with_roundtables(
        roundtables: impl IntoIterator<Item = Roundtable>,
    ) -> DirectoryResult<Self> {
        let mut state = StoreState::default();
        for roundtable in roundtables {
            state.insert(roundtable)?;
        }
        Ok(Self {
            state: RwLock::new(state),
        })
    }
}

#[async_trait]
impl RoundtableStore for InMemoryRoundtableStore {
    async fn snapshot(&self) -> Vec<Roundtable> {
        self.state.read().await.entries.clone()
    }

    async fn find_by_id(&self, id: &str) -> Option<Roundtable> {
        let state = self.state.read().await;
        state
            .by_id
            .get(id)
            .and_then(|position| state.entries.get(*position))
            .cloned()
    }

    async fn is_abbreviation_available(&self, abbreviation: &str) -> bool {
        let key = abbreviation_key(abbreviation);
        !self.state.read().await.by_abbreviation.contains_key(&key)
    }

    async fn insert_unique(&self, roundtable: Roundtable) -> DirectoryResult<Roundtable> {
        self.state.write().await.insert(roundtable)
    }

    async fn len(&self) -> usize {
        self.state.read().await.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RoundtableStatus, UserDetails};

    fn roundtable(id: &str, abbreviation: &str) -> Roundtable {
        Roundtable {
            id: id.to_string(),
            name: format!("{abbreviation} Roundtable"),
            abbreviation: abbreviation.to_string(),
            description: String::new(),
            status: RoundtableStatus::Active,
            director: UserDetails::new("director-1", "Dr. Alice Director", true),
            associates: Vec::new(),
            client_ids: Vec::new(),
            clients_with_access_count: 0,
        }
    }

    #[tokio::test]
    async fn insert_then_find_by_id() {
        let store = InMemoryRoundtableStore::new();
        assert!(store.is_empty().await);
        store
            .insert_unique(roundtable("rt-1", "ONE"))
            .await
            .expect("insert should succeed");

        let found = store.find_by_id("rt-1").await.expect("roundtable exists");
        assert_eq!(found.abbreviation, "ONE");
        assert!(store.find_by_id("rt-404").await.is_none());
    }

    #[tokio::test]
    async fn rejects_abbreviation_in_other_case() {
        let store = InMemoryRoundtableStore::new();
        store
            .insert_unique(roundtable("rt-1", "Dup"))
            .await
            .expect("first insert should succeed");

        let err = store
            .insert_unique(roundtable("rt-2", "dUP"))
            .await
            .expect_err("second insert must conflict");
        assert_eq!(
            err,
            DirectoryError::already_exists("roundtable abbreviation 'dUP' already exists")
        );
        assert_eq!(store.len().await, 1);
        assert!(!store.is_abbreviation_available("DUP").await);
        assert!(store.is_abbreviation_available("OTHER").await);
    }

    #[tokio::test]
    async fn snapshot_is_isolated_from_later_inserts() {
        let store = InMemoryRoundtableStore::new();
        store
            .insert_unique(roundtable("rt-1", "ONE"))
            .await
            .expect("insert should succeed");

        let snapshot = store.snapshot().await;
        store
            .insert_unique(roundtable("rt-2", "TWO"))
            .await
            .expect("insert should succeed");

        assert_eq!(snapshot.len(), 1);
        assert_eq!(store.snapshot().await.len(), 2);
    }

    #[tokio::test]
    async fn snapshot_preserves_insertion_order() {
        let store = InMemoryRoundtableStore::with_roundtables(vec![
            roundtable("rt-b", "B"),
            roundtable("rt-a", "A"),
            roundtable("rt-c", "C"),
        ])
        .expect("seed should be unique");

        let ids: Vec<String> = store.snapshot().await.into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["rt-b", "rt-a", "rt-c"]);
    }

    #[test]
    fn seeding_rejects_duplicate_abbreviations() {
        let result = InMemoryRoundtableStore::with_roundtables(vec![
            roundtable("rt-1", "SAME"),
            roundtable("rt-2", "same"),
        ]);
        assert!(matches!(result, Err(DirectoryError::AlreadyExists(_))));
    }
}
