use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::{
    domain::{
        CreateRoundtableRequest, PlaceholderUserDirectory, Roundtable, RoundtableBuilder,
        UserDirectory,
    },
    error::{DirectoryError, DirectoryResult},
    query::{self, RoundtablePage, RoundtableQuery},
    store::RoundtableStore,
};

pub const SERVICE_STATUS: &str = "Roundtable directory is alive";

/// Orchestrates create, list and get over a shared [`RoundtableStore`].
#[derive(Clone)]
pub struct DirectoryService {
    store: Arc<dyn RoundtableStore>,
    builder: RoundtableBuilder,
}

impl DirectoryService {
    pub fn new(store: Arc<dyn RoundtableStore>, users: Arc<dyn UserDirectory>) -> Self {
        Self {
            store,
            builder: RoundtableBuilder::new(users),
        }
    }

    /// Service that renders member names with the placeholder resolver.
    pub fn with_placeholder_names(store: Arc<dyn RoundtableStore>) -> Self {
        Self::new(store, Arc::new(PlaceholderUserDirectory))
    }

    pub fn store(&self) -> &Arc<dyn RoundtableStore> {
        &self.store
    }

    pub async fn create_roundtable(
        &self,
        request: CreateRoundtableRequest,
    ) -> DirectoryResult<Roundtable> {
        if let Err(err) = request.validate() {
            warn!(reason = err.message(), "rejected roundtable create request");
            return Err(err);
        }

        let roundtable = self.builder.build(request);
        match self.store.insert_unique(roundtable).await {
            Ok(created) => {
                info!(
                    roundtable_id = %created.id,
                    abbreviation = %created.abbreviation,
                    "roundtable created"
                );
                Ok(created)
            }
            Err(err) => {
                warn!(reason = err.message(), "roundtable create conflicted");
                Err(err)
            }
        }
    }

    pub async fn list_roundtables(&self, query: RoundtableQuery) -> RoundtablePage {
        let snapshot = self.store.snapshot().await;
        let page = query::execute(snapshot, &query);
        debug!(
            total_size = page.total_size,
            returned = page.roundtables.len(),
            has_next = page.next_page_token.is_some(),
            "listed roundtables"
        );
        page
    }

    pub async fn get_roundtable(&self, id: &str) -> DirectoryResult<Roundtable> {
        if id.trim().is_empty() {
            return Err(DirectoryError::invalid_argument("roundtable id cannot be empty"));
        }

        match self.store.find_by_id(id).await {
            Some(roundtable) => Ok(roundtable),
            None => {
                debug!(roundtable_id = id, "roundtable not found");
                Err(DirectoryError::not_found(format!(
                    "roundtable with id '{id}' not found"
                )))
            }
        }
    }

    pub fn status(&self) -> &'static str {
        SERVICE_STATUS
    }
}
