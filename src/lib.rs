// ============================================================================
// Roundtable Directory Library
// ============================================================================

pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod query;
pub mod seed;
pub mod service;
pub mod state;
pub mod store;

use std::sync::Arc;

pub use api::build_router;
pub use domain::{
    CreateRoundtableRequest, Roundtable, RoundtableStatus, StatusFilter, UserDetails,
    UserDirectory,
};
pub use error::{DirectoryError, DirectoryErrorKind, DirectoryResult};
pub use query::{RoundtablePage, RoundtableQuery};
pub use service::DirectoryService;
pub use state::AppState;
pub use store::{InMemoryRoundtableStore, RoundtableStore};

/// Builds the shared application state: one store per process, optionally
/// pre-populated with the sample roundtables.
pub fn bootstrap_state(seed_sample_data: bool) -> DirectoryResult<AppState> {
    let store = if seed_sample_data {
        InMemoryRoundtableStore::with_roundtables(seed::sample_roundtables())?
    } else {
        InMemoryRoundtableStore::new()
    };

    let service = DirectoryService::new(Arc::new(store), Arc::new(seed::sample_user_directory()));
    Ok(AppState::new(Arc::new(service)))
}
