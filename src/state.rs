use std::sync::Arc;

use crate::service::DirectoryService;

#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<DirectoryService>,
}

impl AppState {
    pub fn new(directory: Arc<DirectoryService>) -> Self {
        Self { directory }
    }
}
