use std::sync::Arc;

use crate::config::ServerConfig;
use crate::storage::MatchStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn MatchStore>,
    pub server: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(store: Arc<dyn MatchStore>, server: ServerConfig) -> Self {
        Self {
            store,
            server: Arc::new(server),
        }
    }
}
