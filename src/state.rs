use std::sync::Arc;

use axum::extract::FromRef;

use crate::{
    config::Config,
    repository::{QuizStore, SqliteStore},
};

/// Persistence handle shared by all handlers.
pub type SharedStore = Arc<dyn QuizStore>;

#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
    pub config: Config,
}

impl AppState {
    pub fn new(store: SqliteStore, config: Config) -> Self {
        Self {
            store: Arc::new(store),
            config,
        }
    }
}

impl FromRef<AppState> for SharedStore {
    fn from_ref(state: &AppState) -> Self {
        state.store.clone()
    }
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}
