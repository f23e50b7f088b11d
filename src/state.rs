use crate::config::Config;
use crate::db::TickStore;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: TickStore,
    pub config: Arc<Config>,
}
