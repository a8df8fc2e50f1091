//! Application state for the web layer.

use std::sync::Arc;

use crate::engine::SearchConfig;
use crate::network::Network;

/// Shared application state.
///
/// The snapshot and configuration are immutable, so handlers may serve
/// concurrent searches without coordination.
#[derive(Clone)]
pub struct AppState {
    /// Network snapshot queried by searches
    pub network: Arc<Network>,

    /// Route search configuration
    pub config: Arc<SearchConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(network: Network, config: SearchConfig) -> Self {
        Self {
            network: Arc::new(network),
            config: Arc::new(config),
        }
    }
}
