//! Bridge server data structures.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::lookup::NetBar;
use crate::tabs::{ResponseHeader, TabRegistry};

/// Shared state for the bridge server
#[derive(Clone)]
pub struct BridgeState {
    pub netbar: NetBar,
    pub tabs: Arc<TabRegistry>,
}

impl BridgeState {
    pub fn new(netbar: NetBar) -> Self {
        Self {
            netbar,
            tabs: Arc::new(TabRegistry::new()),
        }
    }
}

/// Body of `POST /tabs/{tab_id}/response`
#[derive(Debug, Clone, Deserialize)]
pub struct TabResponseEvent {
    /// Resource type of the response (`main_frame`, `script`, ...)
    #[serde(rename = "type")]
    pub resource_type: String,
    #[serde(default)]
    pub headers: Vec<ResponseHeader>,
}

/// JSON response for `/health`
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub tabs: usize,
}
