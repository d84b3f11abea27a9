use std::sync::Arc;

use crate::config::Config;
use crate::extraction::decode::DocumentDecoder;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable document decoder. Default: `DefaultDecoder` (PDF + plain text).
    pub decoder: Arc<dyn DocumentDecoder>,
}
