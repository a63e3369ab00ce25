//! Application state for the web layer.

use std::sync::Arc;

use crate::pipeline::{DeparturePipeline, TransitProvider};

/// Shared application state.
///
/// Holds only the pipeline, which keeps no per-request state, so
/// concurrent requests never coordinate.
pub struct AppState<P: TransitProvider> {
    pub pipeline: Arc<DeparturePipeline<P>>,
}

impl<P: TransitProvider> AppState<P> {
    /// Create a new app state.
    pub fn new(pipeline: DeparturePipeline<P>) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
        }
    }
}

impl<P: TransitProvider> Clone for AppState<P> {
    fn clone(&self) -> Self {
        Self {
            pipeline: Arc::clone(&self.pipeline),
        }
    }
}
