//! Shared application state for the web server.

use std::sync::Arc;

use lifexp_common::{LifexpError, Result};
use lifexp_config::ExplorerConfig;
use lifexp_data::{Dataset, DatasetCache};
use minijinja::Environment;

use crate::templates;

/// Shared state injected into every Axum handler.
pub struct AppState {
    pub config: ExplorerConfig,
    /// Parsed once, then read-only for the life of the process.
    pub datasets: DatasetCache,
    pub templates: Environment<'static>,
}

impl AppState {
    pub fn new(config: ExplorerConfig) -> Result<Self> {
        let datasets = DatasetCache::new(config.data.path.clone());
        Ok(Self { config, datasets, templates: templates::environment()? })
    }

    /// State around an in-memory dataset; the configured data path is never read.
    pub fn with_dataset(config: ExplorerConfig, dataset: Dataset) -> Result<Self> {
        Ok(Self {
            config,
            datasets: DatasetCache::preloaded(dataset),
            templates: templates::environment()?,
        })
    }

    pub fn dataset(&self) -> std::result::Result<Arc<Dataset>, LifexpError> {
        self.datasets.get()
    }
}

pub type SharedState = Arc<AppState>;
