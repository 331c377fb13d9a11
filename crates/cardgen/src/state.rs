use anyhow::{Context, Result};
use shared::{
    abstract_trait::{DynBinLookup, DynCardSynthService},
    config::Config,
    service::{CardSynthService, NoBinLookup, StaticBinLookup},
};
use std::{path::Path, sync::Arc};
use tracing::info;

pub struct AppState {
    pub card_service: DynCardSynthService,
}

impl AppState {
    pub async fn new(config: &Config, bin_table: Option<&Path>) -> Result<Self> {
        let lookup: DynBinLookup = match bin_table {
            Some(path) => {
                let raw = tokio::fs::read_to_string(path)
                    .await
                    .with_context(|| format!("Failed to read BIN table {}", path.display()))?;
                let table = StaticBinLookup::from_json(&raw)
                    .with_context(|| format!("Invalid BIN table {}", path.display()))?;
                info!("📇 Loaded BIN table from {}", path.display());
                Arc::new(table)
            }
            None => Arc::new(NoBinLookup),
        };

        Ok(Self {
            card_service: Arc::new(CardSynthService::new(config.generator, lookup)),
        })
    }
}
