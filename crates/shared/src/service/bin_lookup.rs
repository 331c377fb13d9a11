use crate::{
    abstract_trait::BinLookupTrait,
    errors::LookupError,
    model::{Bin, BinMetadata},
};
use async_trait::async_trait;
use std::collections::HashMap;

/// Used when no lookup service is configured.
#[derive(Debug, Default, Clone)]
pub struct NoBinLookup;

#[async_trait]
impl BinLookupTrait for NoBinLookup {
    async fn fetch(&self, _bin: &Bin) -> Result<BinMetadata, LookupError> {
        Err(LookupError::Unavailable("no BIN lookup configured".into()))
    }
}

/// Fixed table of BIN metadata, for fixtures and offline runs.
#[derive(Debug, Default, Clone)]
pub struct StaticBinLookup {
    entries: HashMap<String, BinMetadata>,
}

impl StaticBinLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, bin: &str, metadata: BinMetadata) -> Self {
        self.entries.insert(bin.to_string(), metadata);
        self
    }

    /// Reads a JSON object keyed by BIN.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        Ok(Self {
            entries: serde_json::from_str(json)?,
        })
    }
}

#[async_trait]
impl BinLookupTrait for StaticBinLookup {
    async fn fetch(&self, bin: &Bin) -> Result<BinMetadata, LookupError> {
        self.entries
            .get(bin.as_str())
            .cloned()
            .ok_or(LookupError::NotFound)
    }
}
