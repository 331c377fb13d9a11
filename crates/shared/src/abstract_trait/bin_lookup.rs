use crate::{
    errors::LookupError,
    model::{Bin, BinMetadata},
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynBinLookup = Arc<dyn BinLookupTrait + Send + Sync>;

/// Source of issuer details for a BIN, supplied by the caller.
#[async_trait]
pub trait BinLookupTrait {
    async fn fetch(&self, bin: &Bin) -> Result<BinMetadata, LookupError>;
}
