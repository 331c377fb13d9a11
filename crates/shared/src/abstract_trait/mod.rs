mod bin_lookup;
mod card_service;

pub use self::bin_lookup::{BinLookupTrait, DynBinLookup};
pub use self::card_service::{CardSynthServiceTrait, DynCardSynthService};
