mod bin_lookup;
mod card;

pub use self::bin_lookup::{NoBinLookup, StaticBinLookup};
pub use self::card::CardSynthService;
