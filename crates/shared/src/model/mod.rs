mod bin_metadata;
mod card;

pub use self::bin_metadata::{BinMetadata, UNKNOWN};
pub use self::card::{Bin, CardNumber, CardRecord, Cvc, Expiry, MAX_BIN_LENGTH, MIN_BIN_LENGTH};
