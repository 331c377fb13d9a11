mod myconfig;

pub use self::myconfig::{CARD_LENGTH_RANGE, Config, DEFAULT_LOG_DIR, GeneratorConfig};
