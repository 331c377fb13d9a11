mod card;
mod lookup;
mod service;
mod validate;

pub use self::card::CardError;
pub use self::lookup::LookupError;
pub use self::service::ServiceError;
pub use self::validate::format_validation_errors;
