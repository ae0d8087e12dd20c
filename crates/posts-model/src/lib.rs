pub mod date;
pub mod error;
pub mod record;
pub mod token;

pub use date::{DateColumns, NormalizedDate};
pub use error::{BatchError, CleanError, DateError};
pub use record::Record;
pub use token::Token;
