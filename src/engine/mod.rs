// Pure conversion over the immutable table: parse raw input, convert, round.

pub mod convert;
pub mod error;
pub mod format;
pub mod input;

pub use convert::*;
pub use error::ConversionError;
pub use format::{format_fixed, round_to, DEFAULT_DECIMALS, MAX_DECIMALS};
pub use input::parse_value;
