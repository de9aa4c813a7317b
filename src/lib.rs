pub mod fuzzy;
pub mod util;

pub use fuzzy::{FormatError, Notation, from_date_string, from_text, from_timestamp};
