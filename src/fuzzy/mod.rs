pub mod calendar;
pub mod error;
pub mod formatter;
pub mod notation;
pub mod vocabulary;

pub use error::FormatError;
pub use formatter::{Bucket, from_date_string, from_text, from_timestamp, render};
pub use notation::Notation;
