use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormatError {
    /// A notation name that is not one of `twitter`, `short` or `long`.
    #[error("Invalid notation: {0:?} (expected twitter, short or long)")]
    InvalidNotation(String),

    /// The date-time text is not an ISO-8601 instant.
    #[error("Failed to parse {input:?} as an ISO-8601 instant: {source}")]
    Parse {
        input: String,
        #[source]
        source: chrono::ParseError,
    },
}
