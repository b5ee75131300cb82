use thiserror::Error;

/// Malformed inventory data. Any of these aborts the whole run.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckError {
    #[error("percent used {value:?} on {device} is not an integer between 0 and 100")]
    MalformedPercent { device: String, value: String },

    #[error("{column} {value:?} on {device} is not a whole number of megabytes")]
    MalformedSize { device: String, column: &'static str, value: String },
}
