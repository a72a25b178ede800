use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuillError {
    #[error("WHOIS response is empty")]
    EmptyResponse,

    #[error("WHOIS response could not be decoded: {0}")]
    Undecodable(String),

    #[error("Invalid rule pattern for field {field}: {source}")]
    InvalidPattern {
        field: String,
        #[source]
        source: regex::Error,
    },

    #[error("Suffix registered by more than one rule table: {0}")]
    DuplicateSuffix(String),
}

pub type Result<T> = std::result::Result<T, QuillError>;
