use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A date did not match `DD.MM.YYYY` or named an impossible day.
    MalformedDate(String),
    /// The page carries no readable "from bis to" header.
    ValidityUnavailable(String),
    /// No menu row for the requested weekday token.
    RowNotFound(String),
}

impl Error {
    pub fn malformed_date(raw: &str) -> Self {
        Self::MalformedDate(raw.to_string())
    }
    pub fn validity_unavailable(msg: &str) -> Self {
        Self::ValidityUnavailable(msg.to_string())
    }
    pub fn row_not_found(token: &str) -> Self {
        Self::RowNotFound(token.to_string())
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedDate(raw) => write!(f, "Malformed date: {raw:?} is not DD.MM.YYYY"),
            Self::ValidityUnavailable(msg) => write!(f, "Validity unavailable: {msg}"),
            Self::RowNotFound(token) => write!(f, "No menu row tagged tr-{token}"),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
