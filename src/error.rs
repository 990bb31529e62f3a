use chrono::NaiveDateTime;

use crate::parse;
use std::fmt::{self, Display, Formatter};

/// Every way a run can end other than printing today's menu.
#[derive(Debug)]
pub enum Error {
    /// Saturday or Sunday.
    FabrikClosed,
    FetchFailed(String),
    FabrikOnHoliday,
    MenuExpired { valid_until: NaiveDateTime },
    RowNotFound(parse::Error),
    /// The row was there but its cell held no text.
    EmptyMenu,
    FabrikResting,
    Config(String),
}

impl Error {
    /// Stable per category so scripts can branch on it.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::FabrikClosed => 2,
            Self::FabrikOnHoliday => 3,
            Self::FabrikResting => 4,
            Self::MenuExpired { .. } => 5,
            Self::RowNotFound(_) | Self::EmptyMenu => 6,
            Self::FetchFailed(_) => 7,
            Self::Config(_) => 8,
        }
    }

    /// Outcomes that are part of normal operation rather than a defect.
    #[must_use]
    pub const fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::FabrikClosed | Self::FabrikOnHoliday | Self::FabrikResting
        )
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::FetchFailed(e.to_string())
    }
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Self {
        Error::Config(format!("invalid url: {e}"))
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Error::FabrikClosed => write!(f, "fabrik is closed"),
            Error::FetchFailed(e) => write!(f, "Fetch error: {e}"),
            Error::FabrikOnHoliday => {
                write!(f, "fabrik is probably on holiday, fall back to manual check")
            }
            Error::MenuExpired { valid_until } => write!(
                f,
                "the menu is outdated (valid until {})",
                valid_until.format("%d.%m.%Y %H:%M")
            ),
            Error::RowNotFound(e) => write!(f, "Menu format changed: {e}"),
            Error::EmptyMenu => write!(f, "Menu format changed: today's cell is empty"),
            Error::FabrikResting => write!(f, "fabrik is on a day off"),
            Error::Config(e) => write!(f, "Config error: {e}"),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
