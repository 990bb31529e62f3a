mod date;
mod error;
mod menu;
mod remove_excess_whitespace;
mod lazy_regex;
mod text_from_markup;
mod validity;

pub use error::Error;
pub(crate) use error::Result;
pub use menu::{extract_menu, is_holiday, DailyMenu};
pub use remove_excess_whitespace::remove_excess_whitespace;
pub use text_from_markup::text_from_markup;
pub use validity::{ValidityWindow, WindowStatus};
