use chrono::{Datelike, NaiveDateTime, Weekday};
use tracing::{instrument, Level};
use url::Url;

use crate::{
    cache::FreshnessCache,
    error::{Error, Result},
    fetch::Fetch,
    parse::{extract_menu, is_holiday, DailyMenu, ValidityWindow, WindowStatus},
};

/// How far the page's own validity header vouches for the menu.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Validity {
    Verified,
    /// No readable header; served unverified.
    Unavailable,
    /// Published ahead of its first day; served anyway.
    NotYetValid,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Source {
    Cache,
    Fetched(Validity),
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Menu {
    pub text: String,
    pub source: Source,
}

/// One run: weekend gate, cache, fetch, holiday check, validity, row extraction.
///
/// `now` is sampled once by the caller and used for every comparison in the run.
pub struct Pipeline<'a, F> {
    fetcher: &'a F,
    cache: &'a FreshnessCache,
    url: &'a Url,
    now: NaiveDateTime,
    force: bool,
}

impl<'a, F: Fetch> Pipeline<'a, F> {
    pub const fn new(
        fetcher: &'a F,
        cache: &'a FreshnessCache,
        url: &'a Url,
        now: NaiveDateTime,
    ) -> Self {
        Self {
            fetcher,
            cache,
            url,
            now,
            force: false,
        }
    }

    /// Skip the cache read. A successful fetch still refreshes the cache.
    #[must_use]
    pub const fn force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    #[instrument(skip(self), fields(now = %self.now, force = self.force), level = Level::DEBUG)]
    pub async fn run(&self) -> Result<Menu> {
        let day = self.now.weekday();
        if matches!(day, Weekday::Sat | Weekday::Sun) {
            return Err(Error::FabrikClosed);
        }

        if !self.force {
            if let Some(text) = self.cache.read(self.now).await {
                return Ok(Menu {
                    text,
                    source: Source::Cache,
                });
            }
        }

        log::info!("Fetching {}", self.url);
        let body = self.fetcher.fetch(self.url).await?;
        let (text, validity) = self.extract(&body, day)?;
        self.cache.write(self.now, &text).await;
        Ok(Menu {
            text,
            source: Source::Fetched(validity),
        })
    }

    fn extract(&self, body: &str, day: Weekday) -> Result<(String, Validity)> {
        // holiday pages may not have the table at all
        if is_holiday(body) {
            return Err(Error::FabrikOnHoliday);
        }

        let validity = match ValidityWindow::from_markup(body) {
            Ok(window) => match window.status(self.now) {
                WindowStatus::Current => Validity::Verified,
                WindowStatus::Expired => {
                    return Err(Error::MenuExpired {
                        valid_until: window.valid_until(),
                    })
                }
                WindowStatus::NotYetValid => {
                    log::warn!(
                        "the menu is from the future (valid from {})",
                        window.valid_from().format("%d.%m.%Y")
                    );
                    Validity::NotYetValid
                }
            },
            Err(e) => {
                log::warn!("{e}; menu validity is unverified");
                Validity::Unavailable
            }
        };

        match extract_menu(body, day) {
            Ok(DailyMenu::Resting) => Err(Error::FabrikResting),
            Ok(DailyMenu::Dish(text)) if text.is_empty() => Err(Error::EmptyMenu),
            Ok(DailyMenu::Dish(text)) => Ok((text, validity)),
            Err(e) => Err(Error::RowNotFound(e)),
        }
    }
}
