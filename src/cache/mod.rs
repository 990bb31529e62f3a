mod local;

use std::{path::Path, time::SystemTime};

use chrono::{DateTime, Local, NaiveDateTime};

pub use local::FileStore;

/// Same-day store for the extracted menu.
///
/// An entry counts only if it was written on the calendar day of the run, local time.
/// Every I/O failure is logged and treated as a miss; nothing here can abort a run.
#[derive(Debug)]
pub enum FreshnessCache {
    Local(FileStore),
    /// Never hits, never persists.
    AdHoc,
}

/// Whether an entry last modified at `modified` still belongs to the day of `now`.
#[must_use]
pub fn is_fresh(modified: SystemTime, now: NaiveDateTime) -> bool {
    DateTime::<Local>::from(modified).date_naive() >= now.date()
}

impl FreshnessCache {
    #[inline]
    pub fn local(p: impl AsRef<Path>) -> Self {
        Self::Local(FileStore::open(p))
    }

    /// The first fresh, non-empty entry found, if any.
    pub async fn read(&self, now: NaiveDateTime) -> Option<String> {
        let Self::Local(store) = self else {
            return None;
        };
        let candidates = match store.candidates().await {
            Ok(c) => c,
            Err(e) => {
                log::debug!("cannot list cache dir {}: {e}", store.dir().display());
                return None;
            }
        };
        for path in candidates {
            match FileStore::modified(&path).await {
                Ok(modified) if is_fresh(modified, now) => {}
                Ok(_) => continue,
                Err(e) => {
                    log::debug!("cannot stat {}: {e}", path.display());
                    continue;
                }
            }
            match FileStore::read(&path).await {
                Ok(text) if !text.is_empty() => {
                    log::info!("Using cached menu from {}", path.display());
                    return Some(text);
                }
                Ok(_) => log::debug!("ignoring empty cache entry {}", path.display()),
                Err(e) => log::warn!("cannot read cache entry {}: {e}", path.display()),
            }
        }
        None
    }

    /// Stores `text` for the rest of the day, then drops entries from earlier days.
    pub async fn write(&self, now: NaiveDateTime, text: &str) {
        let Self::Local(store) = self else {
            return;
        };
        if text.is_empty() {
            log::warn!("refusing to cache an empty menu");
            return;
        }
        match store.create(text).await {
            Ok(path) => log::debug!("cached menu in {}", path.display()),
            Err(e) => {
                log::warn!("Error while writing cache: {e}");
                return;
            }
        }
        Self::prune(store, now).await;
    }

    async fn prune(store: &FileStore, now: NaiveDateTime) {
        let Ok(candidates) = store.candidates().await else {
            return;
        };
        for path in candidates {
            let Ok(modified) = FileStore::modified(&path).await else {
                continue;
            };
            if is_fresh(modified, now) {
                continue;
            }
            if let Err(e) = FileStore::remove(&path).await {
                log::debug!("cannot prune stale entry {}: {e}", path.display());
            }
        }
    }
}
