use std::{ops::Deref, sync::OnceLock};

use regex::Regex;

/// A built-in pattern, compiled the first time it is used.
///
/// Only meant for `static` items holding patterns that ship with the binary, so a
/// pattern that fails to compile is a bug and panics.
pub(super) struct LazyRegex {
    pattern: &'static str,
    compiled: OnceLock<Regex>,
}

impl LazyRegex {
    pub(super) const fn new(pattern: &'static str) -> Self {
        Self {
            pattern,
            compiled: OnceLock::new(),
        }
    }
}

impl Deref for LazyRegex {
    type Target = Regex;

    fn deref(&self) -> &Regex {
        self.compiled.get_or_init(|| {
            Regex::new(self.pattern)
                .unwrap_or_else(|e| panic!("built-in pattern {:?} is invalid: {e}", self.pattern))
        })
    }
}

/// `lazy_regex!(NAME = "pattern");` declares a `static` [`LazyRegex`].
macro_rules! lazy_regex {
    ($($name: ident = $pattern: expr;)+) => {
        $(
            static $name: $crate::parse::lazy_regex::LazyRegex =
                $crate::parse::lazy_regex::LazyRegex::new($pattern);
        )+
    };
}
pub(crate) use lazy_regex;
