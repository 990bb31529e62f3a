use std::env;

use clap::Parser;
use url::Url;

use crate::{cache::FreshnessCache, fetch::MENU_URL};

/// Selects the non-persistent cache.
const MEMORY_CACHE: &str = ":memory:";

#[derive(Parser, Debug)]
#[command(name = "fabrik", about = "Print today's lunch menu of Die Fabrik")]
pub struct Cli {
    /// Always download, ignore today's cached menu
    #[arg(long)]
    pub force: bool,
    /// Cache directory, or ":memory:" to disable caching (default: OS temp dir)
    #[arg(long, env = "FABRIK_CACHE")]
    pub cache: Option<String>,
    /// Menu page to scrape
    #[arg(long, env = "FABRIK_URL", default_value = MENU_URL)]
    pub url: String,
}

#[derive(Debug)]
pub struct Config {
    pub url: Url,
    pub cache: FreshnessCache,
    pub force: bool,
}

impl Config {
    pub fn from_cli(cli: Cli) -> crate::Result<Self> {
        let url: Url = cli.url.parse()?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(crate::Error::Config(format!(
                "unsupported url scheme {}",
                url.scheme()
            )));
        }
        let cache = match cli.cache.as_deref() {
            Some(MEMORY_CACHE) => FreshnessCache::AdHoc,
            Some(p) => FreshnessCache::local(p),
            None => FreshnessCache::local(env::temp_dir()),
        };
        Ok(Self {
            url,
            cache,
            force: cli.force,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> crate::Result<Config> {
        let cli = Cli::try_parse_from(std::iter::once("fabrik").chain(args.iter().copied()))
            .expect("arguments should parse");
        Config::from_cli(cli)
    }

    #[test]
    fn test_explicit_arguments() {
        let config = parse(&["--force", "--cache", "/var/tmp/fabrik", "--url", MENU_URL]).unwrap();
        assert!(config.force);
        assert_eq!(config.url.as_str(), MENU_URL);
        assert!(
            matches!(config.cache, FreshnessCache::Local(ref s) if s.dir() == std::path::Path::new("/var/tmp/fabrik"))
        );
    }

    #[test]
    fn test_memory_cache() {
        let config = parse(&["--cache", ":memory:"]).unwrap();
        assert!(matches!(config.cache, FreshnessCache::AdHoc));
        assert!(!config.force);
    }

    #[test]
    fn test_bad_url() {
        assert!(matches!(
            parse(&["--url", "not a url"]),
            Err(crate::Error::Config(_))
        ));
        assert!(matches!(
            parse(&["--url", "ftp://www.diefabrik.co.at/"]),
            Err(crate::Error::Config(_))
        ));
    }
}
