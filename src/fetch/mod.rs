use std::time::Duration;

use reqwest::Client;
use tracing::{instrument, Level};
use url::Url;

/// Where the menu is posted.
pub const MENU_URL: &str = "http://www.diefabrik.co.at/mittagsmenue/index.html";

static REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Source of raw menu markup.
#[allow(async_fn_in_trait)]
pub trait Fetch {
    async fn fetch(&self, url: &Url) -> crate::Result<String>;
}

pub fn make_client() -> crate::Result<Client> {
    Client::builder()
        .gzip(true)
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(From::from)
}

#[instrument(skip_all, fields(url = %url), level = Level::TRACE)]
pub async fn menu_page(client: &Client, url: &Url) -> Result<String, reqwest::Error> {
    let start = std::time::Instant::now();
    let response = client.get(url.clone()).send().await?.error_for_status()?;
    let text = response.text().await?;
    log::trace!("Got text of menu page in \t {:?}", start.elapsed());
    Ok(text)
}

impl Fetch for Client {
    async fn fetch(&self, url: &Url) -> crate::Result<String> {
        menu_page(self, url).await.map_err(From::from)
    }
}
