use headless_chrome;
use anyhow;
use thiserror::Error;
use tracing::{debug, info};
use crate::webpage::WebPage;

#[derive(Error, Debug)]
pub enum BrowserError {
    #[error("ChromeError: {0}")]
    ChromeError(#[from] anyhow::Error),
}
pub type Result<T> = std::result::Result<T, BrowserError>;

/// One headless Chrome process.
///
/// Owning this value owns the process: the inner `headless_chrome::Browser`
/// kills it when dropped, whichever way the caller leaves its scope.
pub struct Browser (headless_chrome::Browser);

impl Browser {

    pub fn new() -> Result<Self> {
        let browser = headless_chrome::Browser::default()?;
        info!(pid = ?browser.get_process_id(), "launched headless browser");
        Ok(Self(browser))
    }

    /// Opens a tab and navigates it to `url`.
    ///
    /// Returns once the page has loaded and the network is almost idle.
    pub fn open_page(&self, url: &str) -> Result<WebPage> {

        let tab = self.0.new_tab()?;

        debug!(url, "navigating");
        tab.navigate_to(url)?.wait_until_navigated()?;
        info!(url, "page loaded");

        Ok(WebPage::from_tab(tab))
    }

    pub fn process_id(&self) -> Option<u32> {
        self.0.get_process_id()
    }
}
