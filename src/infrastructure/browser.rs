//! Headless-browser page acquisition for dynamically rendered results
//!
//! The fare aggregator renders result cards client-side and lazy-loads
//! more as the page scrolls, so a static fetch sees none of them. This
//! fetcher drives a dedicated headless Chrome per request: navigate, wait
//! out the initial render, then scroll-and-wait until the page height
//! stops growing. Height stability is a heuristic, not a completion
//! signal; the round cap bounds the worst case.
//!
//! The `Browser` value owns the Chrome process. Dropping it kills the
//! process, so every exit path of [`DynamicPageFetcher::fetch_rendered`]
//! releases the OS resources.

use std::ffi::OsStr;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use headless_chrome::{Browser, LaunchOptions, Tab};
use tracing::{debug, info, warn};

use crate::infrastructure::config::BrowserConfig;

/// Fetcher for client-side-rendered, lazily loaded search-result pages.
///
/// The API of the underlying browser crate is synchronous; callers on an
/// async runtime must run [`fetch_rendered`](Self::fetch_rendered) on a
/// blocking thread.
pub struct DynamicPageFetcher {
    user_agent: String,
    config: BrowserConfig,
}

impl DynamicPageFetcher {
    pub fn new(user_agent: String, config: BrowserConfig) -> Self {
        Self { user_agent, config }
    }

    /// Navigate to `url` in a fresh headless browser and return the page
    /// HTML once lazy-loaded content has stopped appearing.
    pub fn fetch_rendered(&self, url: &str) -> Result<String> {
        let options = LaunchOptions::default_builder()
            .headless(true)
            .sandbox(false)
            .args(vec![
                OsStr::new("--disable-gpu"),
                OsStr::new("--disable-dev-shm-usage"),
            ])
            .build()
            .map_err(|e| anyhow!("failed to assemble browser launch options: {e}"))?;

        let browser = Browser::new(options).context("failed to launch headless browser")?;
        let tab = browser.new_tab().context("failed to open browser tab")?;
        tab.set_user_agent(&self.user_agent, None, None)
            .context("failed to set browser user agent")?;

        info!("navigating to {url}");
        tab.navigate_to(url)
            .with_context(|| format!("failed to navigate to {url}"))?;
        tab.wait_until_navigated()
            .with_context(|| format!("navigation to {url} did not complete"))?;

        // Unconditional settle delay for the initial client-side render.
        self.settle();

        self.scroll_to_stable_height(&tab)?;

        let content = tab
            .get_content()
            .context("failed to read rendered page content")?;
        debug!("acquired rendered page ({} chars)", content.len());
        Ok(content)
        // browser drops here on every path, killing the Chrome process
    }

    /// Scroll to the bottom repeatedly until the page height is unchanged
    /// between two consecutive rounds.
    fn scroll_to_stable_height(&self, tab: &Tab) -> Result<()> {
        let mut last_height = self.page_height(tab)?;

        for round in 1..=self.config.max_scroll_rounds {
            tab.evaluate("window.scrollTo(0, document.body.scrollHeight)", false)
                .context("failed to scroll page")?;
            self.settle();

            let new_height = self.page_height(tab)?;
            debug!("scroll round {round}: height {last_height} -> {new_height}");

            if new_height == last_height {
                return Ok(());
            }
            last_height = new_height;
        }

        warn!(
            "page height still growing after {} scroll rounds, extracting what loaded",
            self.config.max_scroll_rounds
        );
        Ok(())
    }

    fn page_height(&self, tab: &Tab) -> Result<u64> {
        let result = tab
            .evaluate("document.body.scrollHeight", false)
            .context("failed to read page height")?;
        Ok(result
            .value
            .and_then(|v| v.as_f64())
            .map(|h| h as u64)
            .unwrap_or(0))
    }

    /// Block for a uniformly random delay within the configured range.
    fn settle(&self) {
        let delay_ms = fastrand::u64(self.config.settle_delay_min_ms..self.config.settle_delay_max_ms);
        std::thread::sleep(Duration::from_millis(delay_ms));
    }
}
