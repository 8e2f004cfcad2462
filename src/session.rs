use fantoccini::elements::Element;
use fantoccini::error::CmdError;
use fantoccini::{Client, ClientBuilder, Locator};
use serde_json::json;
use std::time::Duration;

use crate::HarvestError;
use crate::extract::LISTING_SELECTOR;
use crate::pacing::Pacer;

/// CSS selector for the pagination control leading to the next page
pub const NEXT_PAGE_SELECTOR: &str = "a[data-testid='pagination-page-next']";

/// Fixed client identification string presented to the target site
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Applied after navigation; the scripted half of automation masking
const WEBDRIVER_MASK: &str =
    "Object.defineProperty(navigator, 'webdriver', { get: () => undefined });";

/// Result of trying to move to the next results page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageTurn {
    /// The control was clicked and the next page is loading
    Advanced,
    /// No next-page control exists: normal end of pagination
    LastPage,
}

/// A live WebDriver browser session configured for scraping
pub struct Session {
    client: Client,
}

impl Session {
    /// Connect to a WebDriver server and start a configured browser
    ///
    /// Startup failure is fatal for the run; there is no retry.
    pub async fn connect(webdriver_url: &str) -> Result<Self, HarvestError> {
        ::log::info!("Connecting to WebDriver at {}", webdriver_url);

        let client = ClientBuilder::native()
            .capabilities(chrome_capabilities())
            .connect(webdriver_url)
            .await
            .map_err(HarvestError::SessionStart)?;

        Ok(Self { client })
    }

    /// Load the search URL and settle before any extraction
    ///
    /// The fixed settle gives challenge/verification screens time to
    /// resolve; the scroll down/up pair breaks the idle signature.
    pub async fn open(&self, url: &str, pacer: &Pacer) -> Result<(), HarvestError> {
        ::log::info!("Navigating to {}", url);
        self.client.goto(url).await?;
        self.client.execute(WEBDRIVER_MASK, vec![]).await?;
        pacer.page_settle().await;

        self.client.execute("window.scrollTo(0, 500);", vec![]).await?;
        pacer.scroll_pause().await;
        self.client.execute("window.scrollTo(0, 0);", vec![]).await?;
        pacer.scroll_return_pause().await;
        Ok(())
    }

    /// Wait up to `timeout_secs` for listing cards, then collect them
    /// in DOM order
    pub async fn wait_for_listings(
        &self,
        timeout_secs: u64,
    ) -> Result<Vec<Element>, HarvestError> {
        self.client
            .wait()
            .at_most(Duration::from_secs(timeout_secs))
            .for_element(Locator::Css(LISTING_SELECTOR))
            .await
            .map_err(|e| match e {
                CmdError::WaitTimeout => HarvestError::ListingsTimeout(timeout_secs),
                other => other.into(),
            })?;

        Ok(self.client.find_all(Locator::Css(LISTING_SELECTOR)).await?)
    }

    /// Small randomized scroll before reading a page's cards
    pub async fn reading_scroll(&self, pacer: &Pacer) -> Result<(), HarvestError> {
        let script = format!("window.scrollTo(0, {});", pacer.reading_offset());
        self.client.execute(&script, vec![]).await?;
        pacer.reading_pause().await;
        Ok(())
    }

    /// Try to move to the next results page
    ///
    /// Only the engine's no-such-element answer means the last page was
    /// reached; any other failure is a genuine error.
    pub async fn advance(&self, pacer: &Pacer) -> Result<PageTurn, HarvestError> {
        let next = match self.client.find(Locator::Css(NEXT_PAGE_SELECTOR)).await {
            Ok(element) => element,
            Err(e) if e.is_no_such_element() => return Ok(PageTurn::LastPage),
            Err(e) => return Err(e.into()),
        };

        let target = serde_json::to_value(&next).map_err(CmdError::Json)?;
        self.client
            .execute("arguments[0].scrollIntoView(true);", vec![target])
            .await?;

        pacer.pre_click().await;
        next.click().await?;
        pacer.post_click().await;
        Ok(PageTurn::Advanced)
    }

    /// Shut the browser session down
    pub async fn close(self) -> Result<(), HarvestError> {
        self.client.close().await?;
        Ok(())
    }
}

/// W3C capabilities with the anti-automation Chrome configuration
pub fn chrome_capabilities() -> serde_json::Map<String, serde_json::Value> {
    let mut caps = serde_json::Map::new();
    caps.insert(
        "goog:chromeOptions".to_string(),
        json!({
            "args": chrome_args(),
            "excludeSwitches": ["enable-automation"],
            "useAutomationExtension": false,
            "prefs": {
                "profile.default_content_setting_values.notifications": 2,
                "credentials_enable_service": false,
                "profile.password_manager_enabled": false,
            },
        }),
    );
    caps
}

fn chrome_args() -> Vec<String> {
    vec![
        "--start-maximized".to_string(),
        "--disable-blink-features=AutomationControlled".to_string(),
        "--disable-dev-shm-usage".to_string(),
        "--no-sandbox".to_string(),
        "--disable-gpu".to_string(),
        "--disable-web-security".to_string(),
        "--allow-running-insecure-content".to_string(),
        format!("user-agent={}", USER_AGENT),
    ]
}
