use rand::Rng;
use std::time::Duration;
use tokio::time::sleep;

use crate::config::{Band, PacingConfig};

/// Randomized delay policy applied between browser actions
///
/// Sampling and sleeping live behind this struct so the harvest loop can
/// be exercised in tests with a zeroed policy.
#[derive(Debug, Clone)]
pub struct Pacer {
    config: PacingConfig,
}

impl Pacer {
    pub fn new(config: PacingConfig) -> Self {
        Self { config }
    }

    /// A policy whose every delay and offset is zero
    pub fn zeroed() -> Self {
        Self {
            config: PacingConfig {
                page_settle_secs: 0,
                listing_wait_secs: 0,
                scroll_pause_ms: Band::new(0, 0),
                scroll_return_pause_ms: Band::new(0, 0),
                reading_scroll_px: Band::new(0, 0),
                reading_pause_ms: Band::new(0, 0),
                pre_click_ms: Band::new(0, 0),
                post_click_ms: Band::new(0, 0),
            },
        }
    }

    /// Draw a value from an inclusive band
    pub fn sample(band: Band) -> u64 {
        if band.max <= band.min {
            return band.min;
        }
        rand::thread_rng().gen_range(band.min..=band.max)
    }

    /// Fixed settle after the first navigation
    pub async fn page_settle(&self) {
        let secs = self.config.page_settle_secs;
        if secs > 0 {
            ::log::info!("Waiting {} seconds for the page to settle...", secs);
        }
        sleep(Duration::from_secs(secs)).await;
    }

    pub async fn scroll_pause(&self) {
        sleep_ms(Self::sample(self.config.scroll_pause_ms)).await;
    }

    pub async fn scroll_return_pause(&self) {
        sleep_ms(Self::sample(self.config.scroll_return_pause_ms)).await;
    }

    /// Pixel offset for the pre-extraction reading scroll
    pub fn reading_offset(&self) -> u64 {
        Self::sample(self.config.reading_scroll_px)
    }

    pub async fn reading_pause(&self) {
        sleep_ms(Self::sample(self.config.reading_pause_ms)).await;
    }

    /// Pause between locating the next-page control and clicking it
    pub async fn pre_click(&self) {
        sleep_ms(Self::sample(self.config.pre_click_ms)).await;
    }

    /// Render wait after clicking through to the next page
    pub async fn post_click(&self) {
        let ms = Self::sample(self.config.post_click_ms);
        ::log::info!("Waiting {:.1} seconds for the next page to load...", ms as f64 / 1000.0);
        sleep_ms(ms).await;
    }

    pub fn listing_wait_secs(&self) -> u64 {
        self.config.listing_wait_secs
    }
}

async fn sleep_ms(ms: u64) {
    sleep(Duration::from_millis(ms)).await;
}
