use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Search URL used when none is supplied on the command line
pub const DEFAULT_SEARCH_URL: &str =
    "https://www.indeed.com/jobs?q=software%20developer&vjk=7b8ec8506fc0214d";

/// Configuration for a harvest run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarvestConfig {
    /// Search results URL to open first
    pub search_url: String,

    /// Maximum number of result pages to visit; None walks every page
    #[serde(default = "default_max_pages")]
    pub max_pages: Option<u32>,

    /// URL for the WebDriver instance
    #[serde(default = "default_webdriver_url")]
    pub webdriver_url: String,

    /// Where the JSON export is written
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,

    /// Delay bands for human-like pacing
    #[serde(default)]
    pub pacing: PacingConfig,
}

/// An inclusive sampling range for randomized pacing values
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Band {
    pub min: u64,
    pub max: u64,
}

impl Band {
    pub const fn new(min: u64, max: u64) -> Self {
        Self { min, max }
    }
}

/// Named pacing constants
///
/// These are tuning heuristics for bot-detection-sensitive targets, not
/// correctness contracts; the defaults mirror field-tested values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PacingConfig {
    /// Fixed settle after first navigation, sized for challenge screens
    #[serde(default = "default_page_settle_secs")]
    pub page_settle_secs: u64,

    /// Bounded wait for listing cards to appear on each page
    #[serde(default = "default_listing_wait_secs")]
    pub listing_wait_secs: u64,

    /// Pause after the initial scroll down, in milliseconds
    #[serde(default = "default_scroll_pause_ms")]
    pub scroll_pause_ms: Band,

    /// Pause after scrolling back to the top, in milliseconds
    #[serde(default = "default_scroll_return_pause_ms")]
    pub scroll_return_pause_ms: Band,

    /// Offset of the pre-extraction "reading" scroll, in pixels
    #[serde(default = "default_reading_scroll_px")]
    pub reading_scroll_px: Band,

    /// Pause after the reading scroll, in milliseconds
    #[serde(default = "default_reading_pause_ms")]
    pub reading_pause_ms: Band,

    /// Pause between locating and clicking the next-page control
    #[serde(default = "default_pre_click_ms")]
    pub pre_click_ms: Band,

    /// Render wait after clicking through to the next page
    #[serde(default = "default_post_click_ms")]
    pub post_click_ms: Band,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            page_settle_secs: default_page_settle_secs(),
            listing_wait_secs: default_listing_wait_secs(),
            scroll_pause_ms: default_scroll_pause_ms(),
            scroll_return_pause_ms: default_scroll_return_pause_ms(),
            reading_scroll_px: default_reading_scroll_px(),
            reading_pause_ms: default_reading_pause_ms(),
            pre_click_ms: default_pre_click_ms(),
            post_click_ms: default_post_click_ms(),
        }
    }
}

fn default_max_pages() -> Option<u32> {
    Some(10)
}

fn default_webdriver_url() -> String {
    "http://localhost:4444".to_string()
}

fn default_output_path() -> PathBuf {
    PathBuf::from("job_listings.json")
}

fn default_page_settle_secs() -> u64 {
    8
}

fn default_listing_wait_secs() -> u64 {
    20
}

fn default_scroll_pause_ms() -> Band {
    Band::new(1000, 2000)
}

fn default_scroll_return_pause_ms() -> Band {
    Band::new(500, 1500)
}

fn default_reading_scroll_px() -> Band {
    Band::new(200, 400)
}

fn default_reading_pause_ms() -> Band {
    Band::new(500, 1000)
}

fn default_pre_click_ms() -> Band {
    Band::new(1500, 3000)
}

fn default_post_click_ms() -> Band {
    Band::new(6000, 9000)
}

impl HarvestConfig {
    /// Create a configuration with default values for the given URL
    pub fn new(search_url: &str) -> Self {
        Self {
            search_url: search_url.to_string(),
            max_pages: default_max_pages(),
            webdriver_url: default_webdriver_url(),
            output_path: default_output_path(),
            pacing: PacingConfig::default(),
        }
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }
}
