// Re-export modules
pub mod config;
pub mod extract;
pub mod harvester;
pub mod pacing;
pub mod results;
pub mod session;

// Re-export commonly used types for convenience
pub use config::HarvestConfig;
pub use results::JobRecord;

use std::path::PathBuf;

use crate::pacing::Pacer;

/// Errors surfaced by a harvest run
#[derive(thiserror::Error, Debug)]
pub enum HarvestError {
    /// The WebDriver session could not be started; fatal, no retry
    #[error("could not start a WebDriver session: {0}")]
    SessionStart(#[from] fantoccini::error::NewSessionError),

    /// An unexpected browser command failure
    #[error("browser command failed: {0}")]
    Browser(#[from] fantoccini::error::CmdError),

    /// No listing card appeared within the bounded wait
    #[error("no job listings appeared within {0} seconds")]
    ListingsTimeout(u64),

    /// The configured search URL does not parse
    #[error("invalid search URL: {0}")]
    BadUrl(#[from] url::ParseError),

    /// The output file could not be written
    #[error("could not write {}: {}", path.display(), source)]
    Export {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Builder for configuring and running a harvest
pub struct Harvest {
    config: HarvestConfig,
}

impl Harvest {
    /// Create a new builder for the given search results URL
    pub fn new(search_url: &str) -> Self {
        Self {
            config: HarvestConfig::new(search_url),
        }
    }

    /// Apply a full configuration
    pub fn with_config(mut self, config: HarvestConfig) -> Self {
        self.config = config;
        self
    }

    /// Load the full configuration from a JSON file
    pub fn with_config_file<P: AsRef<std::path::Path>>(
        mut self,
        path: P,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        self.config = HarvestConfig::from_file(path)?;
        Ok(self)
    }

    /// Set the page ceiling; `None` walks every available page
    pub fn with_max_pages(mut self, limit: Option<u32>) -> Self {
        self.config.max_pages = limit;
        self
    }

    /// Set where the JSON export is written
    pub fn with_output<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.config.output_path = path.into();
        self
    }

    /// Override the WebDriver endpoint
    pub fn with_webdriver_url(mut self, url: &str) -> Self {
        self.config.webdriver_url = url.to_string();
        self
    }

    /// Run the pipeline and return the harvested records
    pub async fn run(self) -> Result<Vec<JobRecord>, HarvestError> {
        let mut config = self.config;

        // Override the WebDriver URL with an environment variable if provided
        if let Ok(webdriver_url) = std::env::var("WEBDRIVER_URL") {
            if !webdriver_url.is_empty() {
                config.webdriver_url = webdriver_url;
            }
        }

        let pacer = Pacer::new(config.pacing.clone());
        harvester::run(&config, &pacer).await
    }
}
