use clap::Parser;
use harvest_jobs::config::DEFAULT_SEARCH_URL;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "harvest-jobs")]
#[command(about = "Harvests job listings from a search results page into JSON")]
#[command(version)]
pub struct Args {
    /// Search results URL to scrape
    #[arg(default_value = DEFAULT_SEARCH_URL)]
    pub url: String,

    /// Maximum number of result pages to visit
    #[arg(short, long, default_value_t = 10)]
    pub max_pages: u32,

    /// Walk every available page instead of honoring the page limit
    #[arg(long)]
    pub all_pages: bool,

    /// Where to write the JSON export
    #[arg(short, long, default_value = "job_listings.json")]
    pub output: PathBuf,
}

impl Args {
    /// The effective page ceiling; `None` means unbounded
    pub fn page_limit(&self) -> Option<u32> {
        if self.all_pages {
            None
        } else {
            Some(self.max_pages)
        }
    }
}
