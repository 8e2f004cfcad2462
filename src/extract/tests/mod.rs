mod cascade_tests;

use scraper::Html;
use url::Url;

/// Parse a single listing card fixture
pub fn fragment(html: &str) -> Html {
    Html::parse_fragment(html)
}

pub fn base() -> Url {
    Url::parse("https://www.indeed.com/jobs?q=software%20developer").unwrap()
}
