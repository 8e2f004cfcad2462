pub mod strategies;

#[cfg(test)]
mod tests;

use scraper::{ElementRef, Html};
use url::Url;

use crate::results::JobRecord;

/// CSS selector for one job listing card on a results page
pub const LISTING_SELECTOR: &str = "div.job_seen_beacon";

/// A single field-extraction attempt over a listing subtree
///
/// Strategies are pure: a miss is `None`, never an error. Engine
/// failures are handled before the markup reaches this layer.
pub type Strategy = for<'a> fn(ElementRef<'a>) -> Option<String>;

/// Apply a cascade in order; the first non-empty trimmed result wins
pub fn first_match(listing: ElementRef<'_>, cascade: &[(&str, Strategy)]) -> Option<String> {
    for (name, strategy) in cascade {
        if let Some(text) = strategy(listing) {
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                ::log::debug!("Field resolved by '{}' strategy", name);
                return Some(trimmed.to_string());
            }
        }
    }
    None
}

/// Parse one listing card's outer HTML into a field-complete record
///
/// Relative posting links are resolved against `base`.
pub fn parse_listing(snippet: &str, base: &Url) -> JobRecord {
    let fragment = Html::parse_fragment(snippet);
    extract_from(fragment.root_element(), base)
}

/// Run every field cascade over an already-parsed listing subtree
pub fn extract_from(listing: ElementRef<'_>, base: &Url) -> JobRecord {
    let title = first_match(listing, strategies::TITLE_CASCADE);
    let company = first_match(listing, strategies::COMPANY_CASCADE);
    let location = first_match(listing, strategies::LOCATION_CASCADE);
    let link = strategies::title_link(listing).map(|href| resolve_link(&href, base));

    JobRecord::new(title, company, location, link)
}

/// Turn an href into an absolute link where possible
fn resolve_link(href: &str, base: &Url) -> String {
    match base.join(href) {
        Ok(resolved) => resolved.to_string(),
        Err(_) => href.to_string(),
    }
}
