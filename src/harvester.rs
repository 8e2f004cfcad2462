use url::Url;

use crate::HarvestError;
use crate::config::HarvestConfig;
use crate::extract;
use crate::pacing::Pacer;
use crate::results::{self, JobRecord};
use crate::session::{PageTurn, Session};

/// Run the full harvest pipeline for one configuration
///
/// Connect failure aborts before anything is written. Once a session
/// exists the export step always runs, even when the page loop stopped
/// on an error, so partial results survive a mid-run failure.
pub async fn run(config: &HarvestConfig, pacer: &Pacer) -> Result<Vec<JobRecord>, HarvestError> {
    let base = Url::parse(&config.search_url)?;
    let session = Session::connect(&config.webdriver_url).await?;

    let mut records = Vec::new();
    let outcome = drive(&session, config, pacer, &base, &mut records).await;

    ::log::info!("Closing browser...");
    if let Err(e) = session.close().await {
        ::log::warn!("Failed to close the browser session: {}", e);
    }

    if let Err(e) = outcome {
        ::log::error!(
            "Run stopped early: {}; keeping the {} records harvested so far",
            e,
            records.len()
        );
    }

    results::export(&records, &config.output_path)?;
    Ok(records)
}

/// The page loop: SCRAPING until the ceiling or the last page
async fn drive(
    session: &Session,
    config: &HarvestConfig,
    pacer: &Pacer,
    base: &Url,
    records: &mut Vec<JobRecord>,
) -> Result<(), HarvestError> {
    session.open(&config.search_url, pacer).await?;
    let mut page: u32 = 1;

    loop {
        ::log::info!("============================================================");
        ::log::info!("Scraping page {}", page);
        ::log::info!("============================================================");

        ::log::info!("Waiting for job listings...");
        let cards = session.wait_for_listings(pacer.listing_wait_secs()).await?;
        session.reading_scroll(pacer).await?;
        ::log::info!("Found {} job listings on this page", cards.len());

        for (idx, card) in cards.iter().enumerate() {
            let ordinal = idx + 1;
            match card.html(false).await {
                Ok(snippet) => {
                    let record = extract::parse_listing(&snippet, base);
                    if record.is_empty() {
                        ::log::warn!(
                            "Listing {} on page {} yielded no extractable fields",
                            ordinal,
                            page
                        );
                    }
                    log_record(&record, ordinal, page);
                    records.push(record);
                }
                Err(e) => {
                    ::log::error!("Error for listing {} on page {}: {}", ordinal, page, e);
                }
            }
        }

        if ceiling_reached(page, config.max_pages) {
            ::log::info!("Reached the maximum page limit ({} pages); stopping", page);
            break;
        }

        ::log::info!("Finished scraping page {}. Looking for the next page...", page);
        match session.advance(pacer).await? {
            PageTurn::Advanced => {
                page += 1;
                ::log::info!("Moving to page {}...", page);
            }
            PageTurn::LastPage => {
                ::log::info!("Reached the last page (page {}). No more pages to scrape", page);
                break;
            }
        }
    }

    Ok(())
}

/// True when a ceiling is configured and the current page has hit it
fn ceiling_reached(page: u32, limit: Option<u32>) -> bool {
    limit.is_some_and(|max| page >= max)
}

fn log_record(record: &JobRecord, ordinal: usize, page: u32) {
    ::log::info!("=== Job {} (Page {}) ===", ordinal, page);
    ::log::info!("Title: {}", record.title);
    ::log::info!("Company: {}", record.company);
    ::log::info!("Location: {}", record.location);
    ::log::info!("Link: {}", record.link);
}
