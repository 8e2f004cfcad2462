//! Per-field selector cascades for job listing cards.
//!
//! The target site's markup is not stable; each field carries an ordered
//! list of strategies from most to least specific, so selector drift
//! degrades a field to its sentinel instead of failing the record.

use scraper::{ElementRef, Selector};

use super::Strategy;

/// Title strategies, most specific first
pub const TITLE_CASCADE: &[(&str, Strategy)] = &[
    ("id-prefix", title_by_id_prefix),
    ("descendant-span", title_by_descendant_span),
    ("heading-class", title_by_heading_class),
    ("any-heading", title_by_any_heading),
];

/// Company strategies; the data-testid attribute is the most reliable
pub const COMPANY_CASCADE: &[(&str, Strategy)] = &[
    ("testid", company_by_testid),
    ("descendant-span", company_by_descendant_span),
    ("dom-walk", company_by_dom_walk),
    ("legacy-class", company_by_legacy_class),
    ("class-substring", company_by_class_substring),
];

/// Location strategies, same shape as the company cascade
pub const LOCATION_CASCADE: &[(&str, Strategy)] = &[
    ("testid", location_by_testid),
    ("descendant-div", location_by_descendant_div),
    ("dom-walk", location_by_dom_walk),
    ("legacy-class", location_by_legacy_class),
    ("class-substring", location_by_class_substring),
];

// Title

pub fn title_by_id_prefix(listing: ElementRef<'_>) -> Option<String> {
    select_text(listing, "span[id^='jobTitle-']")
}

pub fn title_by_descendant_span(listing: ElementRef<'_>) -> Option<String> {
    descendant_elements(listing)
        .find(|el| {
            el.value().name() == "span"
                && el.value().attr("id").is_some_and(|id| id.starts_with("jobTitle-"))
        })
        .map(squeeze)
}

pub fn title_by_heading_class(listing: ElementRef<'_>) -> Option<String> {
    select_text(listing, "h2[class*='jobTitle']")
}

pub fn title_by_any_heading(listing: ElementRef<'_>) -> Option<String> {
    select_text(listing, "h2")
}

// Company

pub fn company_by_testid(listing: ElementRef<'_>) -> Option<String> {
    select_text(listing, "span[data-testid='company-name']")
}

pub fn company_by_descendant_span(listing: ElementRef<'_>) -> Option<String> {
    descendant_with_testid(listing, Some("span"), "company-name")
}

pub fn company_by_dom_walk(listing: ElementRef<'_>) -> Option<String> {
    descendant_with_testid(listing, None, "company-name")
}

pub fn company_by_legacy_class(listing: ElementRef<'_>) -> Option<String> {
    select_text(listing, "span.companyName")
}

pub fn company_by_class_substring(listing: ElementRef<'_>) -> Option<String> {
    select_text(listing, "span[class*='companyName']")
}

// Location

pub fn location_by_testid(listing: ElementRef<'_>) -> Option<String> {
    select_text(listing, "div[data-testid='text-location']")
}

pub fn location_by_descendant_div(listing: ElementRef<'_>) -> Option<String> {
    descendant_with_testid(listing, Some("div"), "text-location")
}

pub fn location_by_dom_walk(listing: ElementRef<'_>) -> Option<String> {
    descendant_with_testid(listing, None, "text-location")
}

pub fn location_by_legacy_class(listing: ElementRef<'_>) -> Option<String> {
    select_text(listing, "div.companyLocation")
}

pub fn location_by_class_substring(listing: ElementRef<'_>) -> Option<String> {
    select_text(listing, "div[class*='companyLocation']")
}

// Link

/// The anchor nested inside the listing's title heading
pub fn title_link(listing: ElementRef<'_>) -> Option<String> {
    let selector = Selector::parse("h2[class*='jobTitle'] a").unwrap();
    listing
        .select(&selector)
        .next()
        .and_then(|a| a.value().attr("href"))
        .map(|href| href.trim().to_string())
        .filter(|href| !href.is_empty())
}

// Shared lookup helpers

fn select_text(listing: ElementRef<'_>, css: &str) -> Option<String> {
    let selector = Selector::parse(css).unwrap();
    listing.select(&selector).next().map(squeeze)
}

fn descendant_elements<'a>(
    listing: ElementRef<'a>,
) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    listing.descendants().filter_map(ElementRef::wrap)
}

/// Programmatic walk for a `data-testid` carrier, optionally tag-restricted
fn descendant_with_testid(
    listing: ElementRef<'_>,
    tag: Option<&str>,
    testid: &str,
) -> Option<String> {
    descendant_elements(listing)
        .filter(|el| tag.is_none_or(|t| el.value().name() == t))
        .find(|el| el.value().attr("data-testid") == Some(testid))
        .map(squeeze)
}

/// Collapse an element's text nodes into single-spaced text
fn squeeze(el: ElementRef<'_>) -> String {
    el.text()
        .collect::<Vec<_>>()
        .join(" ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
