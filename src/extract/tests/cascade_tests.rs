use super::fragment;
use crate::extract::{first_match, strategies};

#[test]
fn test_title_id_prefix_strategy() {
    let doc = fragment(
        "<div class=\"job_seen_beacon\">\
           <h2 class=\"jobTitle\"><span id=\"jobTitle-abc123\">Software Developer</span></h2>\
         </div>",
    );
    let root = doc.root_element();

    assert_eq!(
        strategies::title_by_id_prefix(root),
        Some("Software Developer".to_string())
    );
    // The structural walk finds the same span
    assert_eq!(
        strategies::title_by_descendant_span(root),
        Some("Software Developer".to_string())
    );
}

#[test]
fn test_title_id_prefix_requires_the_prefix() {
    let doc = fragment(
        "<div class=\"job_seen_beacon\">\
           <h2><span id=\"heading-1\">Not a job title span</span></h2>\
         </div>",
    );
    let root = doc.root_element();

    assert_eq!(strategies::title_by_id_prefix(root), None);
    assert_eq!(strategies::title_by_descendant_span(root), None);
    // The last-resort heading strategy still fires
    assert_eq!(
        strategies::title_by_any_heading(root),
        Some("Not a job title span".to_string())
    );
}

#[test]
fn test_title_heading_class_matches_substring() {
    let doc = fragment(
        "<div class=\"job_seen_beacon\">\
           <h2 class=\"jobTitle css-198pbd\">Data Engineer</h2>\
         </div>",
    );
    assert_eq!(
        strategies::title_by_heading_class(doc.root_element()),
        Some("Data Engineer".to_string())
    );
}

#[test]
fn test_company_testid_strategy() {
    let doc = fragment(
        "<div class=\"job_seen_beacon\">\
           <span data-testid=\"company-name\">  Acme Corp  </span>\
         </div>",
    );
    let root = doc.root_element();

    // squeeze collapses the padding before first_match ever sees it
    assert_eq!(
        strategies::company_by_testid(root),
        Some("Acme Corp".to_string())
    );
    assert_eq!(
        strategies::company_by_descendant_span(root),
        Some("Acme Corp".to_string())
    );
    assert_eq!(
        strategies::company_by_dom_walk(root),
        Some("Acme Corp".to_string())
    );
}

#[test]
fn test_company_dom_walk_accepts_any_tag() {
    // testid carried by a div: the span-restricted tiers miss, the walk hits
    let doc = fragment(
        "<div class=\"job_seen_beacon\">\
           <div data-testid=\"company-name\">Globex</div>\
         </div>",
    );
    let root = doc.root_element();

    assert_eq!(strategies::company_by_testid(root), None);
    assert_eq!(strategies::company_by_descendant_span(root), None);
    assert_eq!(strategies::company_by_dom_walk(root), Some("Globex".to_string()));
}

#[test]
fn test_company_legacy_class_strategies() {
    let doc = fragment(
        "<div class=\"job_seen_beacon\">\
           <span class=\"companyName\">Initech</span>\
         </div>",
    );
    let root = doc.root_element();
    assert_eq!(
        strategies::company_by_legacy_class(root),
        Some("Initech".to_string())
    );

    let doc = fragment(
        "<div class=\"job_seen_beacon\">\
           <span class=\"css-1x7z1ps companyNameWrapped\">Initech</span>\
         </div>",
    );
    let root = doc.root_element();
    assert_eq!(strategies::company_by_legacy_class(root), None);
    assert_eq!(
        strategies::company_by_class_substring(root),
        Some("Initech".to_string())
    );
}

#[test]
fn test_location_cascade_mirrors_company_shape() {
    let doc = fragment(
        "<div class=\"job_seen_beacon\">\
           <div data-testid=\"text-location\">Austin, TX</div>\
           <div class=\"companyLocation\">Ignored, the testid tier wins</div>\
         </div>",
    );
    let root = doc.root_element();

    assert_eq!(
        strategies::location_by_testid(root),
        Some("Austin, TX".to_string())
    );
    assert_eq!(
        first_match(root, strategies::LOCATION_CASCADE),
        Some("Austin, TX".to_string())
    );
}

#[test]
fn test_first_match_prefers_the_earliest_tier() {
    // Both the id-prefix span and a classed heading are present; tier 1 wins
    let doc = fragment(
        "<div class=\"job_seen_beacon\">\
           <h2 class=\"jobTitle\"><span id=\"jobTitle-1\">From tier one</span></h2>\
           <h2 class=\"jobTitle extra\">From tier three</h2>\
         </div>",
    );
    assert_eq!(
        first_match(doc.root_element(), strategies::TITLE_CASCADE),
        Some("From tier one".to_string())
    );
}

#[test]
fn test_first_match_skips_empty_text() {
    // Tier 1 matches an element with only whitespace; tier 4 supplies the value
    let doc = fragment(
        "<div class=\"job_seen_beacon\">\
           <span id=\"jobTitle-1\">   </span>\
           <h2>Fallback Title</h2>\
         </div>",
    );
    assert_eq!(
        first_match(doc.root_element(), strategies::TITLE_CASCADE),
        Some("Fallback Title".to_string())
    );
}

#[test]
fn test_first_match_returns_none_when_all_tiers_miss() {
    let doc = fragment("<div class=\"job_seen_beacon\"><p>No structured fields</p></div>");
    let root = doc.root_element();

    assert_eq!(first_match(root, strategies::TITLE_CASCADE), None);
    assert_eq!(first_match(root, strategies::COMPANY_CASCADE), None);
    assert_eq!(first_match(root, strategies::LOCATION_CASCADE), None);
}

#[test]
fn test_title_link_requires_anchor_in_heading() {
    let doc = fragment(
        "<div class=\"job_seen_beacon\">\
           <h2 class=\"jobTitle\"><a href=\"/rc/clk?jk=abc\"><span>Dev</span></a></h2>\
           <a href=\"/cmp/acme\">company page link, not the title link</a>\
         </div>",
    );
    assert_eq!(
        strategies::title_link(doc.root_element()),
        Some("/rc/clk?jk=abc".to_string())
    );

    let doc = fragment(
        "<div class=\"job_seen_beacon\">\
           <h2 class=\"jobTitle\"><span>Dev</span></h2>\
         </div>",
    );
    assert_eq!(strategies::title_link(doc.root_element()), None);
}

#[test]
fn test_multiline_text_is_collapsed() {
    let doc = fragment(
        "<div class=\"job_seen_beacon\">\
           <h2 class=\"jobTitle\"><span id=\"jobTitle-9\">Senior\n      Rust\n      Engineer</span></h2>\
         </div>",
    );
    assert_eq!(
        strategies::title_by_id_prefix(doc.root_element()),
        Some("Senior Rust Engineer".to_string())
    );
}
