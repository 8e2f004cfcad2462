use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::HarvestError;

/// Placeholder written when no title strategy matched
pub const MISSING_TITLE: &str = "Title not found";

/// Placeholder written when no company strategy matched
pub const MISSING_COMPANY: &str = "Company not found";

/// Placeholder written when no location strategy matched
pub const MISSING_LOCATION: &str = "Location not found";

/// Placeholder written when the listing carries no title link
pub const MISSING_LINK: &str = "Link not found";

/// One job posting as harvested from a results page
///
/// Every field is always populated: a field whose selectors all missed
/// carries its sentinel string instead, so the exported schema is
/// field-complete for every record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecord {
    /// Job title
    pub title: String,

    /// Hiring company
    pub company: String,

    /// Posting location
    pub location: String,

    /// Absolute link to the posting
    pub link: String,
}

impl JobRecord {
    /// Create a new record, substituting sentinels for missing fields
    pub fn new(
        title: Option<String>,
        company: Option<String>,
        location: Option<String>,
        link: Option<String>,
    ) -> Self {
        Self {
            title: title.unwrap_or_else(|| MISSING_TITLE.to_string()),
            company: company.unwrap_or_else(|| MISSING_COMPANY.to_string()),
            location: location.unwrap_or_else(|| MISSING_LOCATION.to_string()),
            link: link.unwrap_or_else(|| MISSING_LINK.to_string()),
        }
    }

    /// True when every field holds its sentinel
    pub fn is_empty(&self) -> bool {
        self.title == MISSING_TITLE
            && self.company == MISSING_COMPANY
            && self.location == MISSING_LOCATION
            && self.link == MISSING_LINK
    }
}

/// Serialize a record collection as a pretty-printed JSON array
///
/// Two-space indentation, UTF-8 with non-ASCII characters kept as-is.
/// Serializing the same collection twice yields byte-identical output.
pub fn to_json(records: &[JobRecord]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(records)
}

/// Write the collection to `path` and log the count
pub fn export(records: &[JobRecord], path: &Path) -> Result<(), HarvestError> {
    let json = to_json(records).map_err(|source| HarvestError::Export {
        path: path.to_path_buf(),
        source: source.into(),
    })?;

    std::fs::write(path, json).map_err(|source| HarvestError::Export {
        path: path.to_path_buf(),
        source,
    })?;

    ::log::info!("Saved {} job records to {}", records.len(), path.display());
    Ok(())
}
