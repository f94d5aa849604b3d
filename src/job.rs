//! Job data records produced by the extraction pipeline.

use serde::{Deserialize, Serialize};

/// Partial extraction result produced by a single pipeline stage.
///
/// Stages are merged in priority order with [`JobFields::fill_from`]: a
/// field set by an earlier stage is never overwritten by a later one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobFields {
    pub company: Option<String>,
    pub title: Option<String>,
    pub location: Option<String>,
}

impl JobFields {
    /// Fill fields still unset from `other`, leaving set fields untouched.
    ///
    /// This is the crate's merge policy: first non-empty value wins across
    /// the ordered list of extraction stages.
    pub fn fill_from(&mut self, other: JobFields) {
        if self.company.is_none() {
            self.company = other.company;
        }
        if self.title.is_none() {
            self.title = other.title;
        }
        if self.location.is_none() {
            self.location = other.location;
        }
    }

    /// True if no field has been filled yet.
    pub fn is_empty(&self) -> bool {
        self.company.is_none() && self.title.is_none() && self.location.is_none()
    }
}

/// The result of extracting job data from one page.
///
/// Produced fresh per extraction call and never mutated afterwards. All
/// data fields are optional; a failed fetch yields a record with the URL
/// and nothing else.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExtractedJobInfo {
    /// The URL the extraction was requested for, echoed back verbatim.
    pub url: String,
    /// Hiring company name, if any stage found one.
    pub company: Option<String>,
    /// Job title, if any stage found one.
    pub title: Option<String>,
    /// Job location, if any stage found one.
    pub location: Option<String>,
}

impl ExtractedJobInfo {
    /// An all-null record for `url`, the result of any failed extraction.
    pub fn empty(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            company: None,
            title: None,
            location: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(company: Option<&str>, title: Option<&str>, location: Option<&str>) -> JobFields {
        JobFields {
            company: company.map(String::from),
            title: title.map(String::from),
            location: location.map(String::from),
        }
    }

    #[test]
    fn fill_from_only_fills_gaps() {
        let mut first = fields(Some("Acme"), None, None);
        first.fill_from(fields(Some("Other Corp"), Some("Engineer"), None));
        assert_eq!(first, fields(Some("Acme"), Some("Engineer"), None));
    }

    #[test]
    fn fill_from_empty_is_noop() {
        let mut filled = fields(Some("Acme"), Some("Engineer"), Some("Austin"));
        let before = filled.clone();
        filled.fill_from(JobFields::default());
        assert_eq!(filled, before);
    }

    #[test]
    fn empty_record_keeps_url() {
        let info = ExtractedJobInfo::empty("https://example.com/job/1");
        assert_eq!(info.url, "https://example.com/job/1");
        assert!(info.company.is_none() && info.title.is_none() && info.location.is_none());
    }
}
