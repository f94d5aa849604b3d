//! Per-site extraction heuristics.
//!
//! Each job board gets a [`SiteProfile`]: a host token plus a bundle of
//! selector/regex heuristics tuned to that board's markup. Profiles are
//! registered in a fixed priority order and dispatched by substring match
//! on the URL, and each one only produces fields for the merge layer to
//! fill where earlier stages found nothing.
//!
//! These selector chains track live markup and are inherently brittle;
//! each profile is its own module so its chain can be tested on its own.

mod glassdoor;
mod indeed;
mod linkedin;
mod siemens;

use crate::job::JobFields;
use scraper::{Html, Selector};

/// A registered site heuristic.
pub struct SiteProfile {
    /// Human-readable profile name, used in logs.
    pub name: &'static str,
    host_token: &'static str,
    extract: fn(&Html, &str) -> JobFields,
}

impl SiteProfile {
    /// Whether this profile applies to `url`. Substring containment on
    /// purpose: the original heuristics match hosts loosely, including
    /// subdomains and tracking-wrapped URLs.
    pub fn matches(&self, url: &str) -> bool {
        url.contains(self.host_token)
    }

    /// Run this profile's heuristics over the parsed document and the raw
    /// HTML (some profiles regex-match script payloads the DOM view loses).
    pub fn extract(&self, document: &Html, raw_html: &str) -> JobFields {
        (self.extract)(document, raw_html)
    }
}

static PROFILES: [SiteProfile; 4] = [
    SiteProfile {
        name: "linkedin",
        host_token: "linkedin.com",
        extract: linkedin::extract,
    },
    SiteProfile {
        name: "indeed",
        host_token: "indeed.com",
        extract: indeed::extract,
    },
    SiteProfile {
        name: "glassdoor",
        host_token: "glassdoor.com",
        extract: glassdoor::extract,
    },
    SiteProfile {
        name: "siemens",
        host_token: "jobs.siemens.com",
        extract: siemens::extract,
    },
];

/// All registered profiles, in dispatch priority order.
pub fn profiles() -> &'static [SiteProfile] {
    &PROFILES
}

/// First non-empty text among the given selectors, tried in order.
fn first_text(document: &Html, selectors: &[&Selector]) -> Option<String> {
    selectors
        .iter()
        .find_map(|selector| element_text(document, selector))
}

/// Trimmed text of the first element matching `selector`, if non-empty.
fn element_text(document: &Html, selector: &Selector) -> Option<String> {
    document
        .select(selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|text| !text.is_empty())
}
