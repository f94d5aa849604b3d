//! Glassdoor job page heuristics (`glassdoor.com`).
//!
//! Glassdoor carries the job title reliably in its structured data and
//! Open Graph tags, so this profile only covers company and location.

use super::element_text;
use crate::job::JobFields;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};

static EMPLOYER_NAME: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"[data-test="employer-name"]"#).unwrap());
static LOCATION: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"[data-test="location"]"#).unwrap());

pub(super) fn extract(document: &Html, _raw_html: &str) -> JobFields {
    JobFields {
        title: None,
        company: element_text(document, &EMPLOYER_NAME),
        location: element_text(document, &LOCATION),
    }
}
