//! Siemens careers page heuristics (`jobs.siemens.com`).
//!
//! Siemens renders job data through an inline script configuration object,
//! so the primary heuristics are regex matches over the raw HTML rather
//! than selectors, with CSS fallbacks for older page variants.

use super::{element_text, first_text};
use crate::job::JobFields;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

static JOB_TITLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""jobTitle"\s*:\s*"([^"]+)""#).unwrap());
static ORGANIZATION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""organization"\s*:\s*"([^"]+)""#).unwrap());

// Location patterns, tried in order
static LOCATION_KEY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)location['"]\s*:\s*['"]([^'"]+)['"]"#).unwrap());
static ADDRESS_LOCALITY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""addressLocality"\s*:\s*"([^"]+)""#).unwrap());
static ADDRESS_COUNTRY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""addressCountry"\s*:\s*"([^"]+)""#).unwrap());

static JOB_LOCATION_CLASS: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".job-location").unwrap());
static LOCATION_CLASS_SUBSTRING: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"[class*="location"]"#).unwrap());
static SPAN: Lazy<Selector> = Lazy::new(|| Selector::parse("span").unwrap());

static H1: Lazy<Selector> = Lazy::new(|| Selector::parse("h1").unwrap());
static H3: Lazy<Selector> = Lazy::new(|| Selector::parse("h3").unwrap());

pub(super) fn extract(document: &Html, raw_html: &str) -> JobFields {
    let title = capture(&JOB_TITLE_RE, raw_html)
        .or_else(|| first_text(document, &[&H1, &H3]));

    // Organization is composed under the Siemens umbrella; the plain
    // company name is the fallback when the config object lacks one.
    let company = Some(match capture(&ORGANIZATION_RE, raw_html) {
        Some(org) => format!("Siemens - {org}"),
        None => "Siemens".to_string(),
    });

    let location = capture(&LOCATION_KEY_RE, raw_html)
        .or_else(|| capture(&ADDRESS_LOCALITY_RE, raw_html))
        .or_else(|| capture(&ADDRESS_COUNTRY_RE, raw_html))
        .or_else(|| element_text(document, &JOB_LOCATION_CLASS))
        .or_else(|| element_text(document, &LOCATION_CLASS_SUBSTRING))
        .or_else(|| text_after_location_span(document));

    JobFields {
        title,
        company,
        location,
    }
}

fn capture(regex: &Regex, haystack: &str) -> Option<String> {
    regex
        .captures(haystack)
        .map(|caps| caps[1].to_string())
        .filter(|value| !value.trim().is_empty())
}

/// Text of the element following a `<span>` that contains "Location".
fn text_after_location_span(document: &Html) -> Option<String> {
    document
        .select(&SPAN)
        .filter(|span| span.text().collect::<String>().contains("Location"))
        .find_map(|span| {
            span.next_siblings()
                .find_map(ElementRef::wrap)
                .map(|el| el.text().collect::<String>().trim().to_string())
                .filter(|text| !text.is_empty())
        })
}
