//! Indeed job page heuristics (`indeed.com`).

use super::first_text;
use crate::job::JobFields;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};

static HEADER_TITLE_H1: Lazy<Selector> =
    Lazy::new(|| Selector::parse("h1.jobsearch-JobInfoHeader-title").unwrap());
static HEADER_TITLE: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".jobsearch-JobInfoHeader-title").unwrap());

static COMPANY_NAME_ATTR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"[data-company-name="true"]"#).unwrap());
static COMPANY_RATING_HEADER: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".jobsearch-InlineCompanyRating-companyHeader").unwrap());

static JOB_LOCATION: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"[data-testid="job-location"]"#).unwrap());
static HEADER_LOCATION: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"[data-testid="inlineHeader-companyLocation"]"#).unwrap());

pub(super) fn extract(document: &Html, _raw_html: &str) -> JobFields {
    JobFields {
        title: first_text(document, &[&HEADER_TITLE_H1, &HEADER_TITLE]),
        company: first_text(document, &[&COMPANY_NAME_ATTR, &COMPANY_RATING_HEADER]),
        location: first_text(document, &[&JOB_LOCATION, &HEADER_LOCATION]),
    }
}
