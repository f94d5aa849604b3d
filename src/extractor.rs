//! Extraction orchestrator: fetch a job page and run the staged pipeline.

use crate::error::FetchError;
use crate::job::{ExtractedJobInfo, JobFields};
use crate::options::ExtractorOptions;
use crate::text::normalize_field;
use crate::{meta, sites, structured};
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE};
use reqwest::{Client, ClientBuilder};
use scraper::Html;
use tracing::{debug, warn};

const ACCEPT_HTML: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";

/// Fetches job pages and extracts job data from them.
///
/// One outbound GET per [`scrape_job_page`](Extractor::scrape_job_page)
/// call, no retries, and no error surface: every failure mode collapses
/// into an all-null [`ExtractedJobInfo`]. Calls are independent, so one
/// extractor can serve concurrent extractions for different URLs.
pub struct Extractor {
    client: Client,
    options: ExtractorOptions,
}

impl Extractor {
    /// Create an extractor with default options.
    pub fn new() -> Result<Self, FetchError> {
        Self::with_options(ExtractorOptions::default())
    }

    /// Create an extractor with custom options.
    ///
    /// The timeout is installed on the HTTP client, so the deadline is
    /// owned by each request future and dropped with it on every exit
    /// path; no timer outlives the call.
    pub fn with_options(options: ExtractorOptions) -> Result<Self, FetchError> {
        let client = ClientBuilder::new()
            .timeout(options.timeout)
            .user_agent(options.user_agent.as_str())
            .gzip(true)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self { client, options })
    }

    /// Fetch `url` and extract job data from the response body.
    ///
    /// Never fails: a non-success status, network error, timeout, or parse
    /// problem yields a record with the URL and all fields null. The
    /// decision to retry or to ask the user to fill fields in manually
    /// belongs to the caller.
    pub async fn scrape_job_page(&self, url: &str) -> ExtractedJobInfo {
        match self.fetch_page(url).await {
            Ok(html) => {
                let info = extract_from_html(url, &html);
                debug!(
                    url,
                    company = info.company.as_deref(),
                    title = info.title.as_deref(),
                    location = info.location.as_deref(),
                    "job page extracted"
                );
                info
            }
            Err(error) => {
                warn!(url, %error, "job page fetch failed");
                ExtractedJobInfo::empty(url)
            }
        }
    }

    async fn fetch_page(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .header(ACCEPT, ACCEPT_HTML)
            .header(ACCEPT_LANGUAGE, self.options.accept_language.as_str())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        Ok(response.text().await?)
    }
}

/// Run the extraction pipeline over HTML already in hand.
///
/// Stages run in priority order, each filling only the fields still unset:
///
/// 1. JSON-LD structured data (most reliable when present)
/// 2. Open Graph / `<title>` fallback for the title
/// 3. Site profiles whose host token matches the URL
/// 4. Geo meta tags fallback for the location
///
/// then all three fields go through whitespace normalization.
pub fn extract_from_html(url: &str, html: &str) -> ExtractedJobInfo {
    let document = Html::parse_document(html);

    let mut fields = structured::extract(&document);

    fields.fill_from(JobFields {
        title: meta::title(&document),
        ..JobFields::default()
    });

    for profile in sites::profiles() {
        if profile.matches(url) {
            debug!(url, profile = profile.name, "running site profile");
            fields.fill_from(profile.extract(&document, html));
        }
    }

    fields.fill_from(JobFields {
        location: meta::location(&document),
        ..JobFields::default()
    });

    ExtractedJobInfo {
        url: url.to_string(),
        company: normalize_field(fields.company),
        title: normalize_field(fields.title),
        location: normalize_field(fields.location),
    }
}
