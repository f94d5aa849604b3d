//! # jobtrack
//!
//! Core library for a job application tracker: a best-effort extractor
//! that pulls company, title, and location out of job-listing pages, and
//! the status lifecycle governing how applications move between states.
//!
//! ## Overview
//!
//! Job boards publish the same information in wildly different shapes, so
//! extraction is a staged pipeline over one fetched page:
//!
//! 1. **JSON-LD structured data**: schema.org `JobPosting` objects,
//!    including nested `@graph` and array forms, are the most reliable
//!    source when present.
//! 2. **Generic page metadata**: Open Graph title tags, the `<title>`
//!    element, and geo meta tags.
//! 3. **Site profiles**: per-board selector and regex heuristics
//!    (LinkedIn, Indeed, Glassdoor, Siemens careers) that fill whatever
//!    the generic stages missed.
//!
//! Stages merge "first non-empty wins": a later stage never overwrites an
//! earlier one. Extraction never fails; a fetch error, timeout, or
//! unparseable page yields a record with the URL and null fields, and the
//! decision how to present that belongs to the caller.
//!
//! ## Extracting
//!
//! ```rust,no_run
//! use jobtrack::Extractor;
//!
//! # async fn run() -> Result<(), jobtrack::FetchError> {
//! let extractor = Extractor::new()?;
//! let info = extractor
//!     .scrape_job_page("https://www.linkedin.com/jobs/view/123456")
//!     .await;
//!
//! println!("company:  {:?}", info.company);
//! println!("title:    {:?}", info.title);
//! println!("location: {:?}", info.location);
//! # Ok(())
//! # }
//! ```
//!
//! With the HTML already in hand (no network), use
//! [`extract_from_html`] directly.
//!
//! ## Tracking
//!
//! Applications move through a fixed lifecycle ([`JobStatus`]), with
//! `accepted`, `rejected`, and `withdrawn` terminal. [`JobStore`] persists
//! records in SQLite and enforces the lifecycle on status updates:
//!
//! ```rust,no_run
//! use jobtrack::{JobStore, JobStatus, NewJob};
//!
//! # async fn run() -> Result<(), jobtrack::StoreError> {
//! let store = JobStore::open("jobs.db").await?;
//! store.migrate().await?;
//!
//! let id = store
//!     .add_job(NewJob {
//!         url: "https://example.com/jobs/42".into(),
//!         company: Some("Acme".into()),
//!         title: Some("Engineer".into()),
//!         location: None,
//!         applied_date: chrono::Local::now().date_naive(),
//!         status: None,
//!     })
//!     .await?;
//!
//! store.update_status(id, JobStatus::Interview).await?;
//! # Ok(())
//! # }
//! ```

mod error;
mod extractor;
mod job;
mod meta;
mod options;
mod sites;
mod status;
mod store;
mod structured;
mod text;

// Public exports
pub use error::{FetchError, StoreError, StoreResult};
pub use extractor::{extract_from_html, Extractor};
pub use job::{ExtractedJobInfo, JobFields};
pub use options::{ExtractorOptions, ExtractorOptionsBuilder, DEFAULT_USER_AGENT};
pub use sites::{profiles as site_profiles, SiteProfile};
pub use status::{apply_transition, JobStatus, ParseStatusError, TransitionError};
pub use store::{JobRecord, JobStore, JobUpdate, NewJob};
pub use text::normalize;
