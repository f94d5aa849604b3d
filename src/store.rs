//! SQLite-backed job record store.
//!
//! The store is an explicitly constructed collaborator: the caller opens
//! it, runs migrations, and passes it to whoever needs it. There is no
//! global handle or lazy initialization. Schema changes are a versioned
//! migration list keyed by SQLite's `user_version` pragma and applied
//! idempotently at startup.

use crate::error::{StoreError, StoreResult};
use crate::job::ExtractedJobInfo;
use crate::status::{apply_transition, JobStatus};
use chrono::NaiveDate;
use serde::Serialize;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{FromRow, QueryBuilder, SqlitePool};
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info};
use url::Url;

/// A persisted job application row.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct JobRecord {
    pub id: i64,
    pub url: String,
    pub company: Option<String>,
    pub title: Option<String>,
    pub location: Option<String>,
    pub applied_date: NaiveDate,
    #[sqlx(try_from = "String")]
    pub status: JobStatus,
    /// Refreshed exactly when `status` changes; never set at creation.
    pub status_updated_at: Option<NaiveDate>,
}

/// Input for creating a job record.
#[derive(Debug, Clone)]
pub struct NewJob {
    pub url: String,
    pub company: Option<String>,
    pub title: Option<String>,
    pub location: Option<String>,
    pub applied_date: NaiveDate,
    /// Initial status; defaults to `applied` when absent.
    pub status: Option<JobStatus>,
}

impl NewJob {
    /// Build a record from an extraction result, applied on `applied_date`.
    pub fn from_extraction(info: ExtractedJobInfo, applied_date: NaiveDate) -> Self {
        Self {
            url: info.url,
            company: info.company,
            title: info.title,
            location: info.location,
            applied_date,
            status: None,
        }
    }
}

/// Partial update of a job record.
///
/// Only these four fields may be patched after creation; everything else
/// is immutable once the row exists. An update with nothing set is a
/// successful no-op.
#[derive(Debug, Clone, Default)]
pub struct JobUpdate {
    pub company: Option<String>,
    pub title: Option<String>,
    pub location: Option<String>,
    pub status: Option<JobStatus>,
}

impl JobUpdate {
    pub fn is_empty(&self) -> bool {
        self.company.is_none()
            && self.title.is_none()
            && self.location.is_none()
            && self.status.is_none()
    }
}

struct Migration {
    version: i64,
    statements: &'static [&'static str],
}

/// Schema generations, oldest first. Version 1 is the legacy 3-value
/// status schema; version 2 rebuilds the table for the 8-value vocabulary
/// and adds the `status_updated_at` column (SQLite cannot alter a CHECK
/// constraint in place, so v2 is a create-copy-swap). All legacy status
/// values are members of the current vocabulary, so row data copies over
/// unchanged.
const MIGRATIONS: &[Migration] = &[
    Migration {
        version: 1,
        statements: &["CREATE TABLE IF NOT EXISTS jobs (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                url TEXT NOT NULL,
                company TEXT,
                title TEXT,
                location TEXT,
                applied_date TEXT NOT NULL,
                status TEXT NOT NULL DEFAULT 'waiting'
                    CHECK(status IN ('waiting', 'rejected', 'interviewing'))
            )"],
    },
    Migration {
        version: 2,
        statements: &[
            "CREATE TABLE jobs_new (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                url TEXT NOT NULL,
                company TEXT,
                title TEXT,
                location TEXT,
                applied_date TEXT NOT NULL,
                status TEXT NOT NULL DEFAULT 'applied'
                    CHECK(status IN ('applied', 'interview', 'interviewing', 'waiting',
                                     'offer', 'accepted', 'rejected', 'withdrawn')),
                status_updated_at TEXT
            )",
            "INSERT INTO jobs_new (id, url, company, title, location, applied_date, status)
                SELECT id, url, company, title, location, applied_date, status FROM jobs",
            "DROP TABLE jobs",
            "ALTER TABLE jobs_new RENAME TO jobs",
        ],
    },
];

/// Job record store over a SQLite database.
#[derive(Clone)]
pub struct JobStore {
    pool: SqlitePool,
}

impl JobStore {
    /// Open (creating if missing) a store backed by the file at `path`.
    pub async fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;
        Ok(Self { pool })
    }

    /// Open a store backed by a private in-memory database.
    ///
    /// Pooled in-memory connections each get their own database, so the
    /// pool is capped at a single connection.
    pub async fn open_in_memory() -> StoreResult<Self> {
        let pool = SqlitePoolOptions::new()
            .min_connections(1)
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;
        Ok(Self { pool })
    }

    /// The underlying connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Apply pending schema migrations. Idempotent: already-applied
    /// versions are skipped based on the `user_version` pragma.
    pub async fn migrate(&self) -> StoreResult<()> {
        for migration in MIGRATIONS {
            let version: i64 = sqlx::query_scalar("PRAGMA user_version")
                .fetch_one(&self.pool)
                .await?;
            if version >= migration.version {
                continue;
            }

            let mut tx = self.pool.begin().await?;
            for statement in migration.statements {
                sqlx::query(statement).execute(&mut *tx).await?;
            }
            sqlx::query(&format!("PRAGMA user_version = {}", migration.version))
                .execute(&mut *tx)
                .await?;
            tx.commit().await?;
            info!(version = migration.version, "applied schema migration");
        }
        Ok(())
    }

    /// Insert a new job record and return its id.
    ///
    /// The URL must be a well-formed HTTP or HTTPS URL; the status
    /// defaults to `applied`.
    pub async fn add_job(&self, job: NewJob) -> StoreResult<i64> {
        let url = job.url.trim();
        if url.is_empty() || !is_http_url(url) {
            return Err(StoreError::InvalidUrl(job.url));
        }

        let status = job.status.unwrap_or(JobStatus::Applied);
        let result = sqlx::query(
            "INSERT INTO jobs (url, company, title, location, applied_date, status)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(url)
        .bind(&job.company)
        .bind(&job.title)
        .bind(&job.location)
        .bind(job.applied_date)
        .bind(status.as_str())
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        debug!(id, url, %status, "job added");
        Ok(id)
    }

    /// All job records, most recent application date first.
    pub async fn list_jobs(&self) -> StoreResult<Vec<JobRecord>> {
        let jobs = sqlx::query_as::<_, JobRecord>(
            "SELECT id, url, company, title, location, applied_date, status, status_updated_at
             FROM jobs ORDER BY applied_date DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(jobs)
    }

    /// Fetch one record by id.
    pub async fn get_job(&self, id: i64) -> StoreResult<JobRecord> {
        check_id(id)?;
        sqlx::query_as::<_, JobRecord>(
            "SELECT id, url, company, title, location, applied_date, status, status_updated_at
             FROM jobs WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound(id))
    }

    /// Move a job to a new lifecycle status.
    ///
    /// The transition is validated against the row's current status before
    /// anything is written; an illegal transition leaves the row untouched
    /// and surfaces as [`StoreError::Transition`]. On success the
    /// status-change timestamp is refreshed to today's local date.
    pub async fn update_status(&self, id: i64, status: JobStatus) -> StoreResult<()> {
        check_id(id)?;

        let current: String = sqlx::query_scalar("SELECT status FROM jobs WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound(id))?;
        let current = JobStatus::from_str(&current)?;

        apply_transition(current, status)?;

        let today = chrono::Local::now().date_naive();
        sqlx::query("UPDATE jobs SET status = ?, status_updated_at = ? WHERE id = ?")
            .bind(status.as_str())
            .bind(today)
            .bind(id)
            .execute(&self.pool)
            .await?;

        debug!(id, from = %current, to = %status, "job status updated");
        Ok(())
    }

    /// Patch a subset of a job's editable fields.
    ///
    /// A status set here is a direct edit, not a lifecycle transition: it
    /// only has to be a vocabulary member (the type guarantees that), and
    /// it refreshes the status-change timestamp like any status change.
    pub async fn update_fields(&self, id: i64, update: JobUpdate) -> StoreResult<()> {
        check_id(id)?;
        if update.is_empty() {
            return Ok(());
        }

        let mut builder: QueryBuilder<sqlx::Sqlite> = QueryBuilder::new("UPDATE jobs SET ");
        let mut assignments = builder.separated(", ");
        if let Some(company) = &update.company {
            assignments.push("company = ").push_bind_unseparated(company);
        }
        if let Some(title) = &update.title {
            assignments.push("title = ").push_bind_unseparated(title);
        }
        if let Some(location) = &update.location {
            assignments.push("location = ").push_bind_unseparated(location);
        }
        if let Some(status) = update.status {
            assignments.push("status = ").push_bind_unseparated(status.as_str());
            assignments
                .push("status_updated_at = ")
                .push_bind_unseparated(chrono::Local::now().date_naive());
        }
        builder.push(" WHERE id = ").push_bind(id);

        let result = builder.build().execute(&self.pool).await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }

        debug!(id, "job fields updated");
        Ok(())
    }

    /// Delete a job record.
    pub async fn delete_job(&self, id: i64) -> StoreResult<()> {
        check_id(id)?;
        let result = sqlx::query("DELETE FROM jobs WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }
        debug!(id, "job deleted");
        Ok(())
    }

    /// Close the underlying pool.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

fn check_id(id: i64) -> StoreResult<()> {
    if id <= 0 {
        return Err(StoreError::InvalidId(id));
    }
    Ok(())
}

fn is_http_url(candidate: &str) -> bool {
    Url::parse(candidate)
        .map(|url| matches!(url.scheme(), "http" | "https"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_url_validation() {
        assert!(is_http_url("https://example.com/jobs/1"));
        assert!(is_http_url("http://example.com"));
        assert!(!is_http_url("ftp://example.com"));
        assert!(!is_http_url("example.com/jobs"));
        assert!(!is_http_url("not a url"));
    }

    #[test]
    fn empty_update_detection() {
        assert!(JobUpdate::default().is_empty());
        assert!(!JobUpdate {
            status: Some(JobStatus::Offer),
            ..JobUpdate::default()
        }
        .is_empty());
    }
}
