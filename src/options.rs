//! Configuration options for the extraction orchestrator.

use std::time::Duration;

/// Default per-request timeout. The fetch is aborted once it elapses.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default user agent: job boards routinely serve stripped-down or empty
/// pages to obvious non-browser clients.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

const DEFAULT_ACCEPT_LANGUAGE: &str = "en-US,en;q=0.5";

/// Options controlling how job pages are fetched.
///
/// ```rust
/// use jobtrack::ExtractorOptions;
/// use std::time::Duration;
///
/// let options = ExtractorOptions::builder()
///     .timeout(Duration::from_secs(5))
///     .user_agent("my-tracker/1.0")
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct ExtractorOptions {
    /// Upper bound on the whole request, connect through body.
    ///
    /// Default: 10 seconds.
    pub timeout: Duration,

    /// User agent sent with every fetch.
    pub user_agent: String,

    /// `Accept-Language` header value sent with every fetch.
    pub accept_language: String,
}

impl Default for ExtractorOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            accept_language: DEFAULT_ACCEPT_LANGUAGE.to_string(),
        }
    }
}

impl ExtractorOptions {
    /// Creates a new builder for ExtractorOptions
    pub fn builder() -> ExtractorOptionsBuilder {
        ExtractorOptionsBuilder::default()
    }
}

/// Builder for [`ExtractorOptions`].
#[derive(Default)]
pub struct ExtractorOptionsBuilder {
    timeout: Option<Duration>,
    user_agent: Option<String>,
    accept_language: Option<String>,
}

impl ExtractorOptionsBuilder {
    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the user agent string
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set the Accept-Language header value
    pub fn accept_language(mut self, accept_language: impl Into<String>) -> Self {
        self.accept_language = Some(accept_language.into());
        self
    }

    /// Build the ExtractorOptions
    pub fn build(self) -> ExtractorOptions {
        let defaults = ExtractorOptions::default();
        ExtractorOptions {
            timeout: self.timeout.unwrap_or(defaults.timeout),
            user_agent: self.user_agent.unwrap_or(defaults.user_agent),
            accept_language: self.accept_language.unwrap_or(defaults.accept_language),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_overrides_only_what_is_set() {
        let options = ExtractorOptions::builder()
            .timeout(Duration::from_secs(3))
            .build();
        assert_eq!(options.timeout, Duration::from_secs(3));
        assert_eq!(options.user_agent, DEFAULT_USER_AGENT);
        assert_eq!(options.accept_language, DEFAULT_ACCEPT_LANGUAGE);
    }
}
