use std::time::Duration;

use tracing::instrument;

/// The published table of player salaries.
pub const DEFAULT_URL: &str = "https://questionnaire-148920.appspot.com/swe/data.html";

/// Something that can retrieve a document by URL.
///
/// The report only needs one GET; implementing this trait lets tests stand
/// in for the network.
pub trait Fetch {
    /// Retrieves the body of `url` as text.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] naming `url` if the document cannot be
    /// retrieved.
    fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// Failure to retrieve the salary document.
#[derive(Debug, thiserror::Error)]
#[error("could not retrieve salary data from {url}")]
pub struct FetchError {
    url: String,
    #[source]
    kind: FetchErrorKind,
}

impl FetchError {
    /// Creates an error for `url`.
    pub fn new(url: impl Into<String>, kind: FetchErrorKind) -> Self {
        Self {
            url: url.into(),
            kind,
        }
    }

    /// The URL that could not be retrieved.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// What went wrong.
    #[must_use]
    pub const fn kind(&self) -> &FetchErrorKind {
        &self.kind
    }
}

/// The reason a [`FetchError`] occurred.
#[derive(Debug, thiserror::Error)]
pub enum FetchErrorKind {
    /// The request could not be sent or the connection failed.
    #[error("request failed")]
    Transport(#[source] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("server responded with {0}")]
    Status(reqwest::StatusCode),

    /// The response body could not be read as text.
    #[error("failed to read response body")]
    Body(#[source] reqwest::Error),
}

/// Blocking HTTP client for the salary page.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    /// Creates a client with the given request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialised.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    #[instrument(level = "debug", skip(self))]
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| FetchError::new(url, FetchErrorKind::Transport(e)))?;

        let status = response.status();
        tracing::debug!(%status, "received response");
        if !status.is_success() {
            return Err(FetchError::new(url, FetchErrorKind::Status(status)));
        }

        let body = response
            .text()
            .map_err(|e| FetchError::new(url, FetchErrorKind::Body(e)))?;
        tracing::debug!(bytes = body.len(), "read response body");
        Ok(body)
    }
}
