//! Public client surface + builder.
//! Defaults (UA + base URL) live in `constants`.

mod constants;

use crate::core::LitError;
use constants::{DEFAULT_BASE_URL, USER_AGENT};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Thin wrapper that holds a configured HTTP client and the profile page base URL.
#[derive(Debug, Clone)]
pub struct LitClient {
    http: Client,
    base_url: Url,
}

impl Default for LitClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl LitClient {
    /// Create a new builder.
    pub fn builder() -> LitClientBuilder {
        LitClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn base_url(&self) -> &Url {
        &self.base_url
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct LitClientBuilder {
    user_agent: Option<String>,
    base_url: Option<Url>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl LitClientBuilder {
    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the profile page base (e.g., `https://lit.link/`).
    ///
    /// The identifier is appended as one more path segment; a trailing slash is optional.
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set a global request timeout (overall). Default: none.
    #[must_use]
    pub const fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub const fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns `LitError` if the default base URL cannot be parsed or the
    /// underlying `reqwest` client fails to initialize.
    pub fn build(self) -> Result<LitClient, LitError> {
        let base_url = match self.base_url {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };

        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .cookie_store(true);

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(LitClient { http, base_url })
    }
}
