//! Public client surface + builder.
//! Internals are split into `credentials` (token file) and `constants` (UA + defaults).

mod constants;
mod credentials;

pub use crate::core::cache::CacheMode;

use crate::core::{Cache, IexError};
use crate::symbols::SymbolDirectory;
use constants::{
    DEFAULT_BASE_URL, DEFAULT_CACHE_TTL, DEFAULT_SYMBOLS_TTL, SANDBOX_BASE_URL, USER_AGENT,
};
pub(crate) use constants::SYMBOLS_CACHE_KEY;
use reqwest::Client;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// A configured connection to the IEX API.
///
/// Construction loads the reference symbol list once; it is then shared read-only by every
/// clone of the client. Use [`IexClient::builder`] to configure and build one.
#[derive(Debug, Clone)]
pub struct IexClient {
    http: Client,
    base: Url,
    token: Option<String>,
    cache: Cache,
    cache_ttl: Duration,
    symbols: Arc<SymbolDirectory>,
}

impl IexClient {
    /// Create a new builder.
    #[must_use]
    pub fn builder() -> IexClientBuilder {
        IexClientBuilder::default()
    }

    /// The directory of known ticker symbols, loaded at construction.
    #[must_use]
    pub fn symbols(&self) -> &SymbolDirectory {
        &self.symbols
    }

    /// The cache handle this client memoizes responses in.
    #[must_use]
    pub const fn cache(&self) -> &Cache {
        &self.cache
    }

    /// The API root requests are issued against.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) const fn http(&self) -> &Client {
        &self.http
    }

    pub(crate) fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub(crate) const fn cache_ttl(&self) -> Duration {
        self.cache_ttl
    }
}

/* ----------------------- Builder ----------------------- */

/// Builder for [`IexClient`].
#[derive(Default)]
pub struct IexClientBuilder {
    user_agent: Option<String>,
    base_url: Option<Url>,
    sandbox: bool,
    token: Option<String>,
    token_file: Option<PathBuf>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    cache: Option<Cache>,
    cache_ttl: Option<Duration>,
    symbols_ttl: Option<Duration>,
}

impl IexClientBuilder {
    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the API root (e.g., `https://cloud.iexapis.com/stable/`).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Use the sandbox API root instead of production. Ignored if `base_url` is set.
    #[must_use]
    pub const fn sandbox(mut self, yes: bool) -> Self {
        self.sandbox = yes;
        self
    }

    /// Authenticate with this token. Takes precedence over `token_file`.
    #[must_use]
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Load the token from a JSON credential file at build time.
    #[must_use]
    pub fn token_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.token_file = Some(path.into());
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

    /// Use this cache handle. Default: a fresh in-memory cache.
    #[must_use]
    pub fn cache(mut self, cache: Cache) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Lifetime of memoized endpoint responses. Default: 24 hours.
    #[must_use]
    pub const fn cache_ttl(mut self, dur: Duration) -> Self {
        self.cache_ttl = Some(dur);
        self
    }

    /// Lifetime of the cached symbol list. Default: 24 hours.
    #[must_use]
    pub const fn symbols_ttl(mut self, dur: Duration) -> Self {
        self.symbols_ttl = Some(dur);
        self
    }

    /// Builds the client and loads the symbol directory.
    ///
    /// # Errors
    ///
    /// Fails if the credential file cannot be loaded, the HTTP client cannot be built, or the
    /// symbol list cannot be fetched.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn build(self) -> Result<IexClient, IexError> {
        let mut base = match self.base_url {
            Some(u) => u,
            None if self.sandbox => Url::parse(SANDBOX_BASE_URL)?,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let token = match (self.token, self.token_file) {
            (Some(t), _) => Some(t),
            (None, Some(path)) => Some(credentials::load_token(&path, self.sandbox)?),
            (None, None) => None,
        };

        let mut httpb =
            reqwest::Client::builder().user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));
        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }
        let http = httpb.build()?;

        let mut client = IexClient {
            http,
            base,
            token,
            cache: self.cache.unwrap_or_default(),
            cache_ttl: self.cache_ttl.unwrap_or(DEFAULT_CACHE_TTL),
            symbols: Arc::new(SymbolDirectory::default()),
        };

        let directory =
            SymbolDirectory::load(&client, self.symbols_ttl.unwrap_or(DEFAULT_SYMBOLS_TTL))
                .await?;
        #[cfg(feature = "tracing")]
        tracing::debug!(count = directory.len(), "symbol directory ready");
        client.symbols = Arc::new(directory);

        Ok(client)
    }
}
