use crate::constants::method;
use crate::logger::DebugLogger;
use crate::origin::{OriginPredicateFn, PatternError, origin_pattern};
use serde::Deserialize;
use std::fmt;
use std::sync::Arc;

/// Raw CORS configuration. Every field is optional; empty values fall back to
/// the defaults applied when the policy is compiled.
///
/// Deserializes from any serde format, with missing keys taking their
/// default. The origin predicate and the logger can only be set in code.
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct CorsOptions {
    /// Origins allowed to make cross-origin requests. `*` allows all; an entry
    /// with one `*` is a wildcard such as `https://*.example.com`. Empty
    /// allows all unless `allow_origin_fn` is set.
    pub allowed_origins: Vec<String>,
    /// Overrides `allowed_origins` entirely when set.
    #[serde(skip)]
    pub allow_origin_fn: Option<Arc<OriginPredicateFn>>,
    /// Defaults to `GET`, `POST`, `HEAD`.
    pub allowed_methods: Vec<String>,
    /// `*` allows any header. Defaults to `Origin`, `Accept`, `Content-Type`,
    /// `X-Requested-With`.
    pub allowed_headers: Vec<String>,
    pub exposed_headers: Vec<String>,
    /// Seconds a preflight result may be cached; zero or less omits the header.
    pub max_age: i64,
    pub allow_credentials: bool,
    /// Forward preflight requests to the wrapped handler instead of answering them.
    pub options_passthrough: bool,
    /// Trace every decision through [`crate::TracingLogger`] unless `logger` is set.
    pub debug: bool,
    #[serde(skip)]
    pub logger: Option<Arc<dyn DebugLogger>>,
}

impl CorsOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Any origin, the common methods, any header, credentials allowed.
    pub fn allow_all() -> Self {
        Self::new()
            .allowed_origins(["*"])
            .allowed_methods([
                method::HEAD,
                method::GET,
                method::POST,
                method::PUT,
                method::PATCH,
                method::DELETE,
            ])
            .allowed_headers(["*"])
            .allow_credentials(true)
    }

    pub fn allowed_origins<I, S>(mut self, origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_origins = origins.into_iter().map(Into::into).collect();
        self
    }

    pub fn allow_origin_fn<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.allow_origin_fn = Some(Arc::new(predicate));
        self
    }

    /// Sets the origin predicate to a case-insensitive regular expression.
    pub fn allow_origin_pattern(mut self, pattern: &str) -> Result<Self, PatternError> {
        self.allow_origin_fn = Some(origin_pattern(pattern)?);
        Ok(self)
    }

    pub fn allowed_methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_methods = methods.into_iter().map(Into::into).collect();
        self
    }

    pub fn allowed_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_headers = headers.into_iter().map(Into::into).collect();
        self
    }

    pub fn exposed_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exposed_headers = headers.into_iter().map(Into::into).collect();
        self
    }

    pub fn max_age(mut self, seconds: i64) -> Self {
        self.max_age = seconds;
        self
    }

    pub fn allow_credentials(mut self, enabled: bool) -> Self {
        self.allow_credentials = enabled;
        self
    }

    pub fn options_passthrough(mut self, enabled: bool) -> Self {
        self.options_passthrough = enabled;
        self
    }

    pub fn debug(mut self, enabled: bool) -> Self {
        self.debug = enabled;
        self
    }

    pub fn logger<L>(mut self, logger: L) -> Self
    where
        L: DebugLogger + 'static,
    {
        self.logger = Some(Arc::new(logger));
        self
    }
}

impl fmt::Debug for CorsOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CorsOptions")
            .field("allowed_origins", &self.allowed_origins)
            .field("allow_origin_fn", &self.allow_origin_fn.is_some())
            .field("allowed_methods", &self.allowed_methods)
            .field("allowed_headers", &self.allowed_headers)
            .field("exposed_headers", &self.exposed_headers)
            .field("max_age", &self.max_age)
            .field("allow_credentials", &self.allow_credentials)
            .field("options_passthrough", &self.options_passthrough)
            .field("debug", &self.debug)
            .field("logger", &self.logger.is_some())
            .finish()
    }
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
