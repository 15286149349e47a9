use crate::constants::{header, method};
use crate::context::RequestContext;
use crate::header_builder::HeaderBuilder;
use crate::headers::HeaderSink;
use crate::logger::{DebugLogger, TracingLogger};
use crate::options::CorsOptions;
use crate::policy::Policy;
use crate::result::{Rejection, Route};
use crate::util::parse_header_list;
use std::fmt;
use std::sync::Arc;

/// CORS negotiation engine built from [`CorsOptions`].
///
/// Cloning is cheap: clones share one compiled [`Policy`], which is never
/// mutated after construction.
#[derive(Clone)]
pub struct Cors {
    policy: Arc<Policy>,
    logger: Option<Arc<dyn DebugLogger>>,
}

impl Cors {
    pub fn new(options: CorsOptions) -> Self {
        let logger = match (&options.logger, options.debug) {
            (Some(logger), _) => Some(Arc::clone(logger)),
            (None, true) => Some(Arc::new(TracingLogger) as Arc<dyn DebugLogger>),
            (None, false) => None,
        };

        Self {
            policy: Arc::new(Policy::compile(&options)),
            logger,
        }
    }

    /// See [`CorsOptions::allow_all`].
    pub fn allow_all() -> Self {
        Self::new(CorsOptions::allow_all())
    }

    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    pub fn route(&self, request: &RequestContext<'_>) -> Route {
        if request.is_preflight() {
            Route::Preflight
        } else {
            Route::Actual
        }
    }

    /// Negotiates a preflight request, writing the outcome into `sink`.
    ///
    /// The three `Vary` entries are always written. Any failed check stops
    /// there; nothing else is emitted and no error is raised.
    pub fn handle_preflight<S>(&self, request: &RequestContext<'_>, sink: &mut S)
    where
        S: HeaderSink + ?Sized,
    {
        let builder = HeaderBuilder::new(&self.policy);
        builder.write_vary(
            sink,
            &[
                header::ORIGIN,
                header::ACCESS_CONTROL_REQUEST_METHOD,
                header::ACCESS_CONTROL_REQUEST_HEADERS,
            ],
        );

        let requested_headers = parse_header_list(request.access_control_request_headers);
        if let Err(rejection) = self.check_preflight(request, &requested_headers) {
            self.log(format_args!("    Preflight aborted: {rejection}"));
            return;
        }

        builder.write_allow_origin(sink, request.origin);
        builder.write_allow_methods(sink, request.access_control_request_method);
        builder.write_allow_headers(sink, &requested_headers);
        builder.write_credentials(sink);
        builder.write_max_age(sink);
        self.log(format_args!(
            "    Preflight accepted: origin '{}', method '{}', headers {:?}",
            request.origin, request.access_control_request_method, requested_headers
        ));
    }

    /// Negotiates a non-preflight request. Never ends the response; the
    /// caller still runs its handler.
    pub fn handle_actual_request<S>(&self, request: &RequestContext<'_>, sink: &mut S)
    where
        S: HeaderSink + ?Sized,
    {
        if let Err(rejection) = Self::check_not_options(request.method) {
            self.log(format_args!("    Actual request no headers added: {rejection}"));
            return;
        }

        let builder = HeaderBuilder::new(&self.policy);
        builder.write_vary(sink, &[header::ORIGIN]);

        if let Err(rejection) = self.check_actual(request) {
            self.log(format_args!("    Actual request no headers added: {rejection}"));
            return;
        }

        builder.write_allow_origin(sink, request.origin);
        builder.write_exposed_headers(sink);
        builder.write_credentials(sink);
        self.log(format_args!(
            "    Actual request accepted: origin '{}', method '{}'",
            request.origin, request.method
        ));
    }

    /// Origin admissibility: predicate, then allow-all, then the exact set
    /// (case-insensitive), then wildcard patterns.
    pub fn is_origin_allowed(&self, origin: &str) -> bool {
        self.policy.origins().admits(origin)
    }

    pub fn is_method_allowed(&self, method: &str) -> bool {
        self.policy.methods().allows_method(method)
    }

    pub fn are_headers_allowed<S: AsRef<str>>(&self, requested: &[S]) -> bool {
        self.policy.headers().allows_headers(requested)
    }

    fn check_preflight(
        &self,
        request: &RequestContext<'_>,
        requested_headers: &[String],
    ) -> Result<(), Rejection> {
        Self::check_options(request.method)?;
        Self::check_origin_present(request.origin)?;
        self.check_origin(request.origin)?;
        self.check_method(request.access_control_request_method)?;
        self.check_headers(requested_headers)
    }

    fn check_actual(&self, request: &RequestContext<'_>) -> Result<(), Rejection> {
        Self::check_origin_present(request.origin)?;
        self.check_origin(request.origin)?;
        self.check_method(request.method)
    }

    fn check_options(request_method: &str) -> Result<(), Rejection> {
        if request_method == method::OPTIONS {
            Ok(())
        } else {
            Err(Rejection::NotOptions(request_method.to_owned()))
        }
    }

    fn check_not_options(request_method: &str) -> Result<(), Rejection> {
        if request_method == method::OPTIONS {
            Err(Rejection::OptionsRequest)
        } else {
            Ok(())
        }
    }

    fn check_origin_present(origin: &str) -> Result<(), Rejection> {
        if origin.is_empty() {
            Err(Rejection::MissingOrigin)
        } else {
            Ok(())
        }
    }

    fn check_origin(&self, origin: &str) -> Result<(), Rejection> {
        if self.is_origin_allowed(origin) {
            Ok(())
        } else {
            Err(Rejection::OriginNotAllowed(origin.to_owned()))
        }
    }

    fn check_method(&self, requested: &str) -> Result<(), Rejection> {
        if self.is_method_allowed(requested) {
            Ok(())
        } else {
            Err(Rejection::MethodNotAllowed(requested.to_owned()))
        }
    }

    fn check_headers(&self, requested: &[String]) -> Result<(), Rejection> {
        if self.are_headers_allowed(requested) {
            Ok(())
        } else {
            Err(Rejection::HeadersNotAllowed(requested.to_vec()))
        }
    }

    pub(crate) fn log(&self, args: fmt::Arguments<'_>) {
        if let Some(logger) = &self.logger {
            logger.log(args);
        }
    }
}

impl Default for Cors {
    fn default() -> Self {
        Self::new(CorsOptions::default())
    }
}

impl fmt::Debug for Cors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cors")
            .field("policy", &self.policy)
            .field("logger", &self.logger.is_some())
            .finish()
    }
}

#[cfg(test)]
#[path = "cors_test.rs"]
mod cors_test;
