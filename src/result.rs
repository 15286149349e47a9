use thiserror::Error;

/// Which negotiation path a request takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Preflight,
    Actual,
}

/// Why a negotiation step stopped emitting headers.
///
/// A rejection is a policy outcome, not a failure: the request still goes on
/// and the browser enforces the missing headers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("method {0} is not OPTIONS")]
    NotOptions(String),
    #[error("OPTIONS without Access-Control-Request-Method is not a CORS request")]
    OptionsRequest,
    #[error("missing origin")]
    MissingOrigin,
    #[error("origin '{0}' not allowed")]
    OriginNotAllowed(String),
    #[error("method '{0}' not allowed")]
    MethodNotAllowed(String),
    #[error("headers {0:?} not allowed")]
    HeadersNotAllowed(Vec<String>),
}
