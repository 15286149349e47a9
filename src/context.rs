use crate::constants::{header, method};
use http::{HeaderMap, Method, Request};

/// The parts of an inbound request that CORS negotiation reads.
///
/// An empty string stands for an absent header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    pub origin: &'a str,
    pub access_control_request_method: &'a str,
    pub access_control_request_headers: &'a str,
}

impl<'a> RequestContext<'a> {
    /// Reads the view out of `http` request parts. Header values that are
    /// not valid UTF-8 are treated as absent.
    pub fn from_parts(method: &'a Method, headers: &'a HeaderMap) -> Self {
        Self {
            method: method.as_str(),
            origin: header_str(headers, header::ORIGIN),
            access_control_request_method: header_str(
                headers,
                header::ACCESS_CONTROL_REQUEST_METHOD,
            ),
            access_control_request_headers: header_str(
                headers,
                header::ACCESS_CONTROL_REQUEST_HEADERS,
            ),
        }
    }

    pub fn from_request<B>(request: &'a Request<B>) -> Self {
        Self::from_parts(request.method(), request.headers())
    }

    /// `OPTIONS` carrying a non-empty `Access-Control-Request-Method`.
    pub fn is_preflight(&self) -> bool {
        self.method == method::OPTIONS && !self.access_control_request_method.is_empty()
    }
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> &'a str {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
}

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;
