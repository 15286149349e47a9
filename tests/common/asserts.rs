use super::headers::{Recorder, hello, map_value, vary_values};
use cors_guard::constants::header;
use cors_guard::{Cors, Handler, Headers, RequestContext};
use http::{HeaderMap, Request};

/// Every header negotiation can emit.
pub const CORS_HEADERS: [&str; 7] = [
    header::VARY,
    header::ACCESS_CONTROL_ALLOW_ORIGIN,
    header::ACCESS_CONTROL_ALLOW_METHODS,
    header::ACCESS_CONTROL_ALLOW_HEADERS,
    header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
    header::ACCESS_CONTROL_MAX_AGE,
    header::ACCESS_CONTROL_EXPOSE_HEADERS,
];

fn expected_value<'a>(expected: &[(&str, &'a str)], name: &str) -> Option<&'a str> {
    expected
        .iter()
        .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
        .map(|(_, value)| *value)
}

/// Checks every CORS header; names missing from `expected` must be absent.
pub fn assert_headers(headers: &Headers, expected: &[(&str, &str)]) {
    for name in CORS_HEADERS {
        assert_eq!(
            headers.joined(name).as_deref(),
            expected_value(expected, name),
            "header {name}"
        );
    }
}

pub fn assert_header_map(headers: &HeaderMap, expected: &[(&str, &str)]) {
    for name in CORS_HEADERS {
        assert_eq!(
            map_value(headers, name).as_deref(),
            expected_value(expected, name),
            "header {name}"
        );
    }
}

pub fn assert_header_eq(headers: &Headers, name: &str, expected: &str) {
    assert_eq!(headers.joined(name).as_deref(), Some(expected), "header {name}");
}

pub fn assert_vary_eq<const N: usize>(headers: &Headers, expected: [&str; N]) {
    assert_eq!(vary_values(headers), expected.to_vec());
}

pub fn assert_only_vary(headers: &Headers) {
    for name in CORS_HEADERS.iter().skip(1) {
        assert!(!headers.contains(name), "unexpected header {name}");
    }
}

/// Runs `request` through the three synchronous adapters with the same
/// downstream handler, returning what each one recorded.
pub fn run_adapters(cors: &Cors, request: &Request<()>) -> [(&'static str, Recorder); 3] {
    let ctx = RequestContext::from_request(request);

    let mut wrapped = Recorder::default();
    cors.wrap(hello).serve(&ctx, &mut wrapped);

    let mut applied = Recorder::default();
    cors.apply(&ctx, &mut applied);

    let mut served = Recorder::default();
    cors.serve(&ctx, &mut served, hello);

    [("wrap", wrapped), ("apply", applied), ("serve", served)]
}

pub fn preflight_headers(cors: &Cors, request: &Request<()>) -> Headers {
    let mut headers = Headers::new();
    cors.handle_preflight(&RequestContext::from_request(request), &mut headers);
    headers
}

pub fn actual_headers(cors: &Cors, request: &Request<()>) -> Headers {
    let mut headers = Headers::new();
    cors.handle_actual_request(&RequestContext::from_request(request), &mut headers);
    headers
}
