use cors_guard::constants::header;
use cors_guard::{Headers, RequestContext, ResponseWriter};
use http::{HeaderMap, StatusCode};

/// In-memory response used to observe what each adapter writes.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Recorder {
    pub headers: Headers,
    pub status: Option<StatusCode>,
    pub body: String,
}

impl ResponseWriter for Recorder {
    type Sink = Headers;

    fn header_sink(&mut self) -> &mut Headers {
        &mut self.headers
    }

    fn write_status(&mut self, status: StatusCode) {
        self.status = Some(status);
    }
}

pub fn hello(_request: &RequestContext<'_>, response: &mut Recorder) {
    response.body.push_str("hello");
}

pub fn header_value(headers: &Headers, name: &str) -> Option<String> {
    headers.joined(name)
}

pub fn map_value(headers: &HeaderMap, name: &str) -> Option<String> {
    let values: Vec<&str> = headers
        .get_all(name)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .collect();
    if values.is_empty() {
        None
    } else {
        Some(values.join(", "))
    }
}

pub fn has_header(headers: &Headers, name: &str) -> bool {
    headers.contains(name)
}

pub fn vary_values(headers: &Headers) -> Vec<&str> {
    headers
        .get_all(header::VARY)
        .iter()
        .map(String::as_str)
        .collect()
}
