use cors_guard::constants::{header, method};
use http::Request;

pub struct RequestBuilder {
    method: String,
    headers: Vec<(&'static str, String)>,
}

impl RequestBuilder {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            headers: Vec::new(),
        }
    }

    pub fn origin(self, origin: impl Into<String>) -> Self {
        self.header(header::ORIGIN, origin)
    }

    pub fn request_method(self, method: impl Into<String>) -> Self {
        self.header(header::ACCESS_CONTROL_REQUEST_METHOD, method)
    }

    pub fn request_headers(self, headers: impl Into<String>) -> Self {
        self.header(header::ACCESS_CONTROL_REQUEST_HEADERS, headers)
    }

    pub fn header(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.headers.push((name, value.into()));
        self
    }

    pub fn build(self) -> Request<()> {
        let mut builder = Request::builder()
            .method(self.method.as_str())
            .uri("http://example.com/foo");
        for (name, value) in self.headers {
            builder = builder.header(name, value);
        }
        builder.body(()).expect("valid test request")
    }
}

pub fn request(method: impl Into<String>) -> RequestBuilder {
    RequestBuilder::new(method)
}

pub fn preflight_request() -> RequestBuilder {
    RequestBuilder::new(method::OPTIONS)
}

pub fn actual_request() -> RequestBuilder {
    RequestBuilder::new(method::GET)
}
