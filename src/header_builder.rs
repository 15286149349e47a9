use crate::constants::header;
use crate::headers::HeaderSink;
use crate::policy::Policy;

pub(crate) struct HeaderBuilder<'a> {
    policy: &'a Policy,
}

impl<'a> HeaderBuilder<'a> {
    pub(crate) fn new(policy: &'a Policy) -> Self {
        Self { policy }
    }

    pub(crate) fn write_vary<S: HeaderSink + ?Sized>(&self, sink: &mut S, names: &[&str]) {
        for name in names {
            sink.append_header(header::VARY, name);
        }
    }

    /// `*` only when every origin is allowed and credentials are off; the
    /// request origin is echoed verbatim otherwise.
    pub(crate) fn write_allow_origin<S: HeaderSink + ?Sized>(&self, sink: &mut S, origin: &str) {
        if self.policy.allows_all_origins() && !self.policy.allow_credentials() {
            sink.set_header(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*");
        } else {
            sink.set_header(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin);
        }
    }

    pub(crate) fn write_allow_methods<S: HeaderSink + ?Sized>(
        &self,
        sink: &mut S,
        requested_method: &str,
    ) {
        sink.set_header(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            &requested_method.to_uppercase(),
        );
    }

    pub(crate) fn write_allow_headers<S: HeaderSink + ?Sized>(
        &self,
        sink: &mut S,
        requested_headers: &[String],
    ) {
        if !requested_headers.is_empty() {
            sink.set_header(
                header::ACCESS_CONTROL_ALLOW_HEADERS,
                &requested_headers.join(", "),
            );
        }
    }

    pub(crate) fn write_credentials<S: HeaderSink + ?Sized>(&self, sink: &mut S) {
        if self.policy.allow_credentials() {
            sink.set_header(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true");
        }
    }

    pub(crate) fn write_max_age<S: HeaderSink + ?Sized>(&self, sink: &mut S) {
        if self.policy.max_age() > 0 {
            sink.set_header(
                header::ACCESS_CONTROL_MAX_AGE,
                &self.policy.max_age().to_string(),
            );
        }
    }

    pub(crate) fn write_exposed_headers<S: HeaderSink + ?Sized>(&self, sink: &mut S) {
        let exposed = self.policy.exposed_headers();
        if !exposed.is_empty() {
            sink.set_header(header::ACCESS_CONTROL_EXPOSE_HEADERS, &exposed.join(", "));
        }
    }
}

#[cfg(test)]
#[path = "header_builder_test.rs"]
mod header_builder_test;
