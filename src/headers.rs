use crate::constants::header;
use crate::util::canonical_header_key;
use http::header::{HeaderMap, HeaderName, HeaderValue};
use indexmap::IndexMap;

/// Destination for negotiated response headers.
///
/// `Vary` is always appended; every other CORS header is set, replacing any
/// value already present.
pub trait HeaderSink {
    fn append_header(&mut self, name: &str, value: &str);
    fn set_header(&mut self, name: &str, value: &str);
}

impl<S: HeaderSink + ?Sized> HeaderSink for &mut S {
    fn append_header(&mut self, name: &str, value: &str) {
        (**self).append_header(name, value);
    }

    fn set_header(&mut self, name: &str, value: &str) {
        (**self).set_header(name, value);
    }
}

/// Insertion-ordered header buffer keyed by canonical header name.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Headers {
    entries: IndexMap<String, Vec<String>>,
}

impl Headers {
    pub fn new() -> Self {
        Self::default()
    }

    /// First value recorded under `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.get_all(name).first().map(String::as_str)
    }

    pub fn get_all(&self, name: &str) -> &[String] {
        self.entries
            .get(&canonical_header_key(name))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Every value under `name` joined with `", "`, the way they read on the wire.
    pub fn joined(&self, name: &str) -> Option<String> {
        let values = self.get_all(name);
        if values.is_empty() {
            None
        } else {
            Some(values.join(", "))
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        !self.get_all(name).is_empty()
    }

    /// Number of distinct header names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries.iter().flat_map(|(name, values)| {
            values
                .iter()
                .map(move |value| (name.as_str(), value.as_str()))
        })
    }

    /// Replays the buffer onto another sink with the same append/set split.
    pub fn write_to<S: HeaderSink + ?Sized>(&self, sink: &mut S) {
        for (name, value) in self.iter() {
            if name == header::VARY {
                sink.append_header(name, value);
            } else {
                sink.set_header(name, value);
            }
        }
    }
}

impl HeaderSink for Headers {
    fn append_header(&mut self, name: &str, value: &str) {
        self.entries
            .entry(canonical_header_key(name))
            .or_default()
            .push(value.to_owned());
    }

    fn set_header(&mut self, name: &str, value: &str) {
        self.entries
            .insert(canonical_header_key(name), vec![value.to_owned()]);
    }
}

impl HeaderSink for HeaderMap {
    fn append_header(&mut self, name: &str, value: &str) {
        if let Some((name, value)) = http_pair(name, value) {
            self.append(name, value);
        }
    }

    fn set_header(&mut self, name: &str, value: &str) {
        if let Some((name, value)) = http_pair(name, value) {
            self.insert(name, value);
        }
    }
}

fn http_pair(name: &str, value: &str) -> Option<(HeaderName, HeaderValue)> {
    match (
        HeaderName::from_bytes(name.as_bytes()),
        HeaderValue::from_str(value),
    ) {
        (Ok(name), Ok(value)) => Some((name, value)),
        _ => {
            tracing::warn!(target: "cors_guard", header = name, "skipping header that is not valid on the wire");
            None
        }
    }
}

#[cfg(test)]
#[path = "headers_test.rs"]
mod headers_test;
