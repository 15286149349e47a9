use crate::constants::header;
use crate::util::{canonical_header_key, convert};

/// Request headers a preflight may ask for.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum AllowedHeaders {
    /// Canonicalized header names.
    List(Vec<String>),
    /// Every requested header is acceptable.
    Any,
}

impl Default for AllowedHeaders {
    fn default() -> Self {
        AllowedHeaders::List(vec![
            header::ORIGIN.to_string(),
            header::ACCEPT.to_string(),
            header::CONTENT_TYPE.to_string(),
            header::X_REQUESTED_WITH.to_string(),
        ])
    }
}

impl AllowedHeaders {
    /// Builds the allow-list from configured names.
    ///
    /// An empty input yields the default list. A `*` entry yields [`Self::Any`];
    /// otherwise every entry is canonicalized and `Origin` is appended.
    pub fn list<S: AsRef<str>>(values: &[S]) -> Self {
        if values.is_empty() {
            return Self::default();
        }
        if values.iter().any(|value| value.as_ref() == "*") {
            return Self::Any;
        }

        let mut names = convert(values, canonical_header_key);
        names.push(header::ORIGIN.to_string());
        Self::List(names)
    }

    pub fn any() -> Self {
        Self::Any
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }

    /// All-or-nothing: one unlisted name rejects the whole request.
    pub fn allows_headers<S: AsRef<str>>(&self, requested: &[S]) -> bool {
        match self {
            Self::Any => true,
            Self::List(allowed) => requested.iter().all(|name| {
                let name = canonical_header_key(name.as_ref());
                allowed.iter().any(|allowed_name| *allowed_name == name)
            }),
        }
    }
}

#[cfg(test)]
#[path = "allowed_headers_test.rs"]
mod allowed_headers_test;
