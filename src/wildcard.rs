/// An origin pattern split around its first `*`.
///
/// `http://*.example.com` becomes prefix `http://` and suffix `.example.com`.
/// Anything after a second `*` stays part of the suffix literally, so such
/// patterns only ever match candidates that contain that `*` themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wildcard {
    prefix: String,
    suffix: String,
}

impl Wildcard {
    pub fn new<P, S>(prefix: P, suffix: S) -> Self
    where
        P: Into<String>,
        S: Into<String>,
    {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }

    /// Splits `pattern` at its first `*`; `None` when it has none.
    pub fn parse(pattern: &str) -> Option<Self> {
        pattern
            .split_once('*')
            .map(|(prefix, suffix)| Self::new(prefix, suffix))
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    pub fn matches(&self, candidate: &str) -> bool {
        candidate.len() >= self.prefix.len() + self.suffix.len()
            && candidate.starts_with(&self.prefix)
            && candidate.ends_with(&self.suffix)
    }
}

#[cfg(test)]
#[path = "wildcard_test.rs"]
mod wildcard_test;
