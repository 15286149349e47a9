use crate::util::normalize_lower;
use crate::wildcard::Wildcard;
use indexmap::IndexSet;
use regex_automata::meta::{BuildError, Regex};
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;

/// Caller-supplied origin check. Receives the `Origin` header exactly as sent.
pub type OriginPredicateFn = dyn Fn(&str) -> bool + Send + Sync;

/// Strategy deciding whether a request origin may proceed.
#[derive(Clone)]
pub enum OriginPolicy {
    /// Every origin is admitted.
    Any,
    /// Lower-cased literal origins plus single-`*` patterns.
    List {
        exact: IndexSet<String>,
        wildcards: Vec<Wildcard>,
    },
    /// A caller-supplied predicate; replaces every other origin setting.
    Predicate(Arc<OriginPredicateFn>),
}

impl OriginPolicy {
    /// Builds the origin strategy from raw configuration.
    ///
    /// A predicate wins over any list. An empty list admits everything, and a
    /// `*` entry anywhere in the list discards the other entries.
    pub fn compile<S>(origins: &[S], predicate: Option<&Arc<OriginPredicateFn>>) -> Self
    where
        S: AsRef<str>,
    {
        if let Some(predicate) = predicate {
            return Self::Predicate(Arc::clone(predicate));
        }
        if origins.is_empty() {
            return Self::Any;
        }

        let mut exact = IndexSet::new();
        let mut wildcards = Vec::new();
        for origin in origins {
            let origin = normalize_lower(origin.as_ref());
            if origin == "*" {
                return Self::Any;
            }
            match Wildcard::parse(&origin) {
                Some(wildcard) => wildcards.push(wildcard),
                None => {
                    exact.insert(origin);
                }
            }
        }

        Self::List { exact, wildcards }
    }

    pub fn predicate<F>(predicate: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self::Predicate(Arc::new(predicate))
    }

    pub fn admits(&self, origin: &str) -> bool {
        match self {
            OriginPolicy::Any => true,
            OriginPolicy::Predicate(predicate) => predicate(origin),
            OriginPolicy::List { exact, wildcards } => {
                let origin = normalize_lower(origin);
                exact.contains(&origin) || wildcards.iter().any(|wildcard| wildcard.matches(&origin))
            }
        }
    }

    pub fn allows_all(&self) -> bool {
        matches!(self, OriginPolicy::Any)
    }
}

impl fmt::Debug for OriginPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OriginPolicy::Any => f.write_str("Any"),
            OriginPolicy::List { exact, wildcards } => f
                .debug_struct("List")
                .field("exact", exact)
                .field("wildcards", wildcards)
                .finish(),
            OriginPolicy::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("failed to compile origin pattern")]
    Build(#[source] Box<BuildError>),
    #[error("compiling origin pattern took {elapsed:?}, over the {budget:?} budget")]
    Timeout { elapsed: Duration, budget: Duration },
    #[error("origin pattern length {length} exceeds maximum allowed {max}")]
    TooLong { length: usize, max: usize },
}

const PATTERN_COMPILE_BUDGET: Duration = Duration::from_millis(100);
const MAX_PATTERN_LENGTH: usize = 50_000;

/// Compiles a case-insensitive regular expression into an origin predicate.
///
/// The expression is searched, not anchored: use `^` and `$` to pin it.
pub fn origin_pattern(pattern: &str) -> Result<Arc<OriginPredicateFn>, PatternError> {
    let regex = compile_pattern(pattern, PATTERN_COMPILE_BUDGET)?;
    Ok(Arc::new(move |origin: &str| regex.is_match(origin.as_bytes())))
}

fn compile_pattern(pattern: &str, budget: Duration) -> Result<Regex, PatternError> {
    if pattern.len() > MAX_PATTERN_LENGTH {
        return Err(PatternError::TooLong {
            length: pattern.len(),
            max: MAX_PATTERN_LENGTH,
        });
    }

    let started = Instant::now();
    let regex =
        Regex::new(&format!("(?i:{pattern})")).map_err(|err| PatternError::Build(Box::new(err)))?;
    let elapsed = started.elapsed();
    if elapsed > budget {
        return Err(PatternError::Timeout { elapsed, budget });
    }

    Ok(regex)
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
