use crate::constants::method;
use crate::util::convert;

/// Methods a cross-origin caller may use, upper-cased at construction.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct AllowedMethods {
    methods: Vec<String>,
}

impl AllowedMethods {
    /// Upper-cases every entry. An empty input stays empty and admits only
    /// `OPTIONS`; defaults are applied by the policy compiler, not here.
    pub fn list<S: AsRef<str>>(values: &[S]) -> Self {
        Self {
            methods: convert(values, str::to_uppercase),
        }
    }

    pub fn values(&self) -> &[String] {
        &self.methods
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    pub fn allows_method(&self, requested: &str) -> bool {
        let requested = requested.to_uppercase();
        if requested == method::OPTIONS {
            return true;
        }
        self.methods.iter().any(|allowed| *allowed == requested)
    }
}

impl Default for AllowedMethods {
    fn default() -> Self {
        Self::list(&[method::GET, method::POST, method::HEAD])
    }
}

#[cfg(test)]
#[path = "allowed_methods_test.rs"]
mod allowed_methods_test;
