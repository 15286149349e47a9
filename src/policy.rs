use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::options::CorsOptions;
use crate::origin::OriginPolicy;
use crate::util::{canonical_header_key, convert};

/// Normalized, read-only form of [`CorsOptions`], built once and shared by
/// every request.
#[derive(Clone, Debug)]
pub struct Policy {
    origins: OriginPolicy,
    methods: AllowedMethods,
    headers: AllowedHeaders,
    exposed_headers: Vec<String>,
    allow_credentials: bool,
    max_age: i64,
    options_passthrough: bool,
}

impl Policy {
    /// Compilation is total: any configuration, however contradictory,
    /// produces a usable policy.
    pub fn compile(options: &CorsOptions) -> Self {
        let methods = if options.allowed_methods.is_empty() {
            AllowedMethods::default()
        } else {
            AllowedMethods::list(&options.allowed_methods)
        };

        Self {
            origins: OriginPolicy::compile(
                &options.allowed_origins,
                options.allow_origin_fn.as_ref(),
            ),
            methods,
            headers: AllowedHeaders::list(&options.allowed_headers),
            exposed_headers: convert(&options.exposed_headers, canonical_header_key),
            allow_credentials: options.allow_credentials,
            max_age: options.max_age,
            options_passthrough: options.options_passthrough,
        }
    }

    pub fn origins(&self) -> &OriginPolicy {
        &self.origins
    }

    pub fn allows_all_origins(&self) -> bool {
        self.origins.allows_all()
    }

    pub fn methods(&self) -> &AllowedMethods {
        &self.methods
    }

    pub fn headers(&self) -> &AllowedHeaders {
        &self.headers
    }

    pub fn exposed_headers(&self) -> &[String] {
        &self.exposed_headers
    }

    pub fn allow_credentials(&self) -> bool {
        self.allow_credentials
    }

    pub fn max_age(&self) -> i64 {
        self.max_age
    }

    pub fn options_passthrough(&self) -> bool {
        self.options_passthrough
    }
}

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;
