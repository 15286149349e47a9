pub mod constants;
mod allowed_headers;
mod allowed_methods;
mod context;
mod cors;
mod handler;
mod header_builder;
mod headers;
mod logger;
mod options;
mod origin;
mod policy;
mod result;
mod service;
mod util;
mod wildcard;

pub use allowed_headers::AllowedHeaders;
pub use allowed_methods::AllowedMethods;
pub use context::RequestContext;
pub use cors::Cors;
pub use handler::{CorsHandler, Handler, ResponseWriter};
pub use headers::{HeaderSink, Headers};
pub use logger::{DebugLogger, TracingLogger};
pub use options::CorsOptions;
pub use origin::{OriginPolicy, OriginPredicateFn, PatternError, origin_pattern};
pub use policy::Policy;
pub use result::{Rejection, Route};
pub use service::{CorsLayer, CorsService, ResponseFuture};
pub use util::{canonical_header_key, convert, normalize_lower, parse_header_list};
pub use wildcard::Wildcard;
