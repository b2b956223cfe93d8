pub mod constants;

mod case;
mod checks;
mod cors;
mod header_builder;
mod headers;
mod hooks;
mod middleware;
mod options;
mod origin;
mod pattern;
mod request;
mod response;
mod settings;

pub use case::HeaderCasing;
pub use checks::{CheckError, check_settings};
pub use cors::Cors;
pub use futures::future::BoxFuture;
pub use headers::Headers;
pub use hooks::{RequestHooks, RequestPredicateFn};
pub use middleware::{AsyncHandler, CorsMiddleware, EndpointCors, Handler, RefererRestore};
pub use options::{CorsOptions, DEFAULT_PREFLIGHT_MAX_AGE, default_headers, default_methods};
pub use origin::{
    AllowedOrigin, AllowedOrigins, OriginLookup, OriginTriple, RequestOrigin, SharedOriginLookup,
};
pub use pattern::{Pattern, PatternError};
pub use request::Request;
pub use response::Response;
pub use settings::{ConfigError, SettingsSource};
