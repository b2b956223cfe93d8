pub mod header {
    pub const ACCESS_CONTROL_ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";
    pub const ACCESS_CONTROL_ALLOW_METHODS: &str = "Access-Control-Allow-Methods";
    pub const ACCESS_CONTROL_ALLOW_HEADERS: &str = "Access-Control-Allow-Headers";
    pub const ACCESS_CONTROL_ALLOW_CREDENTIALS: &str = "Access-Control-Allow-Credentials";
    pub const ACCESS_CONTROL_ALLOW_PRIVATE_NETWORK: &str = "Access-Control-Allow-Private-Network";
    pub const ACCESS_CONTROL_EXPOSE_HEADERS: &str = "Access-Control-Expose-Headers";
    pub const ACCESS_CONTROL_MAX_AGE: &str = "Access-Control-Max-Age";
    pub const ACCESS_CONTROL_REQUEST_METHOD: &str = "Access-Control-Request-Method";
    pub const ACCESS_CONTROL_REQUEST_PRIVATE_NETWORK: &str =
        "Access-Control-Request-Private-Network";
    pub const CONTENT_LENGTH: &str = "Content-Length";
    pub const HOST: &str = "Host";
    pub const ORIGIN: &str = "Origin";
    pub const REFERER: &str = "Referer";
    pub const VARY: &str = "Vary";
}

pub mod method {
    pub const DELETE: &str = "DELETE";
    pub const GET: &str = "GET";
    pub const OPTIONS: &str = "OPTIONS";
    pub const PATCH: &str = "PATCH";
    pub const POST: &str = "POST";
    pub const PUT: &str = "PUT";
}

/// Keys read from a [`SettingsSource`](crate::SettingsSource).
pub mod setting {
    pub const ALLOW_HEADERS: &str = "CORS_ALLOW_HEADERS";
    pub const ALLOW_METHODS: &str = "CORS_ALLOW_METHODS";
    pub const ALLOW_CREDENTIALS: &str = "CORS_ALLOW_CREDENTIALS";
    pub const ALLOW_PRIVATE_NETWORK: &str = "CORS_ALLOW_PRIVATE_NETWORK";
    pub const PREFLIGHT_MAX_AGE: &str = "CORS_PREFLIGHT_MAX_AGE";
    pub const ALLOW_ALL_ORIGINS: &str = "CORS_ALLOW_ALL_ORIGINS";
    pub const ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
    pub const ALLOWED_ORIGIN_REGEXES: &str = "CORS_ALLOWED_ORIGIN_REGEXES";
    pub const EXPOSE_HEADERS: &str = "CORS_EXPOSE_HEADERS";
    pub const URLS_REGEX: &str = "CORS_URLS_REGEX";
    pub const USE_PASCAL_CASE_FOR_HEADER_NAMES: &str = "CORS_USE_PASCAL_CASE_FOR_HEADER_NAMES";
    pub const REPLACE_HTTPS_REFERER: &str = "CORS_REPLACE_HTTPS_REFERER";

    /// Deprecated spellings, honoured only when the current name is absent.
    pub mod deprecated {
        pub const ORIGIN_ALLOW_ALL: &str = "CORS_ORIGIN_ALLOW_ALL";
        pub const ORIGIN_WHITELIST: &str = "CORS_ORIGIN_WHITELIST";
        pub const ORIGIN_REGEX_WHITELIST: &str = "CORS_ORIGIN_REGEX_WHITELIST";
    }
}

pub const NULL_ORIGIN: &str = "null";
pub const FILE_ORIGIN: &str = "file://";
