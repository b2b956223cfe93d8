use crate::case::HeaderCasing;
use crate::constants::{method, setting};
use crate::origin::AllowedOrigins;
use crate::pattern::Pattern;
use crate::settings::{
    ConfigError, SettingsSource, expect_bool, expect_string_list, lookup_with_alias,
};

pub const DEFAULT_PREFLIGHT_MAX_AGE: u64 = 86_400;

pub fn default_headers() -> Vec<String> {
    [
        "accept",
        "authorization",
        "content-type",
        "user-agent",
        "x-csrftoken",
        "x-requested-with",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

pub fn default_methods() -> Vec<String> {
    [
        method::DELETE,
        method::GET,
        method::OPTIONS,
        method::PATCH,
        method::POST,
        method::PUT,
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

/// Immutable policy snapshot the engine evaluates requests against.
#[derive(Debug, Clone, PartialEq)]
pub struct CorsOptions {
    pub allow_headers: Vec<String>,
    pub allow_methods: Vec<String>,
    pub allow_credentials: bool,
    pub allow_private_network: bool,
    /// Seconds; `0` omits `Access-Control-Max-Age` entirely.
    pub preflight_max_age: u64,
    pub allow_all_origins: bool,
    pub allowed_origins: AllowedOrigins,
    pub allowed_origin_regexes: Vec<Pattern>,
    pub expose_headers: Vec<String>,
    pub urls_regex: Pattern,
    pub header_casing: HeaderCasing,
    pub replace_https_referer: bool,
}

impl Default for CorsOptions {
    fn default() -> Self {
        Self {
            allow_headers: default_headers(),
            allow_methods: default_methods(),
            allow_credentials: false,
            allow_private_network: false,
            preflight_max_age: DEFAULT_PREFLIGHT_MAX_AGE,
            allow_all_origins: false,
            allowed_origins: AllowedOrigins::default(),
            allowed_origin_regexes: Vec::new(),
            expose_headers: Vec::new(),
            urls_regex: Pattern::match_everything(),
            header_casing: HeaderCasing::default(),
            replace_https_referer: false,
        }
    }
}

impl CorsOptions {
    /// Builds options from `source`, falling back to defaults for absent keys.
    ///
    /// `CORS_ALLOW_ALL_ORIGINS`, `CORS_ALLOWED_ORIGINS` and
    /// `CORS_ALLOWED_ORIGIN_REGEXES` take precedence over their deprecated
    /// spellings; the old name is read only when the new one is absent.
    pub fn resolve<S: SettingsSource + ?Sized>(source: &S) -> Result<Self, ConfigError> {
        let mut options = Self::default();

        if let Some(value) = source.setting(setting::ALLOW_HEADERS) {
            options.allow_headers = expect_string_list(setting::ALLOW_HEADERS, &value)?;
        }
        if let Some(value) = source.setting(setting::ALLOW_METHODS) {
            options.allow_methods = expect_string_list(setting::ALLOW_METHODS, &value)?;
        }
        if let Some(value) = source.setting(setting::ALLOW_CREDENTIALS) {
            options.allow_credentials = expect_bool(setting::ALLOW_CREDENTIALS, &value)?;
        }
        if let Some(value) = source.setting(setting::ALLOW_PRIVATE_NETWORK) {
            options.allow_private_network = expect_bool(setting::ALLOW_PRIVATE_NETWORK, &value)?;
        }
        if let Some(value) = source.setting(setting::PREFLIGHT_MAX_AGE) {
            options.preflight_max_age = value.as_u64().ok_or(ConfigError::InvalidType {
                key: setting::PREFLIGHT_MAX_AGE,
                expected: "an integer greater than or equal to zero",
            })?;
        }
        if let Some((key, value)) = lookup_with_alias(
            source,
            setting::ALLOW_ALL_ORIGINS,
            setting::deprecated::ORIGIN_ALLOW_ALL,
        ) {
            options.allow_all_origins = expect_bool(key, &value)?;
        }
        if let Some((key, value)) = lookup_with_alias(
            source,
            setting::ALLOWED_ORIGINS,
            setting::deprecated::ORIGIN_WHITELIST,
        ) {
            options.allowed_origins = AllowedOrigins::list(expect_string_list(key, &value)?);
        }
        if let Some((key, value)) = lookup_with_alias(
            source,
            setting::ALLOWED_ORIGIN_REGEXES,
            setting::deprecated::ORIGIN_REGEX_WHITELIST,
        ) {
            options.allowed_origin_regexes = expect_string_list(key, &value)?
                .iter()
                .map(|pattern| Pattern::new(pattern))
                .collect::<Result<_, _>>()
                .map_err(|source| ConfigError::InvalidPattern { key, source })?;
        }
        if let Some(value) = source.setting(setting::EXPOSE_HEADERS) {
            options.expose_headers = expect_string_list(setting::EXPOSE_HEADERS, &value)?;
        }
        if let Some(value) = source.setting(setting::URLS_REGEX) {
            let pattern = value.as_str().ok_or(ConfigError::InvalidType {
                key: setting::URLS_REGEX,
                expected: "a string",
            })?;
            options.urls_regex =
                Pattern::new(pattern).map_err(|source| ConfigError::InvalidPattern {
                    key: setting::URLS_REGEX,
                    source,
                })?;
        }
        if let Some(value) = source.setting(setting::USE_PASCAL_CASE_FOR_HEADER_NAMES) {
            options.header_casing = HeaderCasing::from_pascal_flag(expect_bool(
                setting::USE_PASCAL_CASE_FOR_HEADER_NAMES,
                &value,
            )?);
        }
        if let Some(value) = source.setting(setting::REPLACE_HTTPS_REFERER) {
            options.replace_https_referer = expect_bool(setting::REPLACE_HTTPS_REFERER, &value)?;
        }

        Ok(options)
    }
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
