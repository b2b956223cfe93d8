use crate::constants::{FILE_ORIGIN, NULL_ORIGIN, setting};
use crate::pattern::Pattern;
use crate::settings::{
    SettingsSource, as_bool, as_non_negative_int, as_string_list, lookup_with_alias,
};
use thiserror::Error;
use url::Url;

/// A misconfigured setting found by [`check_settings`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{id}: {message}")]
pub struct CheckError {
    pub id: &'static str,
    pub message: String,
}

impl CheckError {
    fn new(id: &'static str, message: impl Into<String>) -> Self {
        Self {
            id,
            message: message.into(),
        }
    }
}

/// Reports every wrong-shaped CORS setting in `source`.
///
/// Absent keys are fine, they resolve to defaults. Unlike
/// [`CorsOptions::resolve`](crate::CorsOptions::resolve) this does not stop at
/// the first problem.
pub fn check_settings<S: SettingsSource + ?Sized>(source: &S) -> Vec<CheckError> {
    let mut errors = Vec::new();

    check_string_list(source, setting::ALLOW_HEADERS, "cors.E001", &mut errors);
    check_string_list(source, setting::ALLOW_METHODS, "cors.E002", &mut errors);
    check_bool(source, setting::ALLOW_CREDENTIALS, "cors.E003", &mut errors);

    if let Some(value) = source.setting(setting::PREFLIGHT_MAX_AGE) {
        if as_non_negative_int(&value).is_none() {
            errors.push(CheckError::new(
                "cors.E004",
                format!(
                    "{} should be an integer greater than or equal to zero.",
                    setting::PREFLIGHT_MAX_AGE
                ),
            ));
        }
    }

    if let Some((key, value)) = lookup_with_alias(
        source,
        setting::ALLOW_ALL_ORIGINS,
        setting::deprecated::ORIGIN_ALLOW_ALL,
    ) {
        if as_bool(&value).is_none() {
            errors.push(CheckError::new(
                "cors.E005",
                format!("{key} should be a bool."),
            ));
        }
    }

    if let Some((key, value)) = lookup_with_alias(
        source,
        setting::ALLOWED_ORIGINS,
        setting::deprecated::ORIGIN_WHITELIST,
    ) {
        match as_string_list(&value) {
            Some(origins) => check_origins(key, &origins, &mut errors),
            None => errors.push(CheckError::new(
                "cors.E006",
                format!("{key} should be a sequence of strings."),
            )),
        }
    }

    if let Some((key, value)) = lookup_with_alias(
        source,
        setting::ALLOWED_ORIGIN_REGEXES,
        setting::deprecated::ORIGIN_REGEX_WHITELIST,
    ) {
        match as_string_list(&value) {
            Some(patterns) => {
                for pattern in patterns.iter().filter(|p| Pattern::new(p).is_err()) {
                    errors.push(CheckError::new(
                        "cors.E007",
                        format!("{key} contains an invalid pattern: {pattern:?}."),
                    ));
                }
            }
            None => errors.push(CheckError::new(
                "cors.E007",
                format!("{key} should be a sequence of strings."),
            )),
        }
    }

    check_string_list(source, setting::EXPOSE_HEADERS, "cors.E008", &mut errors);

    if let Some(value) = source.setting(setting::URLS_REGEX) {
        match value.as_str() {
            Some(pattern) if Pattern::new(pattern).is_err() => errors.push(CheckError::new(
                "cors.E009",
                format!("{} is not a valid pattern.", setting::URLS_REGEX),
            )),
            Some(_) => {}
            None => errors.push(CheckError::new(
                "cors.E009",
                format!("{} should be a string.", setting::URLS_REGEX),
            )),
        }
    }

    check_bool(
        source,
        setting::REPLACE_HTTPS_REFERER,
        "cors.E011",
        &mut errors,
    );
    check_bool(
        source,
        setting::ALLOW_PRIVATE_NETWORK,
        "cors.E012",
        &mut errors,
    );
    check_bool(
        source,
        setting::USE_PASCAL_CASE_FOR_HEADER_NAMES,
        "cors.E015",
        &mut errors,
    );

    errors
}

fn check_bool<S: SettingsSource + ?Sized>(
    source: &S,
    key: &'static str,
    id: &'static str,
    errors: &mut Vec<CheckError>,
) {
    if let Some(value) = source.setting(key) {
        if as_bool(&value).is_none() {
            errors.push(CheckError::new(id, format!("{key} should be a bool.")));
        }
    }
}

fn check_string_list<S: SettingsSource + ?Sized>(
    source: &S,
    key: &'static str,
    id: &'static str,
    errors: &mut Vec<CheckError>,
) {
    if let Some(value) = source.setting(key) {
        if as_string_list(&value).is_none() {
            errors.push(CheckError::new(
                id,
                format!("{key} should be a sequence of strings."),
            ));
        }
    }
}

fn check_origins(key: &str, origins: &[String], errors: &mut Vec<CheckError>) {
    for origin in origins {
        if origin == NULL_ORIGIN || origin == FILE_ORIGIN {
            continue;
        }

        let Some(url) = Url::parse(origin)
            .ok()
            .filter(|url| url.host_str().is_some())
        else {
            errors.push(CheckError::new(
                "cors.E013",
                format!("Origin {origin:?} in {key} is missing scheme or netloc."),
            ));
            continue;
        };

        let has_path = !matches!(url.path(), "" | "/");
        if has_path || url.query().is_some() || url.fragment().is_some() {
            errors.push(CheckError::new(
                "cors.E014",
                format!(
                    "Origin {origin:?} in {key} should not have path, query or fragment."
                ),
            ));
        }
    }
}

#[cfg(test)]
#[path = "checks_test.rs"]
mod checks_test;
