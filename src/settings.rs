use crate::pattern::PatternError;
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock};
use thiserror::Error;

/// Key-value provider the options are resolved from.
///
/// Implementations must distinguish "absent" (`None`) from any present value,
/// including `null`, because deprecated aliases are only consulted when the
/// current key is absent.
pub trait SettingsSource {
    fn setting(&self, key: &str) -> Option<Value>;
}

impl SettingsSource for Map<String, Value> {
    fn setting(&self, key: &str) -> Option<Value> {
        self.get(key).cloned()
    }
}

impl SettingsSource for Value {
    fn setting(&self, key: &str) -> Option<Value> {
        self.as_object().and_then(|object| object.get(key).cloned())
    }
}

impl<S: std::hash::BuildHasher> SettingsSource for HashMap<String, Value, S> {
    fn setting(&self, key: &str) -> Option<Value> {
        self.get(key).cloned()
    }
}

impl SettingsSource for BTreeMap<String, Value> {
    fn setting(&self, key: &str) -> Option<Value> {
        self.get(key).cloned()
    }
}

impl<T: SettingsSource + ?Sized> SettingsSource for &T {
    fn setting(&self, key: &str) -> Option<Value> {
        (**self).setting(key)
    }
}

impl<T: SettingsSource + ?Sized> SettingsSource for Arc<T> {
    fn setting(&self, key: &str) -> Option<Value> {
        (**self).setting(key)
    }
}

/// Lets a live engine observe settings replaced at runtime.
impl<T: SettingsSource> SettingsSource for RwLock<T> {
    fn setting(&self, key: &str) -> Option<Value> {
        match self.read() {
            Ok(guard) => guard.setting(key),
            Err(poisoned) => poisoned.into_inner().setting(key),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("setting `{key}` should be {expected}")]
    InvalidType {
        key: &'static str,
        expected: &'static str,
    },
    #[error("setting `{key}` contains an invalid pattern")]
    InvalidPattern {
        key: &'static str,
        #[source]
        source: PatternError,
    },
}

/// Looks up `key`, falling back to `deprecated` only when `key` is absent.
pub(crate) fn lookup_with_alias<S: SettingsSource + ?Sized>(
    source: &S,
    key: &'static str,
    deprecated: &'static str,
) -> Option<(&'static str, Value)> {
    source
        .setting(key)
        .map(|value| (key, value))
        .or_else(|| source.setting(deprecated).map(|value| (deprecated, value)))
}

pub(crate) fn as_bool(value: &Value) -> Option<bool> {
    value.as_bool()
}

pub(crate) fn as_non_negative_int(value: &Value) -> Option<u64> {
    value.as_u64()
}

pub(crate) fn as_string_list(value: &Value) -> Option<Vec<String>> {
    value
        .as_array()?
        .iter()
        .map(|item| item.as_str().map(str::to_string))
        .collect()
}

pub(crate) fn expect_bool(key: &'static str, value: &Value) -> Result<bool, ConfigError> {
    as_bool(value).ok_or(ConfigError::InvalidType {
        key,
        expected: "a bool",
    })
}

pub(crate) fn expect_string_list(
    key: &'static str,
    value: &Value,
) -> Result<Vec<String>, ConfigError> {
    as_string_list(value).ok_or(ConfigError::InvalidType {
        key,
        expected: "a sequence of strings",
    })
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;
