use crate::constants::{FILE_ORIGIN, NULL_ORIGIN};
use std::collections::HashSet;
use std::sync::Arc;
use url::Url;

const MAX_ORIGIN_LENGTH: usize = 4_096;

/// The (scheme, host, port) triple origins are compared by.
///
/// Ports fall back to the scheme default, so `https://a.test` and
/// `https://a.test:443` are the same origin. Hosts are compared after the
/// normalisation `url` applies (lowercasing, IDNA).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OriginTriple {
    scheme: String,
    host: Option<String>,
    port: Option<u16>,
}

impl OriginTriple {
    /// `None` for host-less URLs such as `localhost:3000`, which parses with
    /// `localhost` as its scheme.
    fn from_url(url: &Url) -> Option<Self> {
        let host = url.host_str().filter(|host| !host.is_empty())?;
        Some(Self {
            scheme: url.scheme().to_string(),
            host: Some(host.to_string()),
            port: url.port_or_known_default(),
        })
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    pub fn port(&self) -> Option<u16> {
        self.port
    }
}

/// A parsed `Origin` request header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOrigin<'a> {
    raw: &'a str,
    triple: Option<OriginTriple>,
    host_and_port: Option<&'a str>,
}

impl<'a> RequestOrigin<'a> {
    /// Returns `None` for empty or unparsable values and for values carrying
    /// credentials. `"null"` and `"file://"` are kept as opaque origins with no
    /// triple.
    pub fn parse(raw: &'a str) -> Option<Self> {
        if raw.is_empty() || raw.len() > MAX_ORIGIN_LENGTH {
            return None;
        }

        if raw == NULL_ORIGIN || raw == FILE_ORIGIN {
            return Some(Self::opaque(raw));
        }

        let url = Url::parse(raw).ok()?;
        if !url.username().is_empty() || url.password().is_some() {
            return None;
        }

        let triple = OriginTriple::from_url(&url);
        let host_and_port = triple.as_ref().and_then(|_| raw_authority(raw));
        Some(Self {
            raw,
            triple,
            host_and_port,
        })
    }

    fn opaque(raw: &'a str) -> Self {
        Self {
            raw,
            triple: None,
            host_and_port: None,
        }
    }

    pub fn as_str(&self) -> &'a str {
        self.raw
    }

    pub fn is_null(&self) -> bool {
        self.raw == NULL_ORIGIN
    }

    pub fn triple(&self) -> Option<&OriginTriple> {
        self.triple.as_ref()
    }

    /// Host plus port exactly as written in the header, e.g.
    /// `example.com:8080` or `example.com:443`; the key handed to an
    /// [`OriginLookup`].
    pub fn host_and_port(&self) -> Option<&str> {
        self.host_and_port
    }
}

fn raw_authority(raw: &str) -> Option<&str> {
    let (_, rest) = raw.split_once("://")?;
    rest.split(['/', '?', '#'])
        .next()
        .filter(|authority| !authority.is_empty())
}

/// One configured entry of the exact-match allow-list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowedOrigin {
    raw: String,
    triple: Option<OriginTriple>,
}

impl AllowedOrigin {
    pub fn new<S: Into<String>>(value: S) -> Self {
        let raw = value.into();
        let triple = if raw == NULL_ORIGIN || raw == FILE_ORIGIN {
            None
        } else {
            Url::parse(&raw)
                .ok()
                .and_then(|url| OriginTriple::from_url(&url))
        };
        Self { raw, triple }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn triple(&self) -> Option<&OriginTriple> {
        self.triple.as_ref()
    }
}

impl From<&str> for AllowedOrigin {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for AllowedOrigin {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// Exact-match allow-list, including the `"null"` and `"file://"` sentinels.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowedOrigins {
    entries: Vec<AllowedOrigin>,
}

impl AllowedOrigins {
    pub fn list<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<AllowedOrigin>,
    {
        let mut seen = HashSet::new();
        let entries = values
            .into_iter()
            .map(Into::into)
            .filter(|entry: &AllowedOrigin| seen.insert(entry.raw.clone()))
            .collect();
        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AllowedOrigin> {
        self.entries.iter()
    }

    pub fn contains_null(&self) -> bool {
        self.contains_raw(NULL_ORIGIN)
    }

    fn contains_raw(&self, sentinel: &str) -> bool {
        self.entries.iter().any(|entry| entry.raw == sentinel)
    }

    /// `"null"` and `"file://"` match only themselves; anything else is
    /// compared by its (scheme, host, port) triple, so host-less entries never
    /// match.
    pub fn matches(&self, origin: &RequestOrigin<'_>) -> bool {
        if origin.is_null() || origin.as_str() == FILE_ORIGIN {
            return self.contains_raw(origin.as_str());
        }

        let Some(candidate) = origin.triple() else {
            return false;
        };

        self.entries
            .iter()
            .filter_map(AllowedOrigin::triple)
            .any(|triple| triple == candidate)
    }
}

/// Persistent allow-list consulted after the configured lists.
pub trait OriginLookup: Send + Sync {
    /// `host_and_port` is the origin's authority as sent, including an
    /// explicit port even when it is the scheme default.
    fn is_authorized(&self, host_and_port: &str) -> bool;
}

impl<F> OriginLookup for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn is_authorized(&self, host_and_port: &str) -> bool {
        self(host_and_port)
    }
}

pub type SharedOriginLookup = Arc<dyn OriginLookup>;

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
