use crate::constants::header;
use crate::headers::Headers;

/// Per-request view handed to the engine and the inner handler.
///
/// `path` is the path relative to the application mount point, i.e. with any
/// script-name prefix already stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    method: String,
    path: String,
    headers: Headers,
    secure: bool,
    cors_enabled: Option<bool>,
    original_referer: Option<String>,
    lookup_verdict: Option<(String, bool)>,
}

impl Request {
    pub fn new<M, P>(method: M, path: P) -> Self
    where
        M: Into<String>,
        P: Into<String>,
    {
        Self {
            method: method.into(),
            path: path.into(),
            headers: Headers::new(),
            secure: false,
            cors_enabled: None,
            original_referer: None,
            lookup_verdict: None,
        }
    }

    pub fn with_header<N, V>(mut self, name: N, value: V) -> Self
    where
        N: Into<String>,
        V: Into<String>,
    {
        self.headers.insert(name, value);
        self
    }

    pub fn with_secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    pub fn headers_mut(&mut self) -> &mut Headers {
        &mut self.headers
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)
    }

    pub fn origin(&self) -> Option<&str> {
        self.headers.get(header::ORIGIN)
    }

    /// Whether the request arrived over an encrypted transport.
    pub fn is_secure(&self) -> bool {
        self.secure
    }

    /// Enablement recorded by the preflight check, if it is still attached.
    pub fn cors_enabled(&self) -> Option<bool> {
        self.cors_enabled
    }

    pub fn set_cors_enabled(&mut self, enabled: bool) {
        self.cors_enabled = Some(enabled);
    }

    pub fn clear_cors_enabled(&mut self) {
        self.cors_enabled = None;
    }

    /// The `Referer` value replaced by HTTPS referer rewriting, if any.
    pub fn original_referer(&self) -> Option<&str> {
        self.original_referer.as_deref()
    }

    pub(crate) fn set_original_referer(&mut self, referer: Option<String>) {
        self.original_referer = referer;
    }

    /// Cached origin-lookup answer for `host_and_port`, so the lookup runs at
    /// most once per request.
    pub(crate) fn lookup_verdict(&self, host_and_port: &str) -> Option<bool> {
        self.lookup_verdict
            .as_ref()
            .filter(|(key, _)| key == host_and_port)
            .map(|(_, allowed)| *allowed)
    }

    pub(crate) fn set_lookup_verdict(&mut self, host_and_port: &str, allowed: bool) {
        self.lookup_verdict = Some((host_and_port.to_string(), allowed));
    }
}

#[cfg(test)]
#[path = "request_test.rs"]
mod request_test;
