use crate::case::HeaderCasing;
use crate::constants::header;
use crate::headers::Headers;

/// Response produced by an inner handler or by the preflight short-circuit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    status: u16,
    headers: Headers,
    body: Vec<u8>,
    cors_processed: bool,
}

impl Default for Response {
    fn default() -> Self {
        Self::new(200)
    }
}

impl Response {
    pub fn new(status: u16) -> Self {
        Self {
            status,
            headers: Headers::new(),
            body: Vec::new(),
            cors_processed: false,
        }
    }

    pub fn ok() -> Self {
        Self::new(200)
    }

    /// Empty `200` answering a preflight request.
    pub(crate) fn preflight(casing: HeaderCasing) -> Self {
        let mut response = Self::ok();
        response
            .headers
            .insert(casing.apply(header::CONTENT_LENGTH), "0");
        response
    }

    pub fn with_body<B: Into<Vec<u8>>>(mut self, body: B) -> Self {
        self.body = body.into();
        self
    }

    pub fn with_header<N, V>(mut self, name: N, value: V) -> Self
    where
        N: Into<String>,
        V: Into<String>,
    {
        self.headers.insert(name, value);
        self
    }

    pub fn status(&self) -> u16 {
        self.status
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

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Set once CORS post-processing has run, so nested pipelines skip it.
    pub fn is_cors_processed(&self) -> bool {
        self.cors_processed
    }

    pub(crate) fn mark_cors_processed(&mut self) {
        self.cors_processed = true;
    }
}

#[cfg(test)]
#[path = "response_test.rs"]
mod response_test;
