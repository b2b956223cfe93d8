use crate::constants::{header, method};
use crate::headers::Headers;
use crate::options::CorsOptions;
use crate::request::Request;

const HEADER_VALUE_SEPARATOR: &str = ", ";

/// Synthesizes the CORS headers for an already-authorized origin.
///
/// Headers are produced in a fixed order: allow-origin, allow-credentials,
/// expose-headers, allow-headers, allow-methods, max-age,
/// allow-private-network.
pub(crate) struct HeaderBuilder<'a> {
    options: &'a CorsOptions,
}

impl<'a> HeaderBuilder<'a> {
    pub(crate) fn new(options: &'a CorsOptions) -> Self {
        Self { options }
    }

    pub(crate) fn build(&self, request: &Request, origin: &str) -> Headers {
        let mut headers = Headers::with_capacity(7);
        self.build_origin_header(&mut headers, origin);
        self.build_credentials_header(&mut headers);
        self.build_exposed_headers(&mut headers);
        if request.method() == method::OPTIONS {
            self.build_preflight_headers(&mut headers);
        }
        self.build_private_network_header(&mut headers, request);
        headers
    }

    fn name(&self, name: &'static str) -> String {
        self.options.header_casing.apply(name).into_owned()
    }

    /// Wildcard only when credentials are off; credentialed responses must
    /// name the origin.
    pub(crate) fn build_origin_header(&self, headers: &mut Headers, origin: &str) {
        let value = if self.options.allow_all_origins && !self.options.allow_credentials {
            "*"
        } else {
            origin
        };
        headers.insert(self.name(header::ACCESS_CONTROL_ALLOW_ORIGIN), value);
    }

    pub(crate) fn build_credentials_header(&self, headers: &mut Headers) {
        if self.options.allow_credentials {
            headers.insert(self.name(header::ACCESS_CONTROL_ALLOW_CREDENTIALS), "true");
        }
    }

    pub(crate) fn build_exposed_headers(&self, headers: &mut Headers) {
        if !self.options.expose_headers.is_empty() {
            headers.insert(
                self.name(header::ACCESS_CONTROL_EXPOSE_HEADERS),
                self.options.expose_headers.join(HEADER_VALUE_SEPARATOR),
            );
        }
    }

    pub(crate) fn build_preflight_headers(&self, headers: &mut Headers) {
        headers.insert(
            self.name(header::ACCESS_CONTROL_ALLOW_HEADERS),
            self.options.allow_headers.join(HEADER_VALUE_SEPARATOR),
        );
        headers.insert(
            self.name(header::ACCESS_CONTROL_ALLOW_METHODS),
            self.options.allow_methods.join(HEADER_VALUE_SEPARATOR),
        );
        if self.options.preflight_max_age != 0 {
            headers.insert(
                self.name(header::ACCESS_CONTROL_MAX_AGE),
                self.options.preflight_max_age.to_string(),
            );
        }
    }

    pub(crate) fn build_private_network_header(&self, headers: &mut Headers, request: &Request) {
        if self.options.allow_private_network
            && request.header(header::ACCESS_CONTROL_REQUEST_PRIVATE_NETWORK) == Some("true")
        {
            headers.insert(
                self.name(header::ACCESS_CONTROL_ALLOW_PRIVATE_NETWORK),
                "true",
            );
        }
    }
}

#[cfg(test)]
#[path = "header_builder_test.rs"]
mod header_builder_test;
