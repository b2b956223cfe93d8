use cors_headers_core::constants::{header, method};
use cors_headers_core::{
    AllowedOrigin, AllowedOrigins, Cors, CorsOptions, HeaderCasing, Pattern, Request,
    RequestHooks, Response,
};

#[derive(Default)]
pub struct CorsBuilder {
    options: CorsOptions,
    hooks: Option<RequestHooks>,
}

impl CorsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allowed_origins<I, S>(mut self, origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.allowed_origins =
            AllowedOrigins::list(origins.into_iter().map(AllowedOrigin::new));
        self
    }

    pub fn origin_regexes<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.options.allowed_origin_regexes = patterns
            .into_iter()
            .map(|pattern| Pattern::new(pattern.as_ref()).expect("valid test pattern"))
            .collect();
        self
    }

    pub fn allow_all(mut self, enabled: bool) -> Self {
        self.options.allow_all_origins = enabled;
        self
    }

    pub fn credentials(mut self, enabled: bool) -> Self {
        self.options.allow_credentials = enabled;
        self
    }

    pub fn private_network(mut self, enabled: bool) -> Self {
        self.options.allow_private_network = enabled;
        self
    }

    pub fn allow_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.allow_headers = headers.into_iter().map(Into::into).collect();
        self
    }

    pub fn methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.allow_methods = methods.into_iter().map(Into::into).collect();
        self
    }

    pub fn expose_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.expose_headers = headers.into_iter().map(Into::into).collect();
        self
    }

    pub fn max_age(mut self, seconds: u64) -> Self {
        self.options.preflight_max_age = seconds;
        self
    }

    pub fn urls_regex(mut self, pattern: &str) -> Self {
        self.options.urls_regex = Pattern::new(pattern).expect("valid test pattern");
        self
    }

    pub fn pascal_case(mut self, enabled: bool) -> Self {
        self.options.header_casing = HeaderCasing::from_pascal_flag(enabled);
        self
    }

    pub fn replace_https_referer(mut self, enabled: bool) -> Self {
        self.options.replace_https_referer = enabled;
        self
    }

    pub fn hooks(mut self, hooks: RequestHooks) -> Self {
        self.hooks = Some(hooks);
        self
    }

    pub fn options(self) -> CorsOptions {
        self.options
    }

    pub fn build(self) -> Cors {
        let cors = Cors::new(self.options);
        match self.hooks {
            Some(hooks) => cors.with_hooks(hooks),
            None => cors,
        }
    }
}

pub struct RequestBuilder {
    request: Request,
}

impl RequestBuilder {
    pub fn new(method: &str) -> Self {
        Self {
            request: Request::new(method, "/"),
        }
    }

    pub fn path(mut self, path: &str) -> Self {
        let mut request =
            Request::new(self.request.method(), path).with_secure(self.request.is_secure());
        for (name, value) in self.request.headers().iter() {
            request = request.with_header(name, value);
        }
        self.request = request;
        self
    }

    pub fn origin(self, origin: &str) -> Self {
        self.header(header::ORIGIN, origin)
    }

    pub fn request_method(self, method: &str) -> Self {
        self.header(header::ACCESS_CONTROL_REQUEST_METHOD, method)
    }

    pub fn private_network(self, value: &str) -> Self {
        self.header(header::ACCESS_CONTROL_REQUEST_PRIVATE_NETWORK, value)
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.request = self.request.with_header(name, value);
        self
    }

    pub fn secure(mut self, secure: bool) -> Self {
        self.request = self.request.with_secure(secure);
        self
    }

    pub fn build(self) -> Request {
        self.request
    }

    /// Sends the request through `cors` around a handler answering
    /// `200 handled`.
    pub fn run(self, cors: &Cors) -> Response {
        let mut request = self.request;
        cors.process(&mut request, &handled)
    }
}

pub fn handled(_: &mut Request) -> Response {
    Response::ok().with_body("handled")
}

pub fn cors() -> CorsBuilder {
    CorsBuilder::new()
}

pub fn simple_request() -> RequestBuilder {
    RequestBuilder::new(method::GET)
}

pub fn preflight_request() -> RequestBuilder {
    RequestBuilder::new(method::OPTIONS).request_method(method::GET)
}
