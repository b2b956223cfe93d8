use crate::constants::{header, method};
use crate::header_builder::HeaderBuilder;
use crate::hooks::RequestHooks;
use crate::middleware::{AsyncHandler, Handler};
use crate::options::CorsOptions;
use crate::origin::{OriginLookup, RequestOrigin, SharedOriginLookup};
use crate::request::Request;
use crate::response::Response;
use crate::settings::{ConfigError, SettingsSource};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, error, trace};

type SharedSettings = Arc<dyn SettingsSource + Send + Sync>;

enum OptionsSource {
    Fixed(Arc<CorsOptions>),
    Live(SharedSettings),
}

/// CORS policy engine.
///
/// Holds either a fixed [`CorsOptions`] snapshot or a live
/// [`SettingsSource`] that is re-resolved on every request. The engine keeps
/// no per-request state; everything it learns about a request is recorded on
/// the [`Request`] or [`Response`] it is handed.
pub struct Cors {
    source: OptionsSource,
    hooks: RequestHooks,
    origin_lookup: Option<SharedOriginLookup>,
}

impl Cors {
    pub fn new(options: CorsOptions) -> Self {
        Self::with_source(OptionsSource::Fixed(Arc::new(options)))
    }

    /// Engine whose options are resolved from `settings` on each request, so
    /// changes to the source apply without rebuilding the engine.
    pub fn from_settings<S>(settings: S) -> Self
    where
        S: SettingsSource + Send + Sync + 'static,
    {
        Self::with_source(OptionsSource::Live(Arc::new(settings)))
    }

    fn with_source(source: OptionsSource) -> Self {
        Self {
            source,
            hooks: RequestHooks::new(),
            origin_lookup: None,
        }
    }

    pub fn with_hooks(mut self, hooks: RequestHooks) -> Self {
        self.hooks = hooks;
        self
    }

    pub fn with_origin_lookup<L>(mut self, lookup: L) -> Self
    where
        L: OriginLookup + 'static,
    {
        self.origin_lookup = Some(Arc::new(lookup));
        self
    }

    pub fn hooks(&self) -> &RequestHooks {
        &self.hooks
    }

    /// Options in effect for one request.
    pub fn snapshot(&self) -> Result<Arc<CorsOptions>, ConfigError> {
        match &self.source {
            OptionsSource::Fixed(options) => Ok(Arc::clone(options)),
            OptionsSource::Live(settings) => CorsOptions::resolve(settings.as_ref()).map(Arc::new),
        }
    }

    /// `urls_regex` matches the path from its start, or a registered hook
    /// opts the request in. Hooks run only when the pattern does not match.
    pub fn is_enabled(&self, options: &CorsOptions, request: &Request) -> bool {
        options.urls_regex.matches_prefix(request.path()) || self.hooks.check(request)
    }

    /// Records enablement on `request` and answers preflight requests.
    ///
    /// Returns the short-circuit response when CORS is enabled, the method is
    /// `OPTIONS` and `Access-Control-Request-Method` is present (an empty
    /// value counts).
    pub fn check_preflight(
        &self,
        options: &CorsOptions,
        request: &mut Request,
    ) -> Option<Response> {
        let enabled = self.is_enabled(options, request);
        request.set_cors_enabled(enabled);

        if enabled
            && request.method() == method::OPTIONS
            && request
                .headers()
                .contains(header::ACCESS_CONTROL_REQUEST_METHOD)
        {
            debug!(path = %request.path(), "answering cors preflight");
            return Some(Response::preflight(options.header_casing));
        }
        None
    }

    /// Adds CORS headers to `response`.
    ///
    /// Runs once per response: a response already marked processed is
    /// returned untouched. `Vary: origin` is added for every enabled request,
    /// including ones without an `Origin`.
    pub fn add_response_headers(
        &self,
        options: &CorsOptions,
        request: &Request,
        mut response: Response,
    ) -> Response {
        if response.is_cors_processed() {
            return response;
        }
        response.mark_cors_processed();

        let enabled = match request.cors_enabled() {
            Some(enabled) => enabled,
            None => self.is_enabled(options, request),
        };
        if !enabled {
            trace!(path = %request.path(), "cors not enabled for path");
            return response;
        }

        let casing = options.header_casing;
        response
            .headers_mut()
            .patch_vary(&casing.apply(header::VARY), &casing.apply(header::ORIGIN));

        let Some(origin) = request.origin().and_then(RequestOrigin::parse) else {
            return response;
        };

        let authorized = Self::origin_in_allow_lists(options, &origin)
            || self.lookup_authorizes(request, &origin)
            || self.hooks.check(request);
        if !authorized {
            debug!(origin = %origin.as_str(), "origin not authorized");
            return response;
        }

        trace!(origin = %origin.as_str(), method = %request.method(), "adding cors headers");
        let headers = HeaderBuilder::new(options).build(request, origin.as_str());
        response.headers_mut().merge(headers);
        response
    }

    /// Points `Referer` at this host so a downstream CSRF check accepts a
    /// secure cross-origin request from an authorized origin.
    ///
    /// The replaced value is kept on the request; see
    /// [`Cors::restore_https_referer`].
    pub fn replace_https_referer(&self, options: &CorsOptions, request: &mut Request) {
        if !options.replace_https_referer
            || !request.is_secure()
            || request.original_referer().is_some()
        {
            return;
        }

        let enabled = match request.cors_enabled() {
            Some(enabled) => enabled,
            None => self.is_enabled(options, request),
        };
        if !enabled {
            return;
        }

        let (Some(referer), Some(host)) = (
            request.header(header::REFERER),
            request.header(header::HOST),
        ) else {
            return;
        };
        let referer = referer.to_string();
        let replacement = format!("https://{host}/");

        let Some(raw_origin) = request.origin().map(str::to_string) else {
            return;
        };
        let Some(origin) = RequestOrigin::parse(&raw_origin) else {
            return;
        };

        let authorized = Self::origin_in_allow_lists(options, &origin)
            || self.remember_lookup(request, &origin);
        if !authorized {
            return;
        }

        debug!(original = %referer, replacement = %replacement, "replacing https referer");
        request.headers_mut().insert(header::REFERER, replacement);
        request.set_original_referer(Some(referer));
    }

    /// Puts back the `Referer` replaced by [`Cors::replace_https_referer`].
    pub fn restore_https_referer(request: &mut Request) {
        let Some(original) = request.original_referer().map(str::to_string) else {
            return;
        };
        request.headers_mut().insert(header::REFERER, original);
        request.set_original_referer(None);
    }

    /// Runs the full pipeline around a synchronous handler.
    pub fn process<H>(&self, request: &mut Request, inner: &H) -> Response
    where
        H: Handler + ?Sized,
    {
        let options = match self.snapshot() {
            Ok(options) => options,
            Err(err) => {
                error!(error = %err, "cors settings failed to resolve, skipping cors");
                return inner.handle(request);
            }
        };

        if !inner.handles_cors() {
            if let Some(preflight) = self.check_preflight(&options, request) {
                return self.add_response_headers(&options, request, preflight);
            }
            self.replace_https_referer(&options, request);
        }

        let response = inner.handle(request);
        self.add_response_headers(&options, request, response)
    }

    /// Runs the full pipeline around an asynchronous handler. Only the inner
    /// handler is awaited.
    pub async fn process_async<H>(&self, request: &mut Request, inner: &H) -> Response
    where
        H: AsyncHandler + ?Sized,
    {
        let options = match self.snapshot() {
            Ok(options) => options,
            Err(err) => {
                error!(error = %err, "cors settings failed to resolve, skipping cors");
                return inner.handle_async(request).await;
            }
        };

        if !inner.handles_cors() {
            if let Some(preflight) = self.check_preflight(&options, request) {
                return self.add_response_headers(&options, request, preflight);
            }
            self.replace_https_referer(&options, request);
        }

        let response = inner.handle_async(request).await;
        self.add_response_headers(&options, request, response)
    }

    fn origin_in_allow_lists(options: &CorsOptions, origin: &RequestOrigin<'_>) -> bool {
        options.allowed_origins.matches(origin)
            || options
                .allowed_origin_regexes
                .iter()
                .any(|pattern| pattern.matches_prefix(origin.as_str()))
            || options.allow_all_origins
    }

    fn lookup_authorizes(&self, request: &Request, origin: &RequestOrigin<'_>) -> bool {
        let (Some(lookup), Some(key)) = (&self.origin_lookup, origin.host_and_port()) else {
            return false;
        };
        request
            .lookup_verdict(key)
            .unwrap_or_else(|| lookup.is_authorized(key))
    }

    fn remember_lookup(&self, request: &mut Request, origin: &RequestOrigin<'_>) -> bool {
        let (Some(lookup), Some(key)) = (&self.origin_lookup, origin.host_and_port()) else {
            return false;
        };
        if let Some(allowed) = request.lookup_verdict(key) {
            return allowed;
        }
        let allowed = lookup.is_authorized(key);
        request.set_lookup_verdict(key, allowed);
        allowed
    }
}

impl fmt::Debug for Cors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let source = match &self.source {
            OptionsSource::Fixed(_) => "fixed",
            OptionsSource::Live(_) => "live",
        };
        f.debug_struct("Cors")
            .field("source", &source)
            .field("hooks", &self.hooks)
            .field("origin_lookup", &self.origin_lookup.is_some())
            .finish()
    }
}

#[cfg(test)]
#[path = "cors_test.rs"]
mod cors_test;
