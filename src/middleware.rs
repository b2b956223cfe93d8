use crate::cors::Cors;
use crate::options::CorsOptions;
use crate::request::Request;
use crate::response::Response;
use futures::future::BoxFuture;
use std::sync::Arc;

/// A synchronous request handler.
pub trait Handler: Send + Sync {
    fn handle(&self, request: &mut Request) -> Response;

    /// `true` when the handler applies CORS itself, in which case an outer
    /// engine skips its preflight short-circuit and leaves the processed
    /// response alone.
    fn handles_cors(&self) -> bool {
        false
    }
}

impl<F> Handler for F
where
    F: Fn(&mut Request) -> Response + Send + Sync,
{
    fn handle(&self, request: &mut Request) -> Response {
        self(request)
    }
}

/// An asynchronous request handler.
pub trait AsyncHandler: Send + Sync {
    fn handle_async<'a>(&'a self, request: &'a mut Request) -> BoxFuture<'a, Response>;

    fn handles_cors(&self) -> bool {
        false
    }
}

impl<F> AsyncHandler for F
where
    F: for<'a> Fn(&'a mut Request) -> BoxFuture<'a, Response> + Send + Sync,
{
    fn handle_async<'a>(&'a self, request: &'a mut Request) -> BoxFuture<'a, Response> {
        self(request)
    }
}

/// Wraps a handler with a [`Cors`] engine.
///
/// Built with [`CorsMiddleware::new`] it is the application-wide layer; built
/// through [`EndpointCors::wrap`] it marks the endpoint as handling CORS on
/// its own, so an enclosing global layer passes it through.
#[derive(Debug, Clone)]
pub struct CorsMiddleware<H> {
    cors: Arc<Cors>,
    inner: H,
    endpoint: bool,
}

impl<H> CorsMiddleware<H> {
    pub fn new(cors: Arc<Cors>, inner: H) -> Self {
        Self {
            cors,
            inner,
            endpoint: false,
        }
    }

    fn endpoint(cors: Arc<Cors>, inner: H) -> Self {
        Self {
            cors,
            inner,
            endpoint: true,
        }
    }

    pub fn cors(&self) -> &Arc<Cors> {
        &self.cors
    }

    pub fn inner(&self) -> &H {
        &self.inner
    }
}

impl<H: Handler> Handler for CorsMiddleware<H> {
    fn handle(&self, request: &mut Request) -> Response {
        self.cors.process(request, &self.inner)
    }

    fn handles_cors(&self) -> bool {
        self.endpoint
    }
}

impl<H: AsyncHandler> AsyncHandler for CorsMiddleware<H> {
    fn handle_async<'a>(&'a self, request: &'a mut Request) -> BoxFuture<'a, Response> {
        Box::pin(self.cors.process_async(request, &self.inner))
    }

    fn handles_cors(&self) -> bool {
        self.endpoint
    }
}

/// Per-endpoint CORS override.
///
/// Endpoints wrapped by the same decorator share one engine.
#[derive(Debug, Clone)]
pub struct EndpointCors {
    cors: Arc<Cors>,
}

impl EndpointCors {
    pub fn new(options: CorsOptions) -> Self {
        Self::from_cors(Arc::new(Cors::new(options)))
    }

    pub fn from_cors(cors: Arc<Cors>) -> Self {
        Self { cors }
    }

    pub fn wrap<H>(&self, inner: H) -> CorsMiddleware<H> {
        CorsMiddleware::endpoint(Arc::clone(&self.cors), inner)
    }
}

/// Restores a `Referer` replaced for a cross-origin request before handing
/// the request on. Place it after the CSRF check.
#[derive(Debug, Clone)]
pub struct RefererRestore<H> {
    inner: H,
}

impl<H> RefererRestore<H> {
    pub fn new(inner: H) -> Self {
        Self { inner }
    }
}

impl<H: Handler> Handler for RefererRestore<H> {
    fn handle(&self, request: &mut Request) -> Response {
        Cors::restore_https_referer(request);
        self.inner.handle(request)
    }

    fn handles_cors(&self) -> bool {
        self.inner.handles_cors()
    }
}

impl<H: AsyncHandler> AsyncHandler for RefererRestore<H> {
    fn handle_async<'a>(&'a self, request: &'a mut Request) -> BoxFuture<'a, Response> {
        Cors::restore_https_referer(request);
        self.inner.handle_async(request)
    }

    fn handles_cors(&self) -> bool {
        self.inner.handles_cors()
    }
}

#[cfg(test)]
#[path = "middleware_test.rs"]
mod middleware_test;
