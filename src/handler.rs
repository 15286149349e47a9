use crate::context::RequestContext;
use crate::cors::Cors;
use crate::headers::HeaderSink;
use crate::result::Route;
use http::{HeaderMap, Response, StatusCode};

/// The response side a handler writes to.
pub trait ResponseWriter {
    type Sink: HeaderSink;

    fn header_sink(&mut self) -> &mut Self::Sink;
    fn write_status(&mut self, status: StatusCode);
}

impl<B> ResponseWriter for Response<B> {
    type Sink = HeaderMap;

    fn header_sink(&mut self) -> &mut HeaderMap {
        self.headers_mut()
    }

    fn write_status(&mut self, status: StatusCode) {
        *self.status_mut() = status;
    }
}

/// A downstream request handler.
pub trait Handler<R: ResponseWriter> {
    fn serve(&self, request: &RequestContext<'_>, response: &mut R);
}

impl<R, F> Handler<R> for F
where
    R: ResponseWriter,
    F: Fn(&RequestContext<'_>, &mut R),
{
    fn serve(&self, request: &RequestContext<'_>, response: &mut R) {
        self(request, response);
    }
}

/// A handler decorated with CORS negotiation, built by [`Cors::wrap`].
#[derive(Debug, Clone)]
pub struct CorsHandler<H> {
    cors: Cors,
    inner: H,
}

impl<H> CorsHandler<H> {
    pub fn new(cors: Cors, inner: H) -> Self {
        Self { cors, inner }
    }

    pub fn inner(&self) -> &H {
        &self.inner
    }
}

impl<R, H> Handler<R> for CorsHandler<H>
where
    R: ResponseWriter,
    H: Handler<R>,
{
    fn serve(&self, request: &RequestContext<'_>, response: &mut R) {
        let route = self.cors.negotiate("Handler", request, response.header_sink());
        if route == Route::Preflight && !self.cors.policy().options_passthrough() {
            response.write_status(StatusCode::OK);
        } else {
            self.inner.serve(request, response);
        }
    }
}

impl Cors {
    /// Wraps `inner` so every request is negotiated before reaching it.
    ///
    /// Preflight requests are answered with `200` and never reach `inner`
    /// unless `options_passthrough` is set.
    pub fn wrap<H>(&self, inner: H) -> CorsHandler<H> {
        CorsHandler::new(self.clone(), inner)
    }

    /// Writes the negotiated headers into `response` and nothing else: no
    /// status, no body, no downstream call.
    pub fn apply<R: ResponseWriter>(&self, request: &RequestContext<'_>, response: &mut R) {
        self.negotiate("Apply", request, response.header_sink());
    }

    /// Negotiates, then hands over to `next` the same way [`Cors::wrap`] would.
    pub fn serve<R, F>(&self, request: &RequestContext<'_>, response: &mut R, next: F)
    where
        R: ResponseWriter,
        F: FnOnce(&RequestContext<'_>, &mut R),
    {
        let route = self.negotiate("Serve", request, response.header_sink());
        if route == Route::Preflight && !self.policy().options_passthrough() {
            response.write_status(StatusCode::OK);
        } else {
            next(request, response);
        }
    }

    pub(crate) fn negotiate<S>(&self, adapter: &str, request: &RequestContext<'_>, sink: &mut S) -> Route
    where
        S: HeaderSink + ?Sized,
    {
        let route = self.route(request);
        match route {
            Route::Preflight => {
                self.log(format_args!("{adapter}: Preflight request"));
                self.handle_preflight(request, sink);
            }
            Route::Actual => {
                self.log(format_args!("{adapter}: Actual request"));
                self.handle_actual_request(request, sink);
            }
        }
        route
    }
}

#[cfg(test)]
#[path = "handler_test.rs"]
mod handler_test;
