use crate::context::RequestContext;
use crate::cors::Cors;
use crate::headers::Headers;
use crate::result::Route;
use http::{Request, Response, StatusCode};
use pin_project_lite::pin_project;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll, ready};
use tower_layer::Layer;
use tower_service::Service;

/// [`Layer`] that decorates a service with CORS negotiation.
#[derive(Debug, Clone)]
pub struct CorsLayer {
    cors: Cors,
}

impl CorsLayer {
    pub fn new(cors: Cors) -> Self {
        Self { cors }
    }
}

impl<S> Layer<S> for CorsLayer {
    type Service = CorsService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        CorsService::new(self.cors.clone(), inner)
    }
}

impl Cors {
    pub fn layer(&self) -> CorsLayer {
        CorsLayer::new(self.clone())
    }
}

/// Service built by [`CorsLayer`].
///
/// Preflight requests are answered directly with `200` and an empty body
/// unless `options_passthrough` is set. In every other case the inner
/// service runs and the negotiated headers are written onto its response:
/// `Vary` entries are appended after the inner service's own, the other CORS
/// headers replace whatever it set.
#[derive(Debug, Clone)]
pub struct CorsService<S> {
    cors: Cors,
    inner: S,
}

impl<S> CorsService<S> {
    pub fn new(cors: Cors, inner: S) -> Self {
        Self { cors, inner }
    }

    pub fn get_ref(&self) -> &S {
        &self.inner
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S, ReqBody, ResBody> Service<Request<ReqBody>> for CorsService<S>
where
    S: Service<Request<ReqBody>, Response = Response<ResBody>>,
    ResBody: Default,
{
    type Response = Response<ResBody>;
    type Error = S::Error;
    type Future = ResponseFuture<S::Future, ResBody>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, request: Request<ReqBody>) -> Self::Future {
        let mut headers = Headers::new();
        let route = {
            let ctx = RequestContext::from_request(&request);
            self.cors.negotiate("Service", &ctx, &mut headers)
        };

        if route == Route::Preflight && !self.cors.policy().options_passthrough() {
            let mut response = Response::new(ResBody::default());
            *response.status_mut() = StatusCode::OK;
            headers.write_to(response.headers_mut());
            return ResponseFuture {
                kind: Kind::Finished {
                    response: Some(response),
                },
            };
        }

        ResponseFuture {
            kind: Kind::Inner {
                future: self.inner.call(request),
                headers,
            },
        }
    }
}

pin_project! {
    /// Response future of [`CorsService`].
    pub struct ResponseFuture<F, B> {
        #[pin]
        kind: Kind<F, B>,
    }
}

pin_project! {
    #[project = KindProj]
    enum Kind<F, B> {
        Inner {
            #[pin]
            future: F,
            headers: Headers,
        },
        Finished {
            response: Option<Response<B>>,
        },
    }
}

impl<F, B, E> Future for ResponseFuture<F, B>
where
    F: Future<Output = Result<Response<B>, E>>,
{
    type Output = Result<Response<B>, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match self.project().kind.project() {
            KindProj::Inner { future, headers } => {
                let mut response = ready!(future.poll(cx))?;
                headers.write_to(response.headers_mut());
                Poll::Ready(Ok(response))
            }
            KindProj::Finished { response } => {
                Poll::Ready(Ok(response.take().expect("future polled after completion")))
            }
        }
    }
}

#[cfg(test)]
#[path = "service_test.rs"]
mod service_test;
