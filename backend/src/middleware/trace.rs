//! Tracing middleware attaching a request-scoped trace identifier.
//!
//! Each request is handled inside a `request` span carrying a UUID
//! `trace_id`, so service and adapter logs emitted while serving it can be
//! correlated. The identifier is echoed in a `trace-id` response header.

use std::future::Future;
use std::task::{Context, Poll};

use actix_web::Error;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{HeaderName, HeaderValue};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use tokio::task_local;
use tracing::{Instrument, error, info_span};
use uuid::Uuid;

task_local! {
    static TRACE_ID: TraceId;
}

/// Per-request trace identifier exposed via task-local storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceId(Uuid);

impl TraceId {
    fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the current trace identifier if one is in scope.
    pub fn current() -> Option<Self> {
        TRACE_ID.try_with(|id| *id).ok()
    }

    /// Execute `fut` with `trace_id` in scope.
    ///
    /// Task-locals are not inherited by spawned tasks; wrap spawned work in
    /// this to keep the identifier.
    pub async fn scope<Fut>(trace_id: TraceId, fut: Fut) -> Fut::Output
    where
        Fut: Future,
    {
        TRACE_ID.scope(trace_id, fut).await
    }
}

impl std::fmt::Display for TraceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for TraceId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Middleware adding a request span and a `trace-id` response header.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use streakboard::Trace;
///
/// let app = App::new().wrap(Trace);
/// ```
#[derive(Clone)]
pub struct Trace;

impl<S, B> Transform<S, ServiceRequest> for Trace
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = TraceMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(TraceMiddleware { service }))
    }
}

/// Service wrapper produced by [`Trace`].
pub struct TraceMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for TraceMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let trace_id = TraceId::generate();
        let span = info_span!(
            "request",
            trace_id = %trace_id,
            method = %req.method(),
            path = %req.path(),
        );
        let fut = span.in_scope(|| self.service.call(req));
        Box::pin(TraceId::scope(
            trace_id,
            async move {
                let mut res = fut.await?;
                match HeaderValue::from_str(&trace_id.to_string()) {
                    Ok(value) => {
                        res.response_mut()
                            .headers_mut()
                            .insert(HeaderName::from_static("trace-id"), value);
                    }
                    Err(error) => {
                        error!(%error, "failed to encode trace identifier header");
                    }
                }
                Ok(res)
            }
            .instrument(span),
        ))
    }
}
