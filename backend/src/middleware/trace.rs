//! Request tracing middleware.
//!
//! Every request runs inside a [`TraceId`] scope. A valid UUID supplied in
//! the `trace-id` request header is reused; otherwise a fresh one is
//! generated. The identifier is echoed in the response header and the
//! request is logged with its method, path, status, and latency.

use std::future::Future;
use std::task::{Context, Poll};
use std::time::Instant;

use actix_web::Error;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{HeaderName, HeaderValue};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use tracing::{error, info};

use crate::domain::{TRACE_ID_HEADER, TraceId};

/// Tracing middleware.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use course_catalogue::Trace;
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

fn incoming_trace_id(req: &ServiceRequest) -> Option<TraceId> {
    req.headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse().ok())
}

fn traced<Fut, B>(
    trace_id: TraceId,
    method: String,
    path: String,
    fut: Fut,
) -> impl Future<Output = Result<ServiceResponse<B>, Error>>
where
    Fut: Future<Output = Result<ServiceResponse<B>, Error>>,
{
    let started = Instant::now();
    TraceId::scope(trace_id, async move {
        let mut res = fut.await?;
        match HeaderValue::from_str(&trace_id.to_string()) {
            Ok(value) => {
                res.response_mut()
                    .headers_mut()
                    .insert(HeaderName::from_static(TRACE_ID_HEADER), value);
            }
            Err(error) => {
                error!(%error, %trace_id, "failed to encode trace identifier header");
            }
        }
        info!(
            %trace_id,
            %method,
            %path,
            status = res.status().as_u16(),
            latency_ms = started.elapsed().as_millis(),
            "request handled"
        );
        Ok(res)
    })
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
        let trace_id = incoming_trace_id(&req).unwrap_or_else(TraceId::generate);
        let method = req.method().to_string();
        let path = req.path().to_owned();
        let fut = self.service.call(req);
        Box::pin(traced(trace_id, method, path, fut))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ApiResult, Error as DomainError};
    use actix_web::{App, HttpResponse, test, web};

    async fn call_traced<F, Fut, Res>(handler: F, req: test::TestRequest) -> (String, String)
    where
        F: Fn() -> Fut + Clone + 'static,
        Fut: Future<Output = Res> + 'static,
        Res: actix_web::Responder + 'static,
    {
        let app =
            test::init_service(App::new().wrap(Trace).route("/", web::get().to(handler))).await;
        let res = test::call_service(&app, req.uri("/").to_request()).await;
        let header = res
            .headers()
            .get(TRACE_ID_HEADER)
            .expect("trace id header")
            .to_str()
            .expect("header is ascii")
            .to_owned();
        let body = test::read_body(res).await;
        (header, String::from_utf8(body.to_vec()).expect("utf8 body"))
    }

    #[actix_web::test]
    async fn handlers_see_the_response_trace_id() {
        let (header, body) = call_traced(
            || async move {
                let id = TraceId::current().expect("trace id in scope");
                HttpResponse::Ok().body(id.to_string())
            },
            test::TestRequest::get(),
        )
        .await;
        assert_eq!(header, body);
    }

    #[actix_web::test]
    async fn incoming_trace_ids_are_reused() {
        let supplied = "6f1c2d3e-4b5a-4c6d-8e7f-001122334455";
        let (header, _) = call_traced(
            || async { HttpResponse::NoContent().finish() },
            test::TestRequest::get().insert_header((TRACE_ID_HEADER, supplied)),
        )
        .await;
        assert_eq!(header, supplied);
    }

    #[actix_web::test]
    async fn malformed_trace_ids_are_replaced() {
        let (header, _) = call_traced(
            || async { HttpResponse::NoContent().finish() },
            test::TestRequest::get().insert_header((TRACE_ID_HEADER, "not-a-uuid")),
        )
        .await;
        assert!(header.parse::<TraceId>().is_ok());
    }

    #[actix_web::test]
    async fn errors_carry_the_trace_id() {
        let (header, body) = call_traced(
            || async move { ApiResult::<HttpResponse>::Err(DomainError::not_found("course not found")) },
            test::TestRequest::get(),
        )
        .await;
        let payload: serde_json::Value = serde_json::from_str(&body).expect("json body");
        assert_eq!(payload["traceId"], serde_json::json!(header));
    }
}
