use std::future::{ready, Ready};
use std::time::{Duration, Instant};

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::StatusCode;
use actix_web::{Error as ActixError, HttpMessage};
use futures_util::future::LocalBoxFuture;

use super::request_trace::RequestId;

/// What gets logged about a request once it completes.
struct RequestLine {
    method: String,
    path: String,
    request_id: String,
}

impl RequestLine {
    fn from_request(req: &ServiceRequest) -> Self {
        let request_id = req
            .extensions()
            .get::<RequestId>()
            .map(|id| id.0.clone())
            .unwrap_or_else(|| "unknown".to_string());

        Self {
            method: req.method().to_string(),
            path: req.path().to_string(),
            request_id,
        }
    }

    /// 5xx at error, 4xx at warn, everything else at info.
    fn log_completed(&self, status: StatusCode, elapsed: Duration) {
        let (method, path, request_id) = (&self.method, &self.path, &self.request_id);
        let status_code = status.as_u16();
        let duration_us = elapsed.as_micros() as u64;

        macro_rules! completed {
            ($level:ident) => {
                tracing::$level!(
                    http.method = %method,
                    url.path = %path,
                    http.status_code = status_code,
                    duration_us,
                    request_id = %request_id,
                    "request_completed"
                )
            };
        }

        if status.is_server_error() {
            completed!(error);
        } else if status.is_client_error() {
            completed!(warn);
        } else {
            completed!(info);
        }
    }
}

/// Access log: one `request_completed` event per request.
pub struct StructuredLogger;

impl<S, B> Transform<S, ServiceRequest> for StructuredLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type InitError = ();
    type Transform = StructuredLoggerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(StructuredLoggerMiddleware { service }))
    }
}

pub struct StructuredLoggerMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for StructuredLoggerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let started = Instant::now();
        let line = RequestLine::from_request(&req);
        let fut = self.service.call(req);

        Box::pin(async move {
            let result = fut.await;
            let status = match &result {
                Ok(res) => res.status(),
                Err(err) => err.as_response_error().status_code(),
            };
            line.log_completed(status, started.elapsed());
            result
        })
    }
}
