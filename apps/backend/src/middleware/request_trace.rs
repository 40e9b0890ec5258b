use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::{HeaderName, HeaderValue},
    HttpMessage,
};
use futures_util::future::{ready, LocalBoxFuture, Ready};
use tracing::Instrument;
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

const MAX_INBOUND_ID_LEN: usize = 128;

/// Per-request id, stored in request extensions and echoed in `x-request-id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestId(pub String);

impl RequestId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Reuse a caller-supplied id when it is short visible ASCII; mint one otherwise.
    pub fn from_inbound(value: Option<&HeaderValue>) -> Self {
        value
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|s| !s.is_empty() && s.len() <= MAX_INBOUND_ID_LEN)
            .filter(|s| s.bytes().all(|b| b.is_ascii_graphic()))
            .map(|s| Self(s.to_string()))
            .unwrap_or_else(Self::generate)
    }
}

/// Tags each request with a [`RequestId`] and runs the handler inside an
/// `http_request` span carrying it.
pub struct RequestTrace;

impl<S, B> Transform<S, ServiceRequest> for RequestTrace
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = RequestTraceMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestTraceMiddleware { service }))
    }
}

pub struct RequestTraceMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for RequestTraceMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let request_id = RequestId::from_inbound(req.headers().get(REQUEST_ID_HEADER));
        let span = tracing::info_span!("http_request", request_id = %request_id.0);

        let header_value = HeaderValue::from_str(&request_id.0).ok();
        req.extensions_mut().insert(request_id);

        let fut = span.in_scope(|| self.service.call(req));

        Box::pin(
            async move {
                let mut res = fut.await?;
                if let Some(value) = header_value {
                    res.headers_mut()
                        .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
                }
                Ok(res)
            }
            .instrument(span),
        )
    }
}

#[cfg(test)]
mod tests {
    use actix_web::test as actix_test;
    use actix_web::{web, App, HttpResponse};

    use super::*;

    fn header_of<B>(resp: &ServiceResponse<B>) -> String {
        resp.headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .expect("x-request-id header")
            .to_string()
    }

    #[actix_web::test]
    async fn mints_uuid_when_caller_sends_none() {
        let app = actix_test::init_service(
            App::new()
                .wrap(RequestTrace)
                .route("/", web::get().to(HttpResponse::Ok)),
        )
        .await;

        let req = actix_test::TestRequest::get().uri("/").to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert!(Uuid::parse_str(&header_of(&resp)).is_ok());
    }

    #[actix_web::test]
    async fn echoes_caller_supplied_id() {
        let app = actix_test::init_service(
            App::new()
                .wrap(RequestTrace)
                .route("/", web::get().to(HttpResponse::Ok)),
        )
        .await;

        let req = actix_test::TestRequest::get()
            .uri("/")
            .insert_header((REQUEST_ID_HEADER, "upstream-42"))
            .to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(header_of(&resp), "upstream-42");
    }

    #[test]
    fn rejects_unusable_inbound_ids() {
        let too_long = HeaderValue::from_str(&"a".repeat(MAX_INBOUND_ID_LEN + 1)).unwrap();
        let blank = HeaderValue::from_static("   ");
        let spaced = HeaderValue::from_static("two words");

        for value in [&too_long, &blank, &spaced] {
            let id = RequestId::from_inbound(Some(value));
            assert!(Uuid::parse_str(&id.0).is_ok(), "{value:?} should be replaced");
        }
    }
}
