//! Request logging middleware.
//!
//! One line when a request arrives and one when it completes. The session
//! token is reduced to its prefix before it reaches the log.

use actix_web::Error;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use futures_util::future::LocalBoxFuture;
use std::future::{Ready, ready};
use std::time::Instant;
use tracing::{error, info, warn};

use crate::config::{AUTH_HEADER, TOKEN_SCHEME};

/// Request logger middleware factory.
pub struct RequestLogger;

impl<S, B> Transform<S, ServiceRequest> for RequestLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RequestLoggerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestLoggerMiddleware { service }))
    }
}

/// Request logger middleware service.
pub struct RequestLoggerMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for RequestLoggerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let start = Instant::now();
        let method = req.method().clone();
        let path = req.path().to_string();
        let token = req
            .headers()
            .get(AUTH_HEADER)
            .and_then(|v| v.to_str().ok())
            .map_or_else(|| "none".to_string(), token_prefix);

        info!(target: "api", %method, %path, %token, "→ {} {}", method, path);

        let fut = self.service.call(req);

        Box::pin(async move {
            let res = fut.await?;
            let status = res.status().as_u16();
            let duration_ms = start.elapsed().as_millis() as u64;

            match status {
                500.. => error!(target: "api", %method, %path, status, duration_ms, "← server error"),
                400..=499 => warn!(target: "api", %method, %path, status, duration_ms, "← client error"),
                _ => info!(target: "api", %method, %path, status, duration_ms, "← done"),
            }

            Ok(res)
        })
    }
}

/// Render the identifying prefix of an `Authorization` header value.
fn token_prefix(header: &str) -> String {
    let key = match header.split_once(' ') {
        Some((scheme, key)) if scheme.eq_ignore_ascii_case(TOKEN_SCHEME) => key.trim(),
        _ => return "malformed".to_string(),
    };

    match key.get(..8) {
        Some(prefix) => format!("{}...", prefix),
        None => "invalid".to_string(),
    }
}
