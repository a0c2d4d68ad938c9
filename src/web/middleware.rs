use actix_web::{
    Error,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::header::{HeaderName, HeaderValue},
};
use futures_util::future::{Ready, ok};
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use profile_site::api::MEDIA_HOST;

const FIXED_HEADERS: [(&str, &str); 4] = [
    ("x-frame-options", "DENY"),
    ("x-content-type-options", "nosniff"),
    ("strict-transport-security", "max-age=31536000; includeSubDomains"),
    ("referrer-policy", "strict-origin-when-cross-origin"),
];

/// Security headers middleware. The content policy lets the page talk to the
/// Content API and the media host and embed their images and videos.
#[derive(Clone)]
pub struct SecurityHeaders {
    content_policy: HeaderValue,
}

impl SecurityHeaders {
    pub fn for_api(api_base_url: &str) -> Self {
        let policy = format!(
            "default-src 'self'; script-src 'self' 'unsafe-inline' 'wasm-unsafe-eval' https://cdn.tailwindcss.com; style-src 'self' 'unsafe-inline'; \
             img-src 'self' data: https:; media-src 'self' https:; connect-src 'self' {} {}; \
             frame-ancestors 'none'",
            api_base_url, MEDIA_HOST
        );

        let content_policy = HeaderValue::from_str(&policy).unwrap_or_else(|e| {
            log::warn!("content policy rejected ({}), falling back to 'self' only", e);
            HeaderValue::from_static("default-src 'self'; frame-ancestors 'none'")
        });

        Self { content_policy }
    }
}

impl<S, B> Transform<S, ServiceRequest> for SecurityHeaders
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = SecurityHeadersMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(SecurityHeadersMiddleware {
            service,
            content_policy: self.content_policy.clone(),
        })
    }
}

pub struct SecurityHeadersMiddleware<S> {
    service: S,
    content_policy: HeaderValue,
}

impl<S, B> Service<ServiceRequest> for SecurityHeadersMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let fut = self.service.call(req);
        let content_policy = self.content_policy.clone();

        Box::pin(async move {
            let mut res = fut.await?;
            let headers = res.headers_mut();

            for (name, value) in FIXED_HEADERS {
                headers.insert(HeaderName::from_static(name), HeaderValue::from_static(value));
            }
            headers.insert(HeaderName::from_static("content-security-policy"), content_policy);

            Ok(res)
        })
    }
}
