use serde::Serialize;
use std::sync::Arc;

use crate::api::{ApiRequest, ApiResponse, HttpTransport, Method, RequestBody};
use crate::common::ApiError;
use crate::config::{AppConfig, join_url};
use crate::log_err;
use crate::router::LOGIN_PATH;
use crate::services::{Navigator, TokenStore};

/// Per-call options merged into the defaults by [`SecureApi::request`].
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub method: Method,
    pub headers: Vec<(String, String)>,
    pub body: RequestBody,
}

impl RequestOptions {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            ..Default::default()
        }
    }

    pub fn json<T: Serialize + ?Sized>(method: Method, data: &T) -> Result<Self, ApiError> {
        Ok(Self {
            method,
            headers: Vec::new(),
            body: RequestBody::Json(serde_json::to_string(data)?),
        })
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }
}

/// Authenticated client used by every admin call.
///
/// The stored admin token is read fresh on each request. A 401 from the
/// server clears it and sends the browser back to the login page; the caller
/// then gets `Ok(None)` and must not assume a response exists.
#[derive(Clone)]
pub struct SecureApi {
    base_url: String,
    transport: Arc<dyn HttpTransport>,
    tokens: Arc<dyn TokenStore>,
    navigator: Arc<dyn Navigator>,
}

impl SecureApi {
    pub fn new(
        config: &AppConfig,
        transport: Arc<dyn HttpTransport>,
        tokens: Arc<dyn TokenStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            base_url: config.api_base_url.clone(),
            transport,
            tokens,
            navigator,
        }
    }

    pub async fn request(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<Option<ApiResponse>, ApiError> {
        let mut headers = Vec::new();
        merge_header(&mut headers, "Content-Type", "application/json");

        if let Some(token) = self.tokens.get() {
            merge_header(&mut headers, "Authorization", &format!("Bearer {}", token));
        }

        for (name, value) in &options.headers {
            merge_header(&mut headers, name, value);
        }

        let request = ApiRequest {
            method: options.method,
            url: join_url(&self.base_url, endpoint),
            headers,
            body: options.body,
        };

        let response = match self.transport.send(request).await {
            Ok(response) => response,
            Err(e) => {
                log_err!(format!("{} {}", options.method, endpoint), e);
                return Err(e);
            }
        };

        if response.status == 401 {
            log::warn!("{} {} was rejected as unauthorized", options.method, endpoint);
            self.tokens.clear();
            self.navigator.navigate(LOGIN_PATH);
            return Ok(None);
        }

        Ok(Some(response))
    }

    pub async fn get(&self, endpoint: &str) -> Result<Option<ApiResponse>, ApiError> {
        self.request(endpoint, RequestOptions::new(Method::Get)).await
    }

    pub async fn post<T: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        data: &T,
    ) -> Result<Option<ApiResponse>, ApiError> {
        self.request(endpoint, RequestOptions::json(Method::Post, data)?)
            .await
    }

    pub async fn put<T: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        data: &T,
    ) -> Result<Option<ApiResponse>, ApiError> {
        self.request(endpoint, RequestOptions::json(Method::Put, data)?)
            .await
    }

    pub async fn delete(&self, endpoint: &str) -> Result<Option<ApiResponse>, ApiError> {
        self.request(endpoint, RequestOptions::new(Method::Delete)).await
    }

    pub async fn patch<T: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        data: &T,
    ) -> Result<Option<ApiResponse>, ApiError> {
        self.request(endpoint, RequestOptions::json(Method::Patch, data)?)
            .await
    }
}

// Later values replace earlier ones with the same (case-insensitive) name.
fn merge_header(headers: &mut Vec<(String, String)>, name: &str, value: &str) {
    headers.retain(|(k, _)| !k.eq_ignore_ascii_case(name));
    headers.push((name.to_string(), value.to_string()));
}
