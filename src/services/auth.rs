use std::sync::{Arc, Mutex, MutexGuard};

use crate::api::{ApiRequest, ApiResponse, HttpTransport, Method, RequestBody};
use crate::common::{ApiError, AuthError};
use crate::config::{AppConfig, join_url};
use crate::log_err;
use crate::services::{Clock, KeySequence, TokenStatus, TokenStore, token};
use crate::types::{AuthFailure, LoginRequest, LoginResponse, ValidateResponse};

pub const LOGIN_ENDPOINT: &str = "/api/admin/auth/login";
pub const VALIDATE_ENDPOINT: &str = "/api/admin/auth/validate";
pub const LOGOUT_ENDPOINT: &str = "/api/admin/auth/logout";

/// How an authenticated session came to be.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Grant {
    /// The server issued a token.
    Server,
    /// The hidden key sequence was typed. No token exists, so the server
    /// rejects every admin call made from this session.
    KeySequence,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum SessionState {
    Anonymous,
    Validating,
    Authenticated { user: Option<String>, grant: Grant },
}

/// Snapshot of the session handed to the UI and the route guard.
///
/// There is no non-admin role, so `is_authenticated` and `is_admin` always
/// carry the same value.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Session {
    pub token: Option<String>,
    pub is_authenticated: bool,
    pub is_admin: bool,
    pub user: Option<String>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }
}

type Listener = Arc<dyn Fn(&Session) + Send + Sync>;

struct SessionInner {
    state: SessionState,
    keys: Option<KeySequence>,
}

/// Single source of truth for whether this browser session may use the
/// admin panel.
///
/// Cloning is cheap and every clone shares the same state.
#[derive(Clone)]
pub struct AuthSession {
    base_url: String,
    transport: Arc<dyn HttpTransport>,
    tokens: Arc<dyn TokenStore>,
    clock: Arc<dyn Clock>,
    inner: Arc<Mutex<SessionInner>>,
    listeners: Arc<Mutex<Vec<Listener>>>,
}

impl AuthSession {
    pub fn new(
        config: &AppConfig,
        transport: Arc<dyn HttpTransport>,
        tokens: Arc<dyn TokenStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            base_url: config.api_base_url.clone(),
            transport,
            tokens,
            clock,
            inner: Arc::new(Mutex::new(SessionInner {
                state: SessionState::Anonymous,
                keys: config.secret_sequence.clone().map(KeySequence::new),
            })),
            listeners: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn lock(&self) -> MutexGuard<'_, SessionInner> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn state(&self) -> SessionState {
        self.lock().state.clone()
    }

    pub fn snapshot(&self) -> Session {
        let state = self.state();
        let (is_authenticated, user) = match state {
            SessionState::Authenticated { user, .. } => (true, user),
            _ => (false, None),
        };

        Session {
            token: self.tokens.get(),
            is_authenticated,
            is_admin: is_authenticated,
            user,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.state(), SessionState::Authenticated { .. })
    }

    /// Registers a callback run after every state change.
    pub fn subscribe<F>(&self, listener: F)
    where
        F: Fn(&Session) + Send + Sync + 'static,
    {
        self.listeners
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(Arc::new(listener));
    }

    fn notify(&self) {
        let session = self.snapshot();
        let listeners = self
            .listeners
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone();

        for listener in listeners {
            listener(&session);
        }
    }

    fn set_state(&self, state: SessionState) {
        self.lock().state = state;
        self.notify();
    }

    async fn call(
        &self,
        method: Method,
        endpoint: &str,
        bearer: Option<&str>,
        body: RequestBody,
    ) -> Result<ApiResponse, ApiError> {
        let mut headers = vec![("Content-Type".to_string(), "application/json".to_string())];
        if let Some(token) = bearer {
            headers.push(("Authorization".to_string(), format!("Bearer {}", token)));
        }

        self.transport
            .send(ApiRequest {
                method,
                url: join_url(&self.base_url, endpoint),
                headers,
                body,
            })
            .await
    }

    /// Startup check: a persisted token is validated with the server before
    /// the session counts as authenticated.
    pub async fn restore(&self) {
        let Some(stored) = self.tokens.get() else {
            return;
        };

        if !self.check_token().await {
            return;
        }

        self.set_state(SessionState::Validating);

        match self
            .call(Method::Get, VALIDATE_ENDPOINT, Some(&stored), RequestBody::Empty)
            .await
        {
            Ok(response) if response.ok() => {
                let user = response
                    .json::<ValidateResponse>()
                    .ok()
                    .and_then(|v| v.username);
                self.set_state(SessionState::Authenticated {
                    user,
                    grant: Grant::Server,
                });
            }
            Ok(response) => {
                log::info!("stored admin token rejected with status {}", response.status);
                self.logout().await;
            }
            Err(e) => {
                log_err!("token validation", e);
                self.logout().await;
            }
        }
    }

    /// Runs whenever the token value changes. An expired or unreadable token
    /// ends the session; returns whether the session survived.
    pub async fn check_token(&self) -> bool {
        let Some(current) = self.tokens.get() else {
            return true;
        };

        match token::inspect(&current, self.clock.now()) {
            TokenStatus::Valid(_) => true,
            TokenStatus::Expired => {
                log::info!("{}", AuthError::Expired);
                self.logout().await;
                false
            }
            TokenStatus::Malformed => {
                log::warn!("{}", AuthError::Malformed);
                self.logout().await;
                false
            }
        }
    }

    pub async fn login(&self, username: &str, password: &str) -> bool {
        self.login_with_outcome(username, password).await.is_ok()
    }

    /// Like [`AuthSession::login`] but says why a login failed, so the form
    /// can tell bad credentials apart from an unreachable server.
    pub async fn login_with_outcome(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Session, AuthError> {
        let body = serde_json::to_string(&LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        })
        .map_err(|e| AuthError::Network(e.to_string()))?;

        let response = match self
            .call(Method::Post, LOGIN_ENDPOINT, None, RequestBody::Json(body))
            .await
        {
            Ok(response) => response,
            Err(e) => {
                log_err!("login", e);
                return Err(AuthError::Network(e.to_string()));
            }
        };

        if !response.ok() {
            let failure = response.json::<AuthFailure>().unwrap_or_default();
            log::warn!(
                "login failed with status {}: {}",
                response.status,
                failure.message.unwrap_or_default()
            );
            return Err(AuthError::InvalidCredentials);
        }

        let data: LoginResponse = response.json().map_err(|e| {
            log_err!("login response", e);
            AuthError::Network(e.to_string())
        })?;

        // An unusable token never reaches the store or the listeners.
        match token::inspect(&data.token, self.clock.now()) {
            TokenStatus::Valid(_) => {}
            TokenStatus::Expired => {
                log::info!("login rejected: {}", AuthError::Expired);
                return Err(AuthError::Expired);
            }
            TokenStatus::Malformed => {
                log::warn!("login rejected: {}", AuthError::Malformed);
                return Err(AuthError::Malformed);
            }
        }

        self.tokens.set(&data.token);
        self.set_state(SessionState::Authenticated {
            user: data.username,
            grant: Grant::Server,
        });

        Ok(self.snapshot())
    }

    /// Best-effort server logout, then an unconditional local reset. Safe to
    /// call when already anonymous.
    pub async fn logout(&self) {
        if let Some(current) = self.tokens.get() {
            if let Err(e) = self
                .call(Method::Post, LOGOUT_ENDPOINT, Some(&current), RequestBody::Empty)
                .await
            {
                log_err!("logout", e);
            }
        }

        self.tokens.clear();
        {
            let mut inner = self.lock();
            inner.state = SessionState::Anonymous;
            if let Some(keys) = inner.keys.as_mut() {
                keys.clear();
            }
        }
        self.notify();
    }

    /// Feeds one document-level key press to the hidden access path.
    /// Returns true when this press completed the sequence.
    pub fn check_key_sequence(&self, key: &str) -> bool {
        let matched = {
            let mut inner = self.lock();
            let matched = inner.keys.as_mut().is_some_and(|keys| keys.push(key));
            if matched {
                log::warn!("admin session granted through the key sequence");
                inner.state = SessionState::Authenticated {
                    user: None,
                    grant: Grant::KeySequence,
                };
            }
            matched
        };

        if matched {
            self.notify();
        }

        matched
    }
}
