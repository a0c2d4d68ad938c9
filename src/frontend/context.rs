use leptos::prelude::*;
use std::sync::Arc;

use crate::api::{HttpTransport, MediaUploader, PublicApi, ReqwestTransport, SecureApi};
use crate::config::AppConfig;
use crate::frontend::browser::{BrowserNavigator, LocalStorageTokenStore};
use crate::models::Language;
use crate::services::{AuthSession, Session, SystemClock};

/// Session handle plus a signal mirroring it for the views.
#[derive(Clone)]
pub struct AuthContext {
    pub session: AuthSession,
    pub state: RwSignal<Session>,
}

/// Everything the pages need, provided once at the root.
#[derive(Clone)]
pub struct AppContext {
    pub config: AppConfig,
    pub auth: AuthContext,
    pub api: SecureApi,
    pub public: PublicApi,
    pub uploader: MediaUploader,
    pub language: RwSignal<Language>,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        let transport: Arc<dyn HttpTransport> = Arc::new(ReqwestTransport::new());
        let tokens = Arc::new(LocalStorageTokenStore);
        let navigator = Arc::new(BrowserNavigator);

        let session = AuthSession::new(
            &config,
            transport.clone(),
            tokens.clone(),
            Arc::new(SystemClock),
        );
        let state = RwSignal::new(session.snapshot());
        session.subscribe(move |s| {
            let _ = state.try_set(s.clone());
        });

        Self {
            api: SecureApi::new(&config, transport.clone(), tokens, navigator),
            public: PublicApi::new(&config, transport.clone()),
            uploader: MediaUploader::new(&config, transport),
            auth: AuthContext { session, state },
            language: RwSignal::new(Language::default()),
            config,
        }
    }
}

pub fn use_app() -> AppContext {
    use_context::<AppContext>().unwrap_or_else(|| {
        log::error!("AppContext missing; falling back to defaults");
        AppContext::new(AppConfig::default())
    })
}

pub fn use_auth() -> AuthContext {
    use_app().auth
}
