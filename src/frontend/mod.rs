pub mod browser;
pub mod components;
pub mod context;
pub mod pages;
mod sections;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::config::AppConfig;
use crate::log_err;
use context::AppContext;
use pages::{
    DashboardHome, DashboardLayout, GalleryPage, HomePage, JourneyPage, LoginPage, MessagesPage,
    NotFound, PressReleasePage, ProtectedRoute, SpeechesPage,
};

/// Main application component with routing
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::from_build_env().unwrap_or_else(|e| {
        log_err!("configuration", e);
        AppConfig::default()
    });
    let app = AppContext::new(config);

    // A token left from an earlier visit is only trusted once the server
    // confirms it.
    let session = app.auth.session.clone();
    spawn_local(async move {
        session.restore().await;
    });

    let language = app.language;
    provide_context(app);

    view! {
        <Html attr:lang=move || language.get().code() />
        <Title text="Official Profile" />
        <Meta name="description" content="Journey, speeches, press releases and gallery" />

        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/admin/login") view=LoginPage />
                <ParentRoute
                    path=path!("/dashboard")
                    view=|| view! { <ProtectedRoute><DashboardLayout /></ProtectedRoute> }
                >
                    <Route path=path!("") view=DashboardHome />
                    <Route path=path!("journey") view=JourneyPage />
                    <Route path=path!("speeches") view=SpeechesPage />
                    <Route path=path!("press-release") view=PressReleasePage />
                    <Route path=path!("gallery") view=GalleryPage />
                    <Route path=path!("messages") view=MessagesPage />
                </ParentRoute>
            </Routes>
        </Router>
    }
}

/// Mounts the app onto `<body>`.
#[cfg(feature = "csr")]
pub fn mount() {
    leptos::mount::mount_to_body(App);
}
