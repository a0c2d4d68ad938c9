use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use crate::frontend::context::use_auth;
use crate::router::guard::{self, GuardDecision};

/// Renders its children only for an admin session; anyone else is sent to
/// the login page with the requested location preserved.
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let state = use_auth().state;
    let location = use_location();

    move || {
        let path = location.pathname.get();
        let search = location.search.get();
        let requested = match search.trim_start_matches('?') {
            "" => path,
            query => format!("{}?{}", path, query),
        };
        match guard::check(&state.get(), &requested) {
            GuardDecision::Render => children().into_any(),
            GuardDecision::Redirect { to } => view! { <Redirect path=to /> }.into_any(),
        }
    }
}
