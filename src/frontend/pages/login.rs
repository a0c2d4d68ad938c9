use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::frontend::components::{Button, ErrorAlert, PasswordInput, TextInput};
use crate::frontend::context::use_app;
use crate::router::RETURN_PARAM;
use crate::router::guard::return_target;

#[component]
pub fn LoginPage() -> impl IntoView {
    let app = use_app();
    let auth = app.auth.clone();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    let query = use_query_map();
    let target = move || return_target(query.with(|q| q.get(RETURN_PARAM)).as_deref());

    // Leaves as soon as the session is authenticated, however that happened.
    let navigate = use_navigate();
    let state = auth.state;
    Effect::new(move |_| {
        if state.get().is_authenticated {
            navigate(&target(), Default::default());
        }
    });

    if app.config.secret_sequence.is_some() {
        let session = auth.session.clone();
        let handle = window_event_listener(leptos::ev::keydown, move |ev| {
            session.check_key_sequence(&ev.key());
        });
        on_cleanup(move || handle.remove());
    }

    let session = auth.session.clone();
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let session = session.clone();
        let user = username.get_untracked();
        let pass = password.get_untracked();
        pending.set(true);
        error.set(None);

        spawn_local(async move {
            if let Err(e) = session.login_with_outcome(&user, &pass).await {
                let _ = error.try_set(Some(e.to_string()));
            }
            let _ = pending.try_set(false);
        });
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-slate-50 px-6">
            <div class="w-full max-w-md bg-white rounded-xl shadow p-8">
                <h1 class="text-2xl font-bold mb-1">"Admin Login"</h1>
                <p class="text-slate-500 mb-6">"Sign in to manage the site content"</p>
                {move || error.get().map(|message| view! { <ErrorAlert message=message /> })}
                <form class="space-y-5" on:submit=on_submit>
                    <TextInput label="Username" name="username" required=true value=username />
                    <PasswordInput label="Password" value=password />
                    <Button button_type="submit" loading=pending loading_text="Signing in...">
                        "Sign In"
                    </Button>
                </form>
                <a href="/" class="block mt-6 text-sm text-slate-500">"← Back to site"</a>
            </div>
        </div>
    }
}
