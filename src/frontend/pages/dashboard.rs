use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::{A, Outlet};
use leptos_router::hooks::use_navigate;

use crate::frontend::context::use_auth;
use crate::router::{DASHBOARD_PATH, HOME_PATH, LOGIN_PATH, ManagerRoute};

#[component]
pub fn DashboardLayout() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let state = auth.state;
    let user = move || state.get().user.unwrap_or_else(|| "Admin".to_string());

    let session = auth.session.clone();
    let logout = move |_| {
        let session = session.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            session.logout().await;
            navigate(LOGIN_PATH, Default::default());
        });
    };

    view! {
        <div class="min-h-screen flex bg-slate-50">
            <aside class="w-64 bg-white border-r border-slate-200 p-6 flex flex-col gap-2">
                <p class="text-lg font-bold mb-4">"Admin Panel"</p>
                <p class="text-xs text-slate-500 mb-4">{user}</p>
                <A href=DASHBOARD_PATH>"Overview"</A>
                {ManagerRoute::ALL
                    .into_iter()
                    .map(|route| view! { <A href=route.path()>{route.label()}</A> })
                    .collect_view()}
                <div class="mt-auto flex flex-col gap-2">
                    <a href=HOME_PATH class="text-sm text-slate-500">"View site"</a>
                    <button class="text-left text-sm text-red-600" on:click=logout>"Logout"</button>
                </div>
            </aside>
            <main class="flex-1 p-8">
                <ErrorBoundary fallback=|errors| view! {
                    <div class="p-4 rounded-lg border border-red-300 bg-red-50 text-red-700">
                        <p class="font-semibold">"Something went wrong"</p>
                        <ul>
                            {move || errors
                                .get()
                                .into_iter()
                                .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                .collect_view()}
                        </ul>
                    </div>
                }>
                    <Outlet />
                </ErrorBoundary>
            </main>
        </div>
    }
}

#[component]
pub fn DashboardHome() -> impl IntoView {
    view! {
        <section>
            <h1 class="text-2xl font-bold mb-6">"Dashboard"</h1>
            <div class="grid md:grid-cols-3 gap-4">
                {ManagerRoute::ALL
                    .into_iter()
                    .map(|route| view! {
                        <a href=route.path() class="block p-6 bg-white rounded-lg shadow hover:shadow-md">
                            <p class="font-semibold">{route.label()}</p>
                            <p class="text-sm text-slate-500">"Manage entries"</p>
                        </a>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
