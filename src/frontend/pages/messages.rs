use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::frontend::browser;
use crate::frontend::components::NoticeBanner;
use crate::frontend::context::use_app;
use crate::frontend::pages::manager::{item_table, use_manager};
use crate::manager::{MessageResource, Resource};
use crate::models::ContactMessage;

/// Contact-form inbox: read, forward to WhatsApp, delete.
#[component]
pub fn MessagesPage() -> impl IntoView {
    let whatsapp = use_app().config.whatsapp_number;
    let (manager, state) = use_manager::<MessageResource>();
    let items = Signal::derive(move || state.with(|s| s.items.clone()));
    let notice = Signal::derive(move || state.with(|s| s.notice.clone()));

    let actions = move |_: usize, message: ContactMessage| {
        let remover = manager.clone();
        let id = message.id.clone();
        let link = whatsapp.as_deref().map(|number| message.whatsapp_link(number));

        view! {
            {link.map(|url| view! {
                <button
                    class="text-emerald-600 hover:underline"
                    on:click=move |_| browser::open_in_new_tab(&url)
                >
                    "Send to WhatsApp"
                </button>
            })}
            <button
                class="text-red-600 hover:underline"
                on:click=move |_| {
                    let remover = remover.clone();
                    let Some(id) = id.clone() else { return };
                    spawn_local(async move {
                        let _ = remover.delete(&id, &browser::confirm).await;
                    });
                }
            >
                "Delete"
            </button>
        }
        .into_any()
    };

    view! {
        <section class="space-y-6">
            <h1 class="text-2xl font-bold">{MessageResource::TITLE}</h1>
            <NoticeBanner notice=notice />
            <Show when=move || state.with(|s| !s.loading && s.items.is_empty())>
                <p class="text-slate-500">"No messages yet."</p>
            </Show>
            {item_table::<MessageResource, _>(items, actions)}
        </section>
    }
}
