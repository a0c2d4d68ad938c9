//! The generic admin panel: one form and one table driven by a resource's
//! field schema.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::frontend::browser;
use crate::frontend::components::{Button, ButtonVariant, FieldInput, NoticeBanner};
use crate::frontend::context::use_app;
use crate::manager::{
    ContentManager, JourneyResource, ManagerState, PressResource, Resource, SpeechResource,
    fields,
};

pub(crate) type ManagerSignal<R> = RwSignal<ManagerState<<R as Resource>::Item>>;

/// Builds a manager mirrored into a signal and starts the first fetch.
pub(crate) fn use_manager<R: Resource>() -> (ContentManager<R>, ManagerSignal<R>) {
    let base = ContentManager::<R>::new(use_app().api);
    let state = RwSignal::new(base.snapshot());
    let manager = base.with_listener(move |s| {
        let _ = state.try_set(s.clone());
    });

    let loader = manager.clone();
    spawn_local(async move {
        let _ = loader.fetch_list().await;
    });

    (manager, state)
}

fn column_label<R: Resource>(name: &'static str) -> &'static str {
    match R::field(name) {
        Some(spec) => spec.label,
        None if name == "sortOrder" => "Order",
        None => name,
    }
}

pub(crate) fn manager_form<R: Resource>(
    manager: ContentManager<R>,
    state: ManagerSignal<R>,
) -> impl IntoView {
    let inputs = R::fields()
        .iter()
        .copied()
        .map(|spec| {
            let value = Signal::derive(move || {
                state.with(|s| fields::read(&s.draft, spec.name).unwrap_or_default())
            });
            let writer = manager.clone();
            let on_change = Callback::new(move |raw: String| {
                if let Err(e) = writer.set_field(spec.name, &raw) {
                    log::warn!("{}", e);
                }
            });
            // Only changes when the upload target does, so typing keeps focus.
            let asset = Memo::new(move |_| state.with(|s| R::asset_kind(&s.draft, &spec)));

            move || {
                view! { <FieldInput spec=spec value=value on_change=on_change asset=asset.get() /> }
            }
        })
        .collect_view();

    let saver = manager.clone();
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let saver = saver.clone();
        spawn_local(async move {
            let _ = saver.save().await;
        });
    };

    let canceller = manager;
    let loading = Signal::derive(move || state.with(|s| s.loading));

    view! {
        <form
            class="bg-white rounded-lg shadow p-6 space-y-4"
            class:hidden=move || !state.with(|s| s.form_open)
            on:submit=on_submit
        >
            <h2 class="text-lg font-semibold">
                {move || {
                    if state.with(|s| s.editing_id.is_some()) {
                        format!("Edit {}", R::SINGULAR)
                    } else {
                        format!("Add {}", R::SINGULAR)
                    }
                }}
            </h2>
            <div class="grid md:grid-cols-2 gap-4">{inputs}</div>
            <div class="flex gap-3">
                <Button button_type="submit" loading=loading>"Save"</Button>
                <Button variant=ButtonVariant::Ghost on_click=Callback::new(move |_| canceller.reset())>
                    "Cancel"
                </Button>
            </div>
        </form>
    }
}

pub(crate) fn item_table<R, F>(items: Signal<Vec<R::Item>>, actions: F) -> impl IntoView
where
    R: Resource,
    F: Fn(usize, R::Item) -> AnyView + Send + Sync + 'static,
{
    let columns = R::columns();

    view! {
        <table class="w-full text-sm bg-white rounded-lg shadow">
            <thead>
                <tr>
                    {columns
                        .iter()
                        .map(|c| view! { <th class="text-left p-3">{column_label::<R>(c)}</th> })
                        .collect_view()}
                    <th class="p-3"></th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    items
                        .get()
                        .into_iter()
                        .enumerate()
                        .map(|(index, item)| {
                            let cells = columns
                                .iter()
                                .map(|c| {
                                    let text = fields::read(&item, c).unwrap_or_default();
                                    view! { <td class="p-3 align-top">{text}</td> }
                                })
                                .collect_view();
                            view! {
                                <tr class="border-t border-slate-100">
                                    {cells}
                                    <td class="p-3 flex gap-2 justify-end">{actions(index, item)}</td>
                                </tr>
                            }
                        })
                        .collect_view()
                }}
            </tbody>
        </table>
    }
}

/// Edit and delete buttons, as the resource allows.
pub(crate) fn crud_actions<R: Resource>(
    manager: ContentManager<R>,
) -> impl Fn(usize, R::Item) -> AnyView + Send + Sync + 'static {
    move |_, item| {
        let editor = manager.clone();
        let remover = manager.clone();
        let id = R::id(&item).cloned();
        let target = item.clone();

        view! {
            {R::CAPABILITIES.update.then(|| view! {
                <button
                    class="text-orange-600 hover:underline"
                    on:click=move |_| {
                        if let Err(e) = editor.start_edit(&target) {
                            log::warn!("{}", e);
                        }
                    }
                >
                    "Edit"
                </button>
            })}
            {(R::CAPABILITIES.delete && id.is_some()).then(|| view! {
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
            })}
        }
        .into_any()
    }
}

/// Standard panel: heading, add button, notice, form and table.
pub(crate) fn manager_page<R: Resource>() -> impl IntoView {
    let (manager, state) = use_manager::<R>();
    let items = Signal::derive(move || state.with(|s| s.items.clone()));
    let notice = Signal::derive(move || state.with(|s| s.notice.clone()));
    let opener = manager.clone();

    view! {
        <section class="space-y-6">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-bold">{R::TITLE}</h1>
                {R::CAPABILITIES.create.then(|| view! {
                    <Button on_click=Callback::new(move |_| {
                        if let Err(e) = opener.open_new() {
                            log::warn!("{}", e);
                        }
                    })>
                        {format!("Add {}", R::SINGULAR)}
                    </Button>
                })}
            </div>
            <NoticeBanner notice=notice />
            {manager_form(manager.clone(), state)}
            <Show when=move || state.with(|s| s.loading)>
                <p class="text-slate-500">"Loading..."</p>
            </Show>
            {item_table::<R, _>(items, crud_actions(manager))}
        </section>
    }
}

#[component]
pub fn JourneyPage() -> impl IntoView {
    manager_page::<JourneyResource>()
}

#[component]
pub fn SpeechesPage() -> impl IntoView {
    manager_page::<SpeechResource>()
}

#[component]
pub fn PressReleasePage() -> impl IntoView {
    manager_page::<PressResource>()
}
