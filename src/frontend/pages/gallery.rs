use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::frontend::browser;
use crate::frontend::components::{Button, NoticeBanner};
use crate::frontend::pages::manager::{item_table, manager_form, use_manager};
use crate::manager::{ContentManager, Direction, GalleryResource, Resource, gallery};
use crate::models::{GalleryItem, GalleryKind, Language};

/// Photo and video tabs over one collection, with manual ordering.
#[component]
pub fn GalleryPage() -> impl IntoView {
    let (manager, state) = use_manager::<GalleryResource>();
    let tab = RwSignal::new(GalleryKind::Photo);
    let notice = Signal::derive(move || state.with(|s| s.notice.clone()));
    let visible = Signal::derive(move || state.with(|s| gallery::visible(&s.items, tab.get())));

    let opener = manager.clone();
    let add = Callback::new(move |_| {
        if let Err(e) = opener.open_new_with(GalleryItem::empty(tab.get_untracked())) {
            log::warn!("{}", e);
        }
    });

    let switcher = manager.clone();

    let row_manager = manager.clone();
    let actions = move |index: usize, item: GalleryItem| {
        let mover_up = row_manager.clone();
        let mover_down = row_manager.clone();
        let editor = row_manager.clone();
        let remover = row_manager.clone();
        let kind = item.kind;
        let id = item.id.clone();

        let shift = move |m: ContentManager<GalleryResource>, direction: Direction| {
            spawn_local(async move {
                let _ = m.move_item(kind, index, direction).await;
            });
        };

        view! {
            <button class="px-2" title="Move up" on:click=move |_| shift(mover_up.clone(), Direction::Up)>"↑"</button>
            <button class="px-2" title="Move down" on:click=move |_| shift(mover_down.clone(), Direction::Down)>"↓"</button>
            <button
                class="text-orange-600 hover:underline"
                on:click=move |_| {
                    if let Err(e) = editor.start_edit(&item) {
                        log::warn!("{}", e);
                    }
                }
            >
                "Edit"
            </button>
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
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-bold">{GalleryResource::TITLE}</h1>
                <Button on_click=add>
                    {move || match tab.get() {
                        GalleryKind::Photo => "Add Photo",
                        GalleryKind::Video => "Add Video",
                    }}
                </Button>
            </div>
            <div class="flex gap-2">
                {[GalleryKind::Photo, GalleryKind::Video]
                    .into_iter()
                    .map(move |kind| {
                        let switcher = switcher.clone();
                        view! {
                            <button
                                class=move || {
                                    if tab.get() == kind {
                                        "px-4 py-2 rounded-md border bg-orange-600 text-white"
                                    } else {
                                        "px-4 py-2 rounded-md border"
                                    }
                                }
                                on:click=move |_| {
                                    tab.set(kind);
                                    switcher.switch_kind(kind);
                                }
                            >
                                {kind.tab_label(Language::En)}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <NoticeBanner notice=notice />
            {manager_form(manager.clone(), state)}
            {item_table::<GalleryResource, _>(visible, actions)}
        </section>
    }
}
