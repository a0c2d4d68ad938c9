use leptos::prelude::*;

use super::{SectionHeading, load_into};
use crate::frontend::context::use_app;
use crate::models::{Bilingual, GALLERY_CATEGORIES, GalleryItem, GalleryKind};
use crate::services::catalog::{self, CategoryFilter};

#[component]
pub fn GallerySection() -> impl IntoView {
    let app = use_app();
    let language = app.language;
    let items = RwSignal::new(Vec::<GalleryItem>::new());
    let tab = RwSignal::new(GalleryKind::Photo);
    let category = RwSignal::new(CategoryFilter::All);

    let public = app.public.clone();
    load_into(items, "load gallery", async move { public.gallery().await });

    let tabs = move || {
        let lang = language.get();
        [GalleryKind::Photo, GalleryKind::Video]
            .into_iter()
            .map(|kind| {
                view! {
                    <button
                        class=move || {
                            if tab.get() == kind {
                                "px-4 py-2 rounded-md bg-orange-600 text-white"
                            } else {
                                "px-4 py-2 rounded-md bg-white border border-slate-300"
                            }
                        }
                        on:click=move |_| tab.set(kind)
                    >
                        {kind.tab_label(lang)}
                    </button>
                }
            })
            .collect_view()
    };

    let filters = move || {
        let lang = language.get();
        std::iter::once("all")
            .chain(GALLERY_CATEGORIES)
            .map(|id| {
                let label = catalog::gallery_category_label(id, lang);
                view! {
                    <button
                        class=move || {
                            if category.get().id() == id {
                                "px-3 py-1 rounded-full text-sm bg-orange-600 text-white"
                            } else {
                                "px-3 py-1 rounded-full text-sm bg-slate-100 text-slate-700"
                            }
                        }
                        on:click=move |_| category.set(CategoryFilter::from_id(id))
                    >
                        {label}
                    </button>
                }
            })
            .collect_view()
    };

    let tiles = move || {
        let lang = language.get();
        let filter = category.get();
        let kind = tab.get();
        items.with(|all| {
            catalog::gallery_of_kind(all, kind)
                .into_iter()
                .filter(|item| filter.matches(&item.category))
                .map(|item| {
                    let title = item.title_in(lang).to_string();
                    let preview = item.preview_url().map(str::to_string);
                    let url = item.url.clone();
                    let duration = item.duration.clone();
                    let body = match kind {
                        GalleryKind::Photo => view! {
                            <img src=preview.unwrap_or_default() class="w-full h-56 object-cover" alt=title.clone() />
                        }
                        .into_any(),
                        GalleryKind::Video => view! {
                            <a href=url target="_blank" class="block relative">
                                {preview.map(|src| view! { <img src=src class="w-full h-56 object-cover" alt="" /> })}
                                <span class="absolute bottom-2 right-2 px-2 py-1 text-xs rounded bg-black/70 text-white">
                                    {duration}
                                </span>
                            </a>
                        }
                        .into_any(),
                    };
                    view! {
                        <figure class="bg-white rounded-lg shadow overflow-hidden">
                            {body}
                            <figcaption class="p-3 text-sm font-medium">{title}</figcaption>
                        </figure>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <section id="gallery" class="py-20 bg-slate-50">
            <div class="max-w-6xl mx-auto px-6">
                <SectionHeading en="Gallery" hi="गैलरी" />
                <div class="flex gap-2 justify-center mb-4">{tabs}</div>
                <div class="flex flex-wrap gap-2 justify-center mb-8">{filters}</div>
                <div class="grid md:grid-cols-3 gap-6">{tiles}</div>
            </div>
        </section>
    }
}
