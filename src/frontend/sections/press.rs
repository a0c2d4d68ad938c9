use leptos::prelude::*;

use super::{SectionHeading, load_into};
use crate::frontend::context::use_app;
use crate::models::{Bilingual, MediaItem, MediaKind};
use crate::services::catalog;

#[component]
pub fn PressSection() -> impl IntoView {
    let app = use_app();
    let language = app.language;
    let media = RwSignal::new(Vec::<MediaItem>::new());
    let tab = RwSignal::new(MediaKind::PressRelease);

    let public = app.public.clone();
    load_into(media, "load media", async move { public.media().await });

    let tabs = move || {
        let lang = language.get();
        MediaKind::ALL
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
                        {kind.label(lang)}
                    </button>
                }
            })
            .collect_view()
    };

    let cards = move || {
        let lang = language.get();
        let kind = tab.get();
        media.with(|all| {
            catalog::media_of_kind(all, kind)
                .into_iter()
                .map(|item| {
                    let title = item.title_in(lang).to_string();
                    let description = item.description_in(lang).to_string();
                    let preview = item.preview_url().map(str::to_string);
                    let video = (!item.video_url.is_empty()).then(|| item.video_url.clone());
                    let date = item.date.clone();
                    view! {
                        <article class="bg-white rounded-lg shadow overflow-hidden">
                            {preview.map(|src| view! { <img src=src class="w-full h-44 object-cover" alt="" /> })}
                            <div class="p-5">
                                <p class="text-xs text-slate-500">{date}</p>
                                <h3 class="text-lg font-semibold">{title}</h3>
                                <p class="text-sm text-slate-600">{description}</p>
                                {video.map(|url| view! {
                                    <a href=url target="_blank" class="inline-block mt-3 text-orange-600 font-semibold">
                                        {lang.pick("Watch interview", "साक्षात्कार देखें")}
                                    </a>
                                })}
                            </div>
                        </article>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <section id="press" class="py-20">
            <div class="max-w-6xl mx-auto px-6">
                <SectionHeading en="Press & Media" hi="प्रेस और मीडिया" />
                <div class="flex gap-2 justify-center mb-8">{tabs}</div>
                <div class="grid md:grid-cols-3 gap-6">{cards}</div>
            </div>
        </section>
    }
}
