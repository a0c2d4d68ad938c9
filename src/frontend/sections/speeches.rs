use leptos::prelude::*;

use super::{SectionHeading, load_into};
use crate::frontend::context::use_app;
use crate::models::{Bilingual, Speech};
use crate::services::catalog::{self, CatalogQuery};

#[component]
pub fn SpeechesSection() -> impl IntoView {
    let app = use_app();
    let language = app.language;
    let speeches = RwSignal::new(Vec::<Speech>::new());
    let category = RwSignal::new("all".to_string());
    let search = RwSignal::new(String::new());

    let public = app.public.clone();
    load_into(speeches, "load speeches", async move {
        let mut list = public.speeches().await?;
        catalog::sort_by_id(&mut list, |s| s.id.as_ref());
        Ok(list)
    });

    let filters = move || {
        let lang = language.get();
        catalog::speech_category_ids()
            .map(|id| {
                let label = catalog::speech_category_label(id, lang);
                view! {
                    <button
                        class=move || {
                            if category.get() == id {
                                "px-3 py-1 rounded-full text-sm bg-orange-600 text-white"
                            } else {
                                "px-3 py-1 rounded-full text-sm bg-slate-100 text-slate-700"
                            }
                        }
                        on:click=move |_| category.set(id.to_string())
                    >
                        {label}
                    </button>
                }
            })
            .collect_view()
    };

    let cards = move || {
        let lang = language.get();
        let query = CatalogQuery::new(lang)
            .with_category(&category.get())
            .with_search(&search.get());

        speeches.with(|all| {
            catalog::filter_items(all, &query)
                .into_iter()
                .map(|speech| {
                    let title = speech.title_in(lang).to_string();
                    let description = speech.description_in(lang).to_string();
                    let meta = format!("{} · {}", speech.date, speech.location_in(lang));
                    let thumbnail = (!speech.thumbnail.is_empty()).then(|| speech.thumbnail.clone());
                    let video = speech.has_video().then(|| speech.video_url.clone());
                    let duration = speech.duration.clone();
                    view! {
                        <article class="bg-white rounded-lg shadow overflow-hidden">
                            {thumbnail.map(|src| view! { <img src=src class="w-full h-44 object-cover" alt="" /> })}
                            <div class="p-5">
                                <h3 class="text-lg font-semibold">{title}</h3>
                                <p class="text-xs text-slate-500 mb-2">{meta}</p>
                                <p class="text-slate-600 text-sm">{description}</p>
                                {video.map(|url| view! {
                                    <a href=url target="_blank" class="inline-block mt-3 text-orange-600 font-semibold">
                                        {format!("▶ {}", lang.pick("Watch", "देखें"))}
                                        {(!duration.is_empty()).then(|| format!(" ({})", duration))}
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
        <section id="speeches" class="py-20 bg-slate-50">
            <div class="max-w-6xl mx-auto px-6">
                <SectionHeading en="Speeches" hi="भाषण" />
                <div class="flex flex-wrap gap-2 justify-center mb-6">{filters}</div>
                <input
                    type="search"
                    class="w-full max-w-md mx-auto block mb-8 px-4 py-2 rounded-md border border-slate-300"
                    placeholder=move || language.get().pick("Search speeches...", "भाषण खोजें...")
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <div class="grid md:grid-cols-3 gap-6">{cards}</div>
            </div>
        </section>
    }
}
