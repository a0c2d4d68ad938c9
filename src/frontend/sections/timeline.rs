use leptos::prelude::*;

use super::{SectionHeading, load_into};
use crate::frontend::context::use_app;
use crate::models::{Bilingual, JourneyEvent};
use crate::services::catalog;

#[component]
pub fn TimelineSection() -> impl IntoView {
    let app = use_app();
    let language = app.language;
    let events = RwSignal::new(Vec::<JourneyEvent>::new());

    let public = app.public.clone();
    load_into(events, "load journey events", async move {
        let mut list = public.journey_events().await?;
        catalog::sort_by_id(&mut list, |e| e.id.as_ref());
        Ok(list)
    });

    view! {
        <section id="journey" class="py-20">
            <div class="max-w-4xl mx-auto px-6">
                <SectionHeading en="The Journey" hi="जीवन यात्रा" />
                <ol class="relative border-l-2 border-orange-200 space-y-10">
                    {move || {
                        let lang = language.get();
                        events
                            .get()
                            .into_iter()
                            .map(|event| {
                                let title = event.title_in(lang).to_string();
                                let description = event.description_in(lang).to_string();
                                let image = (!event.image.trim().is_empty()).then(|| event.image.clone());
                                view! {
                                    <li class="ml-6">
                                        <span class="absolute -left-2 w-4 h-4 rounded-full bg-orange-500"></span>
                                        <p class="text-sm font-semibold text-orange-600">{event.year}</p>
                                        <h3 class="text-xl font-semibold">{title}</h3>
                                        <p class="text-slate-600">{description}</p>
                                        {image.map(|src| view! { <img src=src class="mt-3 rounded-lg max-h-64" alt="" /> })}
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ol>
            </div>
        </section>
    }
}
