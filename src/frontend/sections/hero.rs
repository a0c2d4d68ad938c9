use leptos::prelude::*;

use crate::frontend::context::use_app;

#[component]
pub fn HeroSection() -> impl IntoView {
    let language = use_app().language;

    view! {
        <section id="home" class="pt-32 pb-20 bg-gradient-to-br from-orange-50 to-white">
            <div class="max-w-4xl mx-auto px-6 text-center">
                <h1 class="text-5xl font-bold text-slate-900 mb-4">
                    {move || language.get().pick("A Life in Public Service", "जनसेवा को समर्पित जीवन")}
                </h1>
                <p class="text-lg text-slate-600 mb-8">
                    {move || language.get().pick(
                        "Speeches, milestones and moments from the journey so far.",
                        "अब तक की यात्रा के भाषण, पड़ाव और क्षण।",
                    )}
                </p>
                <a href="#connect" class="px-6 py-3 rounded-md bg-orange-600 text-white font-semibold">
                    {move || language.get().pick("Get in touch", "संपर्क करें")}
                </a>
            </div>
        </section>
    }
}
