use leptos::prelude::*;

use crate::frontend::context::use_app;
use crate::router::HOME_PATH;

#[component]
pub fn NotFound() -> impl IntoView {
    let language = use_app().language;

    view! {
        <div class="min-h-screen flex items-center justify-center px-6 bg-slate-50">
            <div class="text-center">
                <h1 class="text-8xl font-bold text-orange-600 mb-4">"404"</h1>
                <p class="text-2xl font-semibold text-slate-800 mb-2">
                    {move || language.get().pick("Page not found", "पृष्ठ नहीं मिला")}
                </p>
                <p class="text-slate-500 mb-8 max-w-md">
                    {move || language.get().pick(
                        "The page you're looking for doesn't exist or has been moved.",
                        "आप जो पृष्ठ खोज रहे हैं वह मौजूद नहीं है या हटा दिया गया है।",
                    )}
                </p>
                <a href=HOME_PATH class="px-4 py-2 rounded-md bg-orange-600 text-white">
                    {move || language.get().pick("Return Home", "मुखपृष्ठ पर जाएँ")}
                </a>
            </div>
        </div>
    }
}
