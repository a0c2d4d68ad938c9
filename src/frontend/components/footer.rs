use chrono::{Datelike, Utc};
use leptos::prelude::*;

use crate::frontend::context::use_app;

#[component]
pub fn Footer() -> impl IntoView {
    let language = use_app().language;
    let year = Utc::now().year();

    view! {
        <footer class="border-t border-slate-200 bg-slate-50">
            <div class="max-w-6xl mx-auto px-6 py-10 text-center">
                <p class="text-slate-600 mb-4">
                    {move || language.get().pick("Serving the people with dedication.", "समर्पण के साथ जनसेवा।")}
                </p>
                <p class="text-xs text-slate-500">
                    {move || format!("© {} {}", year, language.get().pick("All rights reserved.", "सर्वाधिकार सुरक्षित।"))}
                </p>
            </div>
        </footer>
    }
}
