use leptos::prelude::*;

use crate::frontend::context::use_app;
use crate::router::LOGIN_PATH;

const SECTIONS: [(&str, &str, &str); 5] = [
    ("journey", "Journey", "यात्रा"),
    ("speeches", "Speeches", "भाषण"),
    ("press", "Press", "प्रेस"),
    ("gallery", "Gallery", "गैलरी"),
    ("connect", "Connect", "संपर्क"),
];

/// Public site header with section anchors and the language toggle.
#[component]
pub fn Header() -> impl IntoView {
    let language = use_app().language;

    view! {
        <nav class="fixed top-0 left-0 right-0 z-50 backdrop-blur-md bg-white/90 border-b border-slate-200">
            <div class="max-w-6xl mx-auto px-6 py-4 flex items-center justify-between">
                <a href="#home" class="text-xl font-bold text-orange-600">
                    {move || language.get().pick("Profile", "प्रोफ़ाइल")}
                </a>
                <div class="flex items-center gap-6">
                    {SECTIONS
                        .into_iter()
                        .map(|(anchor, en, hi)| {
                            view! {
                                <a href=format!("#{}", anchor) class="text-slate-600 hover:text-orange-600">
                                    {move || language.get().pick(en, hi).to_string()}
                                </a>
                            }
                        })
                        .collect_view()}
                    <button
                        class="px-3 py-1 rounded-md border border-slate-300 text-sm"
                        on:click=move |_| language.update(|l| *l = l.toggle())
                    >
                        {move || language.get().toggle().pick("English", "हिन्दी").to_string()}
                    </button>
                    <a href=LOGIN_PATH class="text-xs text-slate-400">"Admin"</a>
                </div>
            </div>
        </nav>
    }
}
