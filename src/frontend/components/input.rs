use leptos::prelude::*;

#[component]
pub fn TextInput(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional, into)] input_type: String,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] hint: String,
    value: RwSignal<String>,
) -> impl IntoView {
    let input_type = if input_type.is_empty() {
        "text".to_string()
    } else {
        input_type
    };
    let has_hint = !hint.is_empty();

    view! {
        <div>
            <label for=name.clone() class="block text-sm font-medium text-slate-700 mb-1">
                {label}
            </label>
            <input
                type=input_type
                id=name.clone()
                name=name
                placeholder=placeholder
                required=required
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                class="w-full px-3 py-2 rounded-md border border-slate-300 focus:outline-none focus:ring-2 focus:ring-orange-500"
            />
            {has_hint.then(|| view! { <p class="mt-1 text-xs text-slate-500">{hint.clone()}</p> })}
        </div>
    }
}

#[component]
pub fn TextArea(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    #[prop(optional)] required: bool,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <div>
            <label for=name.clone() class="block text-sm font-medium text-slate-700 mb-1">
                {label}
            </label>
            <textarea
                id=name.clone()
                name=name
                rows="4"
                required=required
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                class="w-full px-3 py-2 rounded-md border border-slate-300 focus:outline-none focus:ring-2 focus:ring-orange-500"
            ></textarea>
        </div>
    }
}

#[component]
pub fn PasswordInput(#[prop(into)] label: String, value: RwSignal<String>) -> impl IntoView {
    view! {
        <TextInput
            label=label
            name="password"
            placeholder="••••••••"
            input_type="password"
            required=true
            value=value
        />
    }
}
