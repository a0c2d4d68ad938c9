use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::AssetKind;
use crate::frontend::browser;
use crate::frontend::context::use_app;
use crate::manager::{FieldKind, FieldSpec};

/// One input of the generic manager form, chosen by the field's kind.
#[component]
pub fn FieldInput(
    spec: FieldSpec,
    value: Signal<String>,
    on_change: Callback<String>,
    /// Upload target for asset fields; decided by the draft.
    asset: Option<AssetKind>,
) -> impl IntoView {
    let input_class = "w-full px-3 py-2 rounded-md border border-slate-300 focus:outline-none focus:ring-2 focus:ring-orange-500";
    let name = spec.name;

    let control = match spec.kind {
        FieldKind::TextArea => view! {
            <textarea
                id=name
                rows="4"
                class=input_class
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            ></textarea>
        }
        .into_any(),
        FieldKind::Select(options) => view! {
            <select
                id=name
                class=input_class
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <option value="">"Select..."</option>
                {options
                    .iter()
                    .map(|option| view! { <option value=*option>{*option}</option> })
                    .collect_view()}
            </select>
        }
        .into_any(),
        FieldKind::ReadOnly => view! { <p class="text-slate-700 whitespace-pre-wrap">{move || value.get()}</p> }.into_any(),
        FieldKind::Asset(default_kind) => {
            let kind = asset.unwrap_or(default_kind);
            view! { <AssetInput name=name kind=kind value=value on_change=on_change /> }.into_any()
        }
        other => {
            let input_type = match other {
                FieldKind::Date => "date",
                FieldKind::Url => "url",
                FieldKind::Number => "number",
                _ => "text",
            };
            view! {
                <input
                    type=input_type
                    id=name
                    class=input_class
                    prop:value=move || value.get()
                    on:input=move |ev| on_change.run(event_target_value(&ev))
                />
            }
            .into_any()
        }
    };

    view! {
        <div>
            <label for=name class="block text-sm font-medium text-slate-700 mb-1">{spec.label}</label>
            {control}
        </div>
    }
}

/// URL box plus a file picker that uploads to the media host and writes the
/// returned URL back into the field.
#[component]
fn AssetInput(
    name: &'static str,
    kind: AssetKind,
    value: Signal<String>,
    on_change: Callback<String>,
) -> impl IntoView {
    let uploader = use_app().uploader;
    let uploading = RwSignal::new(false);

    let on_file = move |ev: web_sys::Event| {
        let Some(input) = browser::event_file_input(&ev) else {
            return;
        };
        let uploader = uploader.clone();
        uploading.set(true);

        spawn_local(async move {
            let picked = browser::read_selected_file(&input).await;
            match picked {
                Ok(Some((filename, bytes))) => match uploader.upload(kind, &filename, bytes).await {
                    Ok(url) => on_change.run(url),
                    Err(e) => {
                        log::error!("upload of {} failed: {}", filename, e);
                        browser::alert(&e.to_string());
                    }
                },
                Ok(None) => {}
                Err(e) => browser::alert(&format!("Could not read the file: {}", e)),
            }
            uploading.set(false);
        });
    };

    view! {
        <div class="space-y-2">
            <input
                type="url"
                id=name
                class="w-full px-3 py-2 rounded-md border border-slate-300"
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
            <input type="file" accept=kind.accept() on:change=on_file disabled=move || uploading.get() />
            <Show when=move || uploading.get()>
                <p class="text-xs text-slate-500">"Uploading..."</p>
            </Show>
            <Show when=move || !value.get().is_empty() && kind == AssetKind::Image>
                <img src=move || value.get() class="h-24 rounded-md object-cover" alt="" />
            </Show>
        </div>
    }
}
