use leptos::prelude::*;

#[derive(Clone, Copy, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Ghost,
    Danger,
}

impl ButtonVariant {
    fn classes(&self) -> &'static str {
        match self {
            Self::Primary => "bg-orange-600 text-white hover:bg-orange-700 focus:ring-orange-500",
            Self::Ghost => "border border-slate-300 text-slate-700 hover:bg-slate-100 focus:ring-slate-400",
            Self::Danger => "bg-red-600 text-white hover:bg-red-700 focus:ring-red-500",
        }
    }
}

/// Form or action button. With `href` it renders as a link instead.
#[component]
pub fn Button(
    children: Children,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into)] disabled: Signal<bool>,
    #[prop(optional, into)] loading: Signal<bool>,
    #[prop(optional, into)] loading_text: String,
    #[prop(optional, into)] button_type: String,
    #[prop(optional, into)] href: String,
    #[prop(optional)] on_click: Option<Callback<()>>,
) -> impl IntoView {
    let classes = format!(
        "inline-flex items-center justify-center px-4 py-2 text-sm font-semibold rounded-md transition-colors focus:outline-none focus:ring-2 focus:ring-offset-2 disabled:opacity-50 disabled:cursor-not-allowed {}",
        variant.classes()
    );

    if !href.is_empty() {
        return view! { <a href=href class=classes>{children()}</a> }.into_any();
    }

    let loading_text = if loading_text.is_empty() {
        "Saving...".to_string()
    } else {
        loading_text
    };
    let button_type = if button_type.is_empty() {
        "button".to_string()
    } else {
        button_type
    };
    let label = children();

    view! {
        <button
            type=button_type
            class=classes
            disabled=move || disabled.get() || loading.get()
            on:click=move |_| {
                if let Some(cb) = on_click {
                    cb.run(());
                }
            }
        >
            <span class:hidden=move || loading.get()>{label}</span>
            <span class="flex items-center gap-2" class:hidden=move || !loading.get()>
                <span class="w-4 h-4 border-2 border-white/30 border-t-white rounded-full animate-spin"></span>
                {loading_text}
            </span>
        </button>
    }
    .into_any()
}
