use leptos::prelude::*;

use crate::manager::{Notice, NoticeLevel};

#[derive(Clone, Copy, Default, PartialEq)]
pub enum AlertVariant {
    #[default]
    Success,
    Error,
}

impl From<NoticeLevel> for AlertVariant {
    fn from(level: NoticeLevel) -> Self {
        match level {
            NoticeLevel::Success => Self::Success,
            NoticeLevel::Error => Self::Error,
        }
    }
}

#[component]
pub fn Alert(
    #[prop(into)] message: String,
    #[prop(optional)] variant: AlertVariant,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let (icon, classes) = match variant {
        AlertVariant::Success => ("✓", "bg-emerald-50 border-emerald-300 text-emerald-700"),
        AlertVariant::Error => ("✕", "bg-red-50 border-red-300 text-red-700"),
    };

    view! {
        <div role="alert" class=format!("mb-6 p-4 rounded-lg border text-sm {}", classes)>
            <p class="flex items-center gap-2">
                <span>{icon}</span>
                <span>{message}</span>
            </p>
            {children.map(|c| view! { <div class="mt-3">{c()}</div> })}
        </div>
    }
}

#[component]
pub fn ErrorAlert(#[prop(into)] message: String) -> impl IntoView {
    view! { <Alert message=message variant=AlertVariant::Error /> }
}

/// Renders a manager notice, or nothing.
#[component]
pub fn NoticeBanner(notice: Signal<Option<Notice>>) -> impl IntoView {
    move || {
        notice.get().map(|n| {
            view! { <Alert message=n.message variant=AlertVariant::from(n.level) /> }
        })
    }
}
