//! Sections of the public one-page site.

use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;

use crate::common::ApiError;
use crate::log_err;

mod connect;
mod gallery;
mod hero;
mod press;
mod speeches;
mod timeline;

pub use connect::ConnectSection;
pub use gallery::GallerySection;
pub use hero::HeroSection;
pub use press::PressSection;
pub use speeches::SpeechesSection;
pub use timeline::TimelineSection;

/// Fetches a list once into `target`; a failure leaves the section empty.
pub(crate) fn load_into<T, Fut>(target: RwSignal<Vec<T>>, context: &'static str, fetch: Fut)
where
    T: Send + Sync + 'static,
    Fut: Future<Output = Result<Vec<T>, ApiError>> + 'static,
{
    spawn_local(async move {
        match fetch.await {
            Ok(items) => {
                let _ = target.try_set(items);
            }
            Err(e) => log_err!(context, e),
        }
    });
}

#[component]
pub(crate) fn SectionHeading(en: &'static str, hi: &'static str) -> impl IntoView {
    let language = crate::frontend::context::use_app().language;
    view! {
        <h2 class="text-3xl font-bold text-center mb-10 text-slate-800">
            {move || language.get().pick(en, hi)}
        </h2>
    }
}
