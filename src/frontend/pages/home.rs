use leptos::prelude::*;

use crate::frontend::components::{Footer, Header};
use crate::frontend::sections::{
    ConnectSection, GallerySection, HeroSection, PressSection, SpeechesSection, TimelineSection,
};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Header />
        <main>
            <HeroSection />
            <TimelineSection />
            <SpeechesSection />
            <PressSection />
            <GallerySection />
            <ConnectSection />
        </main>
        <Footer />
    }
}
