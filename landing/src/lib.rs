// Newcastle Veterinary Clinic landing page, Leptos 0.8 CSR

pub mod components;
pub mod config;
pub mod content;
pub mod dom;
pub mod error;
pub mod hooks;
pub mod sections;
pub mod state;

use leptos::prelude::*;

use config::{CLINIC_NAME, PageConfig};
use hooks::use_scroll_offset;
use sections::*;

/// The whole page. `config` overrides the default timings.
#[component]
pub fn App(#[prop(optional)] config: Option<PageConfig>) -> impl IntoView {
    provide_context(config.unwrap_or_default());
    let scroll_offset = use_scroll_offset();

    Effect::new(move || {
        log::info!("{CLINIC_NAME} landing page mounted");
    });

    view! {
        <div class="min-h-screen bg-white">
            <Nav />
            <main>
                <Hero />
                <Features />
                <About />
                <Promise />
                <CallToAction />
            </main>
            <Footer />
            <ScrollToTop offset=scroll_offset />
        </div>
    }
}
