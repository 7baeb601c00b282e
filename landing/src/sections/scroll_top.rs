use leptos::prelude::*;

use crate::components::{Icon, SvgIcon};
use crate::config::page_config;
use crate::dom;
use crate::state::Affordance;

/// Floating button that fades in past the scroll threshold.
///
/// `offset` comes from the page root; this is its only consumer.
#[component]
pub fn ScrollToTop(#[prop(into)] offset: Signal<f64>) -> impl IntoView {
    let config = page_config();
    let affordance = move || Affordance::for_offset(offset.get(), config.scroll_threshold);

    let scroll_up = move |_| {
        if let Err(err) = dom::smooth_scroll_to_top() {
            log::warn!("scroll to top failed: {err}");
        }
    };

    view! {
        <button
            id="scroll-to-top"
            class="fixed bottom-8 right-8 w-12 h-12 bg-blue-600 hover:bg-blue-700 text-white rounded-full flex items-center justify-center shadow-lg transition-all duration-300 z-50"
            aria-label="Scroll to top"
            data-visible=move || affordance().is_visible().to_string()
            style=move || affordance().style(config.scroll_button_offset)
            on:click=scroll_up
        >
            <SvgIcon icon=Icon::ChevronRight class="w-5 h-5 -rotate-90" />
        </button>
    }
}
