use std::time::Duration;

use leptos::html::Div;
use leptos::prelude::*;

use crate::config::page_config;
use crate::hooks::use_reveal;
use crate::state::RevealSpec;

/// Fades its children up the first time they scroll into view.
///
/// `index` staggers siblings: the block waits `index` stagger steps before
/// animating. `stagger` overrides the configured step.
#[component]
pub fn Reveal(
    #[prop(optional)] index: usize,
    #[prop(optional)] stagger: Option<Duration>,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let config = page_config();
    let step = stagger.unwrap_or(config.reveal_stagger);
    let reveal = RevealSpec::fade_up(&config).staggered(index, step);
    let node_ref = NodeRef::<Div>::new();
    let revealed = use_reveal(node_ref);

    view! {
        <div
            node_ref=node_ref
            class=class
            data-revealed=move || revealed.get().to_string()
            style=move || reveal.style(revealed.get())
        >
            {children()}
        </div>
    }
}
