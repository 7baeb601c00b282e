use leptos::prelude::*;

use crate::config::page_config;
use crate::hooks::use_interval;
use crate::state::Carousel;

/// Stacked images cross-fading in a fixed round-robin order.
///
/// Must sit inside a positioned container; every slide is `absolute inset-0`.
#[component]
pub fn ImageCarousel(images: &'static [&'static str], alt: &'static str) -> impl IntoView {
    let config = page_config();
    let (carousel, set_carousel) = signal(Carousel::new(images.len()));

    use_interval(config.carousel_interval, move || {
        set_carousel.update(|c| {
            let index = c.tick();
            log::debug!("carousel advanced to slide {index}");
        });
    });

    let fade = config.carousel_fade;
    images
        .iter()
        .enumerate()
        .map(|(index, src)| {
            view! {
                <img
                    src=*src
                    alt=alt
                    class="w-full h-full object-cover absolute inset-0"
                    data-current=move || (carousel.get().current() == index).to_string()
                    style=move || carousel.get().phase_of(index).style(fade)
                />
            }
        })
        .collect_view()
}
