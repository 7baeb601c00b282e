use leptos::prelude::*;

use crate::components::{Reveal, SvgIcon};
use crate::content::{Feature, PRIMARY_FEATURES, SECONDARY_FEATURES};

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id="services" class="py-20 bg-white">
            <div class="max-w-[95rem] mx-auto px-6">
                <Reveal>
                    <h2 class="text-5xl font-black text-gray-900 mb-4">"Why Choose Us?"</h2>
                </Reveal>
                <div class="w-24 h-1 bg-blue-600 mb-10"></div>

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8 mb-16">
                    {PRIMARY_FEATURES
                        .iter()
                        .enumerate()
                        .map(|(index, feature)| view! { <FeatureCard feature=*feature index=index /> })
                        .collect_view()}
                </div>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                    {SECONDARY_FEATURES
                        .iter()
                        .enumerate()
                        .map(|(index, feature)| view! { <PerkCard feature=*feature index=index /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(feature: Feature, index: usize) -> impl IntoView {
    view! {
        <Reveal
            index=index
            class="bg-white border border-gray-200 rounded-2xl p-8 hover:shadow-xl transition"
        >
            <article class="flex flex-col items-center text-center">
                <div class="w-16 h-16 bg-blue-600 rounded-xl flex items-center justify-center mb-6 group-hover:bg-blue-700 transition">
                    <div class="text-white">
                        <SvgIcon icon=feature.icon class="w-8 h-8" />
                    </div>
                </div>
                <h3 class="text-xl font-bold mb-4">{feature.title}</h3>
                <p class="text-gray-600">{feature.description}</p>
            </article>
        </Reveal>
    }
}

/// Smaller tinted card for the secondary list.
#[component]
fn PerkCard(feature: Feature, index: usize) -> impl IntoView {
    view! {
        <Reveal
            index=index
            class="bg-blue-50 border border-gray-200 rounded-xl p-6 hover:bg-blue-100 transition"
        >
            <article class="flex flex-col items-center">
                <div class="w-12 h-12 bg-white rounded-lg flex items-center justify-center mb-4 shadow-sm">
                    <div class="text-blue-600">
                        <SvgIcon icon=feature.icon class="w-6 h-6" />
                    </div>
                </div>
                <h3 class="text-lg font-semibold mb-3">{feature.title}</h3>
                <p class="text-gray-700 text-sm">{feature.description}</p>
            </article>
        </Reveal>
    }
}
