use leptos::prelude::*;

use crate::components::{Icon, Reveal, SvgIcon};
use crate::content::PET_CARE_PHOTO;

/// "Our Promise": care philosophy, photo on the left.
#[component]
pub fn Promise() -> impl IntoView {
    view! {
        <section class="py-20 bg-white">
            <div class="max-w-[95rem] mx-auto px-6 grid lg:grid-cols-2 gap-16 items-center">
                <Reveal class="aspect-[4/3] bg-gray-200 rounded-3xl overflow-hidden shadow-xl">
                    <img src=PET_CARE_PHOTO alt="Pet care" class="w-full h-full object-cover" />
                </Reveal>

                <Reveal index=1>
                    <h2 class="text-5xl font-black mb-6">"Our Promise"</h2>
                    <div class="w-24 h-1 bg-blue-600 mb-8"></div>
                    <p class="text-lg mb-4">
                        "Thank you for entrusting us with caring for your companions. We never take "
                        "that trust lightly."
                    </p>
                    <p class="text-lg mb-4">
                        "Our commitment goes beyond medical treatment: every visit is calm, unhurried "
                        "and focused on your pet's comfort."
                    </p>
                    <p class="text-lg">
                        "We build lasting relationships with pets and their families, from the first "
                        "vaccination to the golden years."
                    </p>
                    <a
                        href="#services"
                        class="mt-8 bg-blue-600 hover:bg-blue-700 text-white px-8 py-3 rounded-lg font-semibold transition shadow-lg inline-flex items-center gap-2"
                    >
                        "Our Services"
                        <SvgIcon icon=Icon::ChevronRight class="w-4 h-4" />
                    </a>
                </Reveal>
            </div>
        </section>
    }
}
