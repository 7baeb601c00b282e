use leptos::prelude::*;

use crate::components::{Icon, Reveal, SvgIcon};
use crate::content::TEAM_PHOTO;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="py-20 bg-gray-50">
            <div class="max-w-[95rem] mx-auto px-6 grid lg:grid-cols-2 gap-16 items-center">
                <Reveal>
                    <h2 class="text-5xl font-black mb-6">"About Us"</h2>
                    <div class="w-24 h-1 bg-blue-600 mb-8"></div>
                    <p class="text-lg mb-4">
                        "For more than three decades, we have been committed to the health and happiness "
                        "of the animals in our community, offering preventive care, diagnostics and surgery "
                        "under one roof."
                    </p>
                    <p class="text-lg">
                        "We treat every patient with love and attention, taking the time to listen to "
                        "owners and explain every step of the care we provide."
                    </p>
                    <button class="mt-8 bg-blue-600 hover:bg-blue-700 text-white px-8 py-3 rounded-lg font-semibold transition shadow-lg flex items-center gap-2">
                        "Learn More"
                        <SvgIcon icon=Icon::ChevronRight class="w-4 h-4" />
                    </button>
                </Reveal>

                <Reveal index=1 class="aspect-[4/3] bg-gray-200 rounded-3xl overflow-hidden shadow-xl">
                    <img src=TEAM_PHOTO alt="Veterinary team" class="w-full h-full object-cover" />
                </Reveal>
            </div>
        </section>
    }
}
