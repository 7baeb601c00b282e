use leptos::prelude::*;

use crate::components::Reveal;

#[component]
pub fn CallToAction() -> impl IntoView {
    view! {
        <section class="py-20 bg-blue-600">
            <div class="max-w-4xl mx-auto px-6 text-center text-white">
                <Reveal>
                    <h2 class="text-4xl font-bold mb-8">"We Provide the Care Your Pet Deserves"</h2>
                </Reveal>
                <Reveal index=1>
                    <a
                        href="#contact"
                        class="inline-block bg-white text-blue-600 hover:bg-gray-100 px-8 py-4 rounded-lg font-semibold text-lg shadow-lg transition"
                    >
                        "Book Today"
                    </a>
                </Reveal>
            </div>
        </section>
    }
}
