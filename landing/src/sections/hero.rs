use leptos::prelude::*;

use crate::components::{Icon, ImageCarousel, Reveal, SvgIcon};
use crate::config::{CLINIC_NAME, YEARS_OF_SERVICE, page_config};
use crate::content::CAROUSEL_IMAGES;

#[component]
pub fn Hero() -> impl IntoView {
    let step = page_config().hero_stagger;
    let tagline = format!("{CLINIC_NAME} is a trusted small animal practice");
    let experience = format!(
        "with over {YEARS_OF_SERVICE} years of proven experience in compassionate, high-quality veterinary care."
    );

    view! {
        <section id="home" class="pt-24 pb-20 bg-gray-50">
            <div class="max-w-[95rem] mx-auto px-6 grid lg:grid-cols-2 gap-12 items-center">
                <div class="text-center lg:text-left">
                    <Reveal stagger=step>
                        <h1 class="text-7xl font-black text-gray-900 mb-6">"We Care"</h1>
                        <div class="w-24 h-1 bg-blue-600 mb-6 mx-auto lg:mx-0"></div>
                    </Reveal>

                    <Reveal index=1 stagger=step>
                        <p class="text-2xl text-gray-700 mb-4">{tagline}</p>
                        <p class="text-2xl text-blue-600 font-semibold">{experience}</p>
                    </Reveal>

                    <Reveal index=2 stagger=step class="text-lg text-gray-600 mb-12">
                        <p>
                            "Our dedicated team is committed to delivering exceptional veterinary care, "
                            "guided by compassion, clinical excellence, and a genuine love for animals, because your "
                            "pets deserve only the best."
                        </p>
                    </Reveal>

                    <Reveal index=3 stagger=step class="flex flex-col sm:flex-row gap-4 justify-center lg:justify-start">
                        <a
                            href="#contact"
                            class="bg-blue-600 hover:bg-blue-700 text-white px-8 py-4 rounded-lg font-semibold transition shadow-lg flex items-center gap-2"
                        >
                            "Book Appointment"
                            <SvgIcon icon=Icon::ArrowRight class="w-5 h-5" />
                        </a>
                        <button class="flex items-center gap-3 text-gray-700 hover:text-blue-600">
                            <div class="w-12 h-12 border-2 border-gray-300 hover:border-blue-600 rounded-full flex items-center justify-center">
                                <SvgIcon icon=Icon::Play class="w-5 h-5" />
                            </div>
                            <span class="font-medium">"Watch Our Story"</span>
                        </button>
                    </Reveal>
                </div>

                <Reveal
                    index=4
                    stagger=step
                    class="aspect-square bg-gray-200 rounded-3xl overflow-hidden shadow-2xl relative"
                >
                    <ImageCarousel images=&CAROUSEL_IMAGES alt="Veterinary care" />
                </Reveal>
            </div>
        </section>
    }
}
