use leptos::prelude::*;

use crate::components::{Icon, SvgIcon};
use crate::config::{
    CLINIC_ADDRESS, CLINIC_EMAIL, CLINIC_NAME, CLINIC_PHONE, FOUNDED_YEAR, LOGO_SRC,
    YEARS_OF_SERVICE,
};
use crate::content::{FOOTER_LINKS, SOCIAL_NETWORKS, anchor_for, social_initial};
use crate::dom;

#[component]
pub fn Footer() -> impl IntoView {
    let copyright = format!("© {} {CLINIC_NAME}. Developed with", dom::current_year());

    view! {
        <footer id="contact" class="py-16">
            <div class="max-w-[95rem] mx-auto px-6 grid md:grid-cols-4 gap-8 mb-12">
                <div class="md:col-span-2">
                    <div class="flex items-center space-x-3 mb-6">
                        <img src=LOGO_SRC alt="logo" class="w-24 object-contain" />
                    </div>
                    <p class="mb-6 max-w-md">
                        {format!(
                            "Providing exceptional veterinary care for over {YEARS_OF_SERVICE} years. \
                             Your pet's health and happiness is our top priority."
                        )}
                    </p>
                    <div class="flex space-x-4">
                        {SOCIAL_NETWORKS
                            .into_iter()
                            .map(|network| {
                                view! {
                                    <button
                                        class="w-10 h-10 bg-gray-800 rounded-lg flex items-center justify-center hover:bg-blue-600 transition-colors"
                                        aria-label=format!("Visit us on {network}")
                                    >
                                        <span class="text-gray-400 text-sm">{social_initial(network)}</span>
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div>
                    <h3 class="text-lg font-semibold mb-6">"Contact Info"</h3>
                    <div class="space-y-4">
                        <ContactLine icon=Icon::Phone text=CLINIC_PHONE />
                        <ContactLine icon=Icon::Mail text=CLINIC_EMAIL />
                        <ContactLine icon=Icon::MapPin text=CLINIC_ADDRESS />
                    </div>
                </div>

                <div>
                    <h3 class="text-lg font-semibold mb-6">"Quick Links"</h3>
                    <div class="space-y-3 text-sm">
                        {FOOTER_LINKS
                            .into_iter()
                            .map(|label| {
                                view! {
                                    <a href=anchor_for(label) class="block hover:text-blue-400 transition">
                                        {label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>

            <div class="border-t border-gray-800 pt-8 max-w-[95rem] mx-auto">
                <div class="flex flex-col md:flex-row justify-between items-center space-y-4 md:space-y-0 text-sm">
                    <p class="flex items-center">
                        {copyright}
                        <SvgIcon icon=Icon::Heart class="w-4 h-4 ml-2 text-blue-400" />
                    </p>
                    <div class="flex items-center space-x-6">
                        <span>{format!("Caring for pets since {FOUNDED_YEAR}")}</span>
                        <span>{format!("{YEARS_OF_SERVICE}+ Years Excellence")}</span>
                    </div>
                </div>
            </div>
        </footer>
    }
}

#[component]
fn ContactLine(icon: Icon, text: &'static str) -> impl IntoView {
    view! {
        <div class="flex items-start space-x-3">
            <SvgIcon icon=icon class="w-4 h-4 mt-1 text-blue-400" />
            <span class="text-sm">{text}</span>
        </div>
    }
}
