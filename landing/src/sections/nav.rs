use leptos::prelude::*;

use crate::components::{Icon, SvgIcon};
use crate::config::{LOGO_SRC, page_config};
use crate::content::{NAV_LINKS, anchor_for};
use crate::state::MenuState;

#[component]
pub fn Nav() -> impl IntoView {
    let config = page_config();
    let (menu, set_menu) = signal(MenuState::default());

    let toggle = move |_| {
        set_menu.update(|m| {
            m.toggle();
            log::debug!("mobile menu open: {}", m.is_open());
        })
    };
    let close = move |_| set_menu.update(MenuState::close);

    view! {
        <nav class="fixed top-0 left-0 right-0 bg-white/95 backdrop-blur-sm border border-gray-200 z-50 transition-all duration-300">
            <div class="max-w-[95rem] mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center py-4">
                    <a href="#home" class="flex items-center space-x-3 group cursor-pointer">
                        <img src=LOGO_SRC alt="logo" class="w-24 object-contain" />
                    </a>

                    // Desktop links
                    <div class="hidden md:flex space-x-8">
                        {NAV_LINKS
                            .into_iter()
                            .map(|label| {
                                view! {
                                    <a
                                        href=anchor_for(label)
                                        class="text-gray-700 hover:text-blue-600 font-medium transition-colors duration-300"
                                    >
                                        {label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>

                    <button
                        class="md:hidden p-2 rounded-lg hover:bg-gray-100 transition-colors duration-300"
                        aria-controls="mobile-menu"
                        aria-label=move || menu.get().button_label()
                        aria-expanded=move || menu.get().is_open().to_string()
                        on:click=toggle
                    >
                        {move || {
                            let icon = if menu.get().is_open() { Icon::X } else { Icon::Menu };
                            view! { <SvgIcon icon=icon class="w-6 h-6 text-gray-700" /> }
                        }}
                    </button>
                </div>

                // Mobile drawer; collapsed to zero height while closed
                <div
                    id="mobile-menu"
                    class="grid md:hidden"
                    data-open=move || menu.get().is_open().to_string()
                    inert=move || !menu.get().is_open()
                    style=move || menu.get().drawer_style(config.menu_transition)
                >
                    <div class="overflow-hidden">
                        <div class="flex flex-col space-y-4 pt-4 border-t border-gray-100 pb-4">
                            {NAV_LINKS
                                .into_iter()
                                .map(|label| {
                                    view! {
                                        <a
                                            href=anchor_for(label)
                                            class="text-gray-700 hover:text-blue-600 py-2 px-4 rounded-lg hover:bg-gray-50 transition-all duration-300"
                                            on:click=close
                                        >
                                            {label}
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </nav>
    }
}
