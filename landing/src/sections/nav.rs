use leptos::prelude::*;

use super::icons::{Icon, ICON_MENU, ICON_X};
use crate::content::{BRAND, LOGO_URL, NAV_LINKS};
use crate::state::PageState;

#[component]
pub fn Nav(state: PageState) -> impl IntoView {
    let menu = state.menu;

    view! {
        <nav class="bg-white/80 backdrop-blur-md border-b border-teal-100 sticky top-0 z-50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <Brand />

                    <div class="hidden md:flex items-center space-x-8">
                        {NAV_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <a href=link.href class="text-gray-700 hover:text-teal-600 transition-colors">
                                        {link.label}
                                    </a>
                                }
                            })
                            .collect_view()}
                        <GetStarted extra="" />
                    </div>

                    <button
                        id="menu-toggle"
                        class="md:hidden p-2"
                        aria-label="Toggle navigation"
                        aria-controls="mobile-nav"
                        aria-expanded=move || menu.get().aria_expanded()
                        on:click=move |_| state.toggle_menu()
                    >
                        <Show
                            when=move || menu.get().is_open()
                            fallback=|| view! { <Icon paths=ICON_MENU /> }
                        >
                            <Icon paths=ICON_X />
                        </Show>
                    </button>
                </div>

                // Mobile panel, only in the DOM while open
                <Show when=move || menu.get().is_open()>
                    <div id="mobile-nav" class="md:hidden py-4 border-t border-teal-100">
                        <div class="flex flex-col space-y-3">
                            {NAV_LINKS
                                .iter()
                                .map(|link| {
                                    view! {
                                        <a href=link.href class="text-gray-700 hover:text-teal-600 transition-colors px-2 py-1">
                                            {link.label}
                                        </a>
                                    }
                                })
                                .collect_view()}
                            <GetStarted extra="mx-2 mt-2" />
                        </div>
                    </div>
                </Show>
            </div>
        </nav>
    }
}

#[component]
fn Brand() -> impl IntoView {
    view! {
        <div class="flex items-center space-x-3">
            <div class="w-10 h-10 bg-teal-100 rounded-full flex items-center justify-center">
                <img src=LOGO_URL alt=BRAND class="w-8 h-8 object-contain" />
            </div>
            <span class="text-xl font-bold text-gray-900">{BRAND}</span>
        </div>
    }
}

const GET_STARTED_CLASS: &str =
    "bg-teal-600 text-white px-4 py-2 rounded-lg hover:bg-teal-700 transition-colors";

#[component]
fn GetStarted(extra: &'static str) -> impl IntoView {
    let class = if extra.is_empty() {
        GET_STARTED_CLASS.to_string()
    } else {
        format!("{GET_STARTED_CLASS} {extra}")
    };
    view! { <button class=class>"Get Started"</button> }
}
