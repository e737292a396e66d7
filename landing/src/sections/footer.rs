use leptos::prelude::*;

use crate::content::{copyright_line, BRAND, FOOTER_COLUMNS, LOGO_URL};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-gray-900 text-white py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-7xl mx-auto">
                <div class="grid grid-cols-1 md:grid-cols-4 gap-8">
                    <div>
                        <div class="flex items-center space-x-3 mb-4">
                            <div class="w-8 h-8 bg-teal-600 rounded-full flex items-center justify-center">
                                <img src=LOGO_URL alt=BRAND class="w-6 h-6 object-contain" />
                            </div>
                            <span class="text-lg font-bold">{BRAND}</span>
                        </div>
                        <p class="text-gray-400">"AI-powered career guidance for Singapore professionals."</p>
                    </div>

                    {FOOTER_COLUMNS
                        .iter()
                        .map(|column| {
                            view! {
                                <div>
                                    <h3 class="font-semibold mb-4">{column.heading}</h3>
                                    <ul class="space-y-2 text-gray-400">
                                        {column
                                            .links
                                            .iter()
                                            .map(|link| {
                                                view! {
                                                    <li>
                                                        <a href=link.href class="hover:text-white transition-colors">
                                                            {link.label}
                                                        </a>
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="border-t border-gray-800 mt-8 pt-8 text-center text-gray-400">
                    <p>{copyright_line()}</p>
                </div>
            </div>
        </footer>
    }
}
