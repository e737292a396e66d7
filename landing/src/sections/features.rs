use leptos::prelude::*;

use super::icons::{Icon, IconPaths};
use crate::content::FEATURES;

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id="features" class="py-20 px-4 sm:px-6 lg:px-8 bg-white">
            <div class="max-w-7xl mx-auto">
                <div class="text-center mb-16">
                    <h2 class="text-3xl md:text-4xl font-bold text-gray-900 mb-4">
                        "Powered by Advanced AI Technology"
                    </h2>
                    <p class="text-xl text-gray-600 max-w-3xl mx-auto">
                        "Our RAG-based system combines real-time market data with personalized insights "
                        "to guide your career decisions with unprecedented accuracy."
                    </p>
                </div>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-8">
                    {FEATURES
                        .iter()
                        .map(|feature| {
                            view! {
                                <FeatureCard
                                    icon=feature.icon
                                    title=feature.title
                                    description=feature.description
                                />
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(icon: IconPaths, title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <div class="bg-gradient-to-br from-teal-50 to-slate-50 rounded-xl p-6 hover:shadow-lg transition-shadow">
            <div class="mb-4">
                <Icon paths=icon class="w-8 h-8 text-teal-600" />
            </div>
            <h3 class="text-xl font-semibold text-gray-900 mb-3">{title}</h3>
            <p class="text-gray-600">{description}</p>
        </div>
    }
}
