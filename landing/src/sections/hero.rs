use std::rc::Rc;

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::icons::{Icon, ICON_SEARCH};
use crate::content::{SEARCH_PLACEHOLDER, STATS};
use crate::search::{self, AnswerService};
use crate::state::PageState;

#[component]
pub fn Hero(state: PageState, answers: Option<Rc<dyn AnswerService>>) -> impl IntoView {
    view! {
        <section class="relative py-20 px-4 sm:px-6 lg:px-8">
            <div class="max-w-7xl mx-auto">
                <div class="text-center">
                    <h1 class="text-4xl md:text-6xl font-bold text-gray-900 mb-6">
                        "Navigate Your Career Journey with "
                        <span class="text-teal-600">"AI Intelligence"</span>
                    </h1>
                    <p class="text-xl text-gray-600 mb-8 max-w-3xl mx-auto">
                        "Discover personalized career paths, market insights, and growth opportunities "
                        "tailored specifically for Singapore's dynamic job landscape."
                    </p>
                    <SearchForm state=state answers=answers />
                    <QuickStats />
                </div>
            </div>
        </section>
    }
}

#[component]
fn SearchForm(state: PageState, answers: Option<Rc<dyn AnswerService>>) -> impl IntoView {
    let query = state.query;
    let answers = StoredValue::new_local(answers);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let current = state.query_snapshot();
        let dispatch = answers.with_value(|service| search::submit(&current, service.as_deref()));
        if let Some(dispatch) = dispatch {
            spawn_local(async move {
                let outcome = dispatch.await;
                search::report_outcome(&outcome);
            });
        }
    };

    view! {
        <form id="search-form" on:submit=on_submit class="max-w-2xl mx-auto mb-12">
            <div class="relative">
                <Icon
                    paths=ICON_SEARCH
                    class="absolute left-4 top-1/2 transform -translate-y-1/2 text-gray-400 w-5 h-5"
                />
                <input
                    id="search-input"
                    type="text"
                    placeholder=SEARCH_PLACEHOLDER
                    prop:value=move || query.get()
                    on:input=move |ev| state.set_query(event_target_value(&ev))
                    class="w-full pl-12 pr-4 py-4 text-lg border border-gray-200 rounded-xl focus:ring-2 focus:ring-teal-500 focus:border-transparent shadow-lg"
                />
                <button
                    type="submit"
                    class="absolute right-2 top-1/2 transform -translate-y-1/2 bg-teal-600 text-white px-6 py-2 rounded-lg hover:bg-teal-700 transition-colors"
                >
                    "Search"
                </button>
            </div>
        </form>
    }
}

#[component]
fn QuickStats() -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 md:grid-cols-3 gap-8 max-w-4xl mx-auto">
            {STATS
                .iter()
                .map(|stat| {
                    view! {
                        <div class="bg-white/60 backdrop-blur-sm rounded-xl p-6 border border-teal-100">
                            <div class="text-3xl font-bold text-teal-600 mb-2">{stat.value}</div>
                            <div class="text-gray-600">{stat.label}</div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
