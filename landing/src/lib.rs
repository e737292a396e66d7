//! # career-atlas-landing
//!
//! Landing page for SG Career Atlas, rendered client-side with Leptos 0.8.
//!
//! The page is static marketing content plus two pieces of view state: the
//! mobile menu toggle and the hero search field. Submitting the search form
//! records the query and, when an [`search::AnswerService`] has been passed
//! to [`LandingPage`], dispatches it.
//!
//! ## Modules
//!
//! - [`state`] - menu state machine and the page's signals
//! - [`search`] - submit handling and the answering-service extension point
//! - [`content`] - every string and link the page shows
//! - [`logging`] - console logging setup
//! - [`sections`] - the page's UI components

pub mod content;
pub mod logging;
pub mod search;
pub mod sections;
pub mod state;

use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use search::AnswerService;
use sections::*;
use state::PageState;

/// Root component. Owns the view state for its lifetime.
#[component]
pub fn LandingPage(
    /// Service that answers submitted queries; none by default
    #[prop(optional)]
    answers: Option<Rc<dyn AnswerService>>,
) -> impl IntoView {
    let state = PageState::new();
    tracing::debug!(answering = answers.is_some(), "landing page mounted");

    view! {
        <div class="min-h-screen bg-gradient-to-br from-slate-50 to-teal-50">
            <Nav state=state />
            <main>
                <Hero state=state answers=answers />
                <Features />
                <CallToAction />
            </main>
            <Footer />
        </div>
    }
}

/// Sets up panic reporting and logging, then mounts the page into `<body>`.
///
/// Exported for hosts that load the crate as a library; the binary calls it
/// too.
#[wasm_bindgen]
pub fn mount() {
    console_error_panic_hook::set_once();

    let config = logging::LogConfig::default();
    if let Err(err) = logging::init(&config) {
        web_sys::console::warn_1(&JsValue::from_str(&format!("logger not installed: {err}")));
    }
    tracing::info!(level = %config.level, "starting SG Career Atlas landing");

    leptos::mount::mount_to_body(|| view! { <LandingPage /> });
}
