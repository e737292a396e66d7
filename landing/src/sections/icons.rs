//! Inline SVG icons (Lucide outline set, 24x24 viewBox).
//!
//! Each icon is a list of path `d` strings drawn with a 2px round stroke.
//! Circles are expressed as two arcs so every shape fits the same `<path>`.

use leptos::prelude::*;

/// Path data for one icon.
pub type IconPaths = &'static [&'static str];

pub const ICON_SEARCH: IconPaths = &["M19 11a8 8 0 1 1-16 0 8 8 0 0 1 16 0z", "m21 21-4.3-4.3"];

pub const ICON_MENU: IconPaths = &["M4 6h16", "M4 12h16", "M4 18h16"];

pub const ICON_X: IconPaths = &["M18 6 6 18", "m6 6 12 12"];

pub const ICON_COMPASS: IconPaths = &[
    "M22 12a10 10 0 1 1-20 0 10 10 0 0 1 20 0z",
    "m16.24 7.76-2.12 6.36-6.36 2.12 2.12-6.36z",
];

pub const ICON_TRENDING_UP: IconPaths = &["M22 7 13.5 15.5 8.5 10.5 2 17", "M16 7h6v6"];

pub const ICON_BOOK_OPEN: IconPaths = &[
    "M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2z",
    "M22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z",
];

pub const ICON_USERS: IconPaths = &[
    "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
    "M13 7a4 4 0 1 1-8 0 4 4 0 0 1 8 0z",
    "M22 21v-2a4 4 0 0 0-3-3.87",
    "M16 3.13a4 4 0 0 1 0 7.75",
];

/// Renders an outline icon.
///
/// ```rust,ignore
/// view! { <Icon paths=ICON_SEARCH class="w-5 h-5 text-gray-400" /> }
/// ```
#[component]
pub fn Icon(
    /// Path data, one entry per `<path>` element
    paths: IconPaths,
    /// CSS classes (size and color come from Tailwind utilities)
    #[prop(default = "w-6 h-6")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            class=class
        >
            {paths.iter().map(|d| view! { <path d=*d></path> }).collect_view()}
        </svg>
    }
}
