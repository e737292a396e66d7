//! Transient view state owned by the landing page.
//!
//! Two values only: whether the mobile menu is open and what the search
//! field currently holds. Neither is persisted; re-mounting the page starts
//! from the defaults again.

use leptos::prelude::*;

/// Visibility of the mobile navigation panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    /// The single transition: Closed becomes Open and Open becomes Closed.
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    /// Value for the toggle button's `aria-expanded` attribute.
    pub fn aria_expanded(self) -> &'static str {
        if self.is_open() { "true" } else { "false" }
    }
}

/// Reactive handles for the page's view state.
///
/// Cheap to copy; every copy points at the same signals, so `Nav` and `Hero`
/// observe the same values `LandingPage` created.
#[derive(Clone, Copy, Debug)]
pub struct PageState {
    pub menu: RwSignal<MenuState>,
    pub query: RwSignal<String>,
}

impl PageState {
    pub fn new() -> Self {
        Self {
            menu: RwSignal::new(MenuState::default()),
            query: RwSignal::new(String::new()),
        }
    }

    pub fn toggle_menu(&self) {
        self.menu.update(|menu| {
            let next = menu.toggle();
            tracing::trace!(from = ?*menu, to = ?next, "mobile menu toggled");
            *menu = next;
        });
    }

    /// Overwrites the stored query as-is: no trimming, no validation.
    pub fn set_query(&self, next: String) {
        self.query.set(next);
    }

    /// Current query without subscribing the caller to future changes.
    pub fn query_snapshot(&self) -> String {
        self.query.get_untracked()
    }

    pub fn menu_snapshot(&self) -> MenuState {
        self.menu.get_untracked()
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;
    use pretty_assertions::assert_eq;

    fn with_owner<T>(f: impl FnOnce() -> T) -> T {
        Owner::new().with(f)
    }

    #[test]
    fn menu_starts_closed() {
        assert_eq!(MenuState::default(), MenuState::Closed);
        assert!(!MenuState::default().is_open());
    }

    #[test]
    fn toggle_flips_both_ways() {
        assert_eq!(MenuState::Closed.toggle(), MenuState::Open);
        assert_eq!(MenuState::Open.toggle(), MenuState::Closed);
    }

    #[test]
    fn toggle_parity_decides_visibility() {
        for presses in 0..64usize {
            let state = (0..presses).fold(MenuState::Closed, |s, _| s.toggle());
            assert_eq!(state.is_open(), presses % 2 == 1, "after {presses} presses");
        }
    }

    #[test]
    fn aria_expanded_mirrors_state() {
        assert_eq!(MenuState::Closed.aria_expanded(), "false");
        assert_eq!(MenuState::Open.aria_expanded(), "true");
    }

    #[test]
    fn page_state_initial_values() {
        with_owner(|| {
            let state = PageState::new();
            assert_eq!(state.menu_snapshot(), MenuState::Closed);
            assert_eq!(state.query_snapshot(), "");
        });
    }

    #[test]
    fn open_then_close_scenario() {
        with_owner(|| {
            let state = PageState::new();
            assert!(!state.menu_snapshot().is_open());
            state.toggle_menu();
            assert!(state.menu_snapshot().is_open());
            state.toggle_menu();
            assert!(!state.menu_snapshot().is_open());
        });
    }

    #[test]
    fn copies_share_signals() {
        with_owner(|| {
            let state = PageState::new();
            let nav_copy = state;
            nav_copy.toggle_menu();
            assert_eq!(state.menu_snapshot(), MenuState::Open);
        });
    }

    #[test]
    fn typing_accumulates_characters() {
        with_owner(|| {
            let state = PageState::new();
            let mut typed = String::new();
            for ch in "software engineer salary".chars() {
                typed.push(ch);
                state.set_query(typed.clone());
            }
            assert_eq!(state.query_snapshot(), "software engineer salary");
        });
    }

    #[test]
    fn query_is_stored_verbatim() {
        with_owner(|| {
            let state = PageState::new();
            state.set_query("  data analyst  ".into());
            assert_eq!(state.query_snapshot(), "  data analyst  ");
            state.set_query(String::new());
            assert_eq!(state.query_snapshot(), "");
        });
    }
}
