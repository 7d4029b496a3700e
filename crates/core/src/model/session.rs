use serde::{Deserialize, Serialize};

use crate::model::ZodiacSign;

/// Which of the three pages the widget shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Landing,
    Main,
    EndMessage,
}

/// A discrete user action. Each one is followed by a full re-render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Leave the landing page for the main view.
    Enter,
    /// Jump from the main view to the end-message page.
    LearnMore,
    /// Come back from the end-message page.
    Return,
    /// Step the selection one sign back, wrapping.
    NavigatePrev,
    /// Step the selection one sign forward, wrapping.
    NavigateNext,
    /// Select a sign directly (grid selector only).
    Pick(ZodiacSign),
}

/// In-memory interaction state for one run of the widget.
///
/// The record is immutable: [`SessionState::apply`] returns the successor
/// state and the host render loop owns the current value. Nothing here is
/// persisted across runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    started: bool,
    selected_sign: ZodiacSign,
    show_end_page: bool,
}

impl SessionState {
    /// A fresh session: landing page, Aries selected.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            started: false,
            selected_sign: ZodiacSign::first(),
            show_end_page: false,
        }
    }

    #[must_use]
    pub const fn started(self) -> bool {
        self.started
    }

    #[must_use]
    pub const fn selected_sign(self) -> ZodiacSign {
        self.selected_sign
    }

    #[must_use]
    pub const fn show_end_page(self) -> bool {
        self.show_end_page
    }

    /// The page this state renders.
    #[must_use]
    pub const fn page(self) -> Page {
        if !self.started {
            Page::Landing
        } else if self.show_end_page {
            Page::EndMessage
        } else {
            Page::Main
        }
    }

    /// Pure transition function.
    ///
    /// Actions foreign to the current page leave the state unchanged, so
    /// the machine cycles indefinitely with no failure path.
    #[must_use]
    pub fn apply(self, action: Action) -> Self {
        match (self.page(), action) {
            (Page::Landing, Action::Enter) => Self {
                started: true,
                show_end_page: false,
                ..self
            },
            (Page::Main, Action::LearnMore) => Self {
                show_end_page: true,
                ..self
            },
            (Page::EndMessage, Action::Return) => Self {
                show_end_page: false,
                ..self
            },
            (Page::Main, Action::NavigatePrev) => Self {
                selected_sign: self.selected_sign.prev(),
                ..self
            },
            (Page::Main, Action::NavigateNext) => Self {
                selected_sign: self.selected_sign.next(),
                ..self
            },
            (Page::Main, Action::Pick(sign)) => Self {
                selected_sign: sign,
                ..self
            },
            _ => self,
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_session_renders_landing_with_aries() {
        let state = SessionState::new();
        assert!(!state.started());
        assert!(!state.show_end_page());
        assert_eq!(state.selected_sign(), ZodiacSign::Aries);
        assert_eq!(state.page(), Page::Landing);
    }

    #[test]
    fn enter_moves_to_main() {
        let state = SessionState::new().apply(Action::Enter);
        assert!(state.started());
        assert!(!state.show_end_page());
        assert_eq!(state.page(), Page::Main);
        assert_eq!(state.selected_sign(), ZodiacSign::Aries);
    }

    #[test]
    fn learn_more_and_return_round_trip() {
        let main = SessionState::new().apply(Action::Enter);
        let picked = main.apply(Action::Pick(ZodiacSign::Scorpio));

        let end = picked.apply(Action::LearnMore);
        assert_eq!(end.page(), Page::EndMessage);

        let back = end.apply(Action::Return);
        assert_eq!(back.page(), Page::Main);
        assert_eq!(back.selected_sign(), ZodiacSign::Scorpio);
    }

    #[test]
    fn navigation_wraps_both_directions() {
        let main = SessionState::new().apply(Action::Enter);

        let at_pisces = main.apply(Action::Pick(ZodiacSign::Pisces));
        assert_eq!(
            at_pisces.apply(Action::NavigateNext).selected_sign(),
            ZodiacSign::Aries
        );

        assert_eq!(
            main.apply(Action::NavigatePrev).selected_sign(),
            ZodiacSign::Pisces
        );
    }

    #[test]
    fn twelve_next_actions_return_to_start() {
        let mut state = SessionState::new().apply(Action::Enter);
        let start = state.selected_sign();
        for _ in 0..12 {
            state = state.apply(Action::NavigateNext);
        }
        assert_eq!(state.selected_sign(), start);
    }

    #[test]
    fn pick_overrides_any_selection() {
        let state = SessionState::new()
            .apply(Action::Enter)
            .apply(Action::NavigateNext)
            .apply(Action::Pick(ZodiacSign::Libra));
        assert_eq!(state.selected_sign(), ZodiacSign::Libra);
    }

    #[test]
    fn foreign_actions_are_no_ops() {
        let landing = SessionState::new();
        assert_eq!(landing.apply(Action::NavigateNext), landing);
        assert_eq!(landing.apply(Action::Return), landing);

        let main = landing.apply(Action::Enter);
        assert_eq!(main.apply(Action::Enter), main);
        assert_eq!(main.apply(Action::Return), main);

        let end = main.apply(Action::LearnMore);
        assert_eq!(end.apply(Action::NavigatePrev), end);
        assert_eq!(end.apply(Action::LearnMore), end);
    }
}
