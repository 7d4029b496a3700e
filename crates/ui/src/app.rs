use dioxus::prelude::*;

use horoscope_core::{Page, SessionState};

use crate::views::{EndMessageView, HoroscopeView, LandingView};

#[component]
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        // Stable OS/window title. Per-page headings live in the views.
        document::Title { "Zodiac Wheel" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                PageRouter {}
            }
        }
    }
}

/// Owns the session record for the life of the run and picks the page.
///
/// Views read and replace the record through the shared signal; every
/// replacement triggers the next full render, including a fresh image
/// scan.
#[component]
fn PageRouter() -> Element {
    let state = use_context_provider(|| Signal::new(SessionState::new()));

    match state().page() {
        Page::Landing => rsx! { LandingView {} },
        Page::Main => rsx! { HoroscopeView {} },
        Page::EndMessage => rsx! { EndMessageView {} },
    }
}
