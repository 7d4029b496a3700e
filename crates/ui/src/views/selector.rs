use dioxus::prelude::*;

use horoscope_core::{Action, SessionState, ZodiacSign};

/// Prev arrow, current sign card, next arrow. Shared by both variants.
#[component]
pub fn ScrollSelector() -> Element {
    let mut state = use_context::<Signal<SessionState>>();
    let sign = state().selected_sign();

    rsx! {
        div { class: "scroll-selector",
            button {
                class: "scroll-arrow",
                aria_label: "previous sign",
                onclick: move |_| state.set(state().apply(Action::NavigatePrev)),
                "\u{25c0}"
            }
            div { class: "current-zodiac",
                div { class: "zodiac-emoji", "{sign.emoji()}" }
                div { class: "zodiac-name", "{sign.label()}" }
            }
            button {
                class: "scroll-arrow",
                aria_label: "next sign",
                onclick: move |_| state.set(state().apply(Action::NavigateNext)),
                "\u{25b6}"
            }
        }
    }
}

/// One button per sign; the current selection is highlighted. Only the
/// grid variant mounts this.
#[component]
pub fn ZodiacGrid() -> Element {
    let mut state = use_context::<Signal<SessionState>>();
    let selected = state().selected_sign();

    let options = ZodiacSign::ALL.into_iter().map(|sign| {
        let class = if sign == selected {
            "zodiac-option selected"
        } else {
            "zodiac-option"
        };
        rsx! {
            button {
                key: "{sign}",
                class: "{class}",
                onclick: move |_| state.set(state().apply(Action::Pick(sign))),
                div { class: "zodiac-emoji", "{sign.emoji()}" }
                div { class: "zodiac-name", "{sign.label()}" }
            }
        }
    });

    rsx! {
        div { class: "zodiac-grid", {options} }
    }
}
