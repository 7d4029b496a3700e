use dioxus::prelude::*;

use horoscope_core::{Action, SessionState};
use services::FixedAsset;

use crate::context::AppContext;
use crate::vm::{FixedImageVm, map_fixed_image};

#[component]
pub fn LandingView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut state = use_context::<Signal<SessionState>>();

    let horoscope = ctx.horoscope();
    let intro_path = horoscope.fixed_asset(FixedAsset::Intro);
    let intro = map_fixed_image(FixedAsset::Intro, intro_path.as_deref());

    rsx! {
        div { class: "landing-container",
            div { class: "landing-title",
                "\u{2728} Sustainable Public Procurement Horoscope \u{2728}"
            }
            div { class: "landing-subtitle", "Discover what the stars have in store for you" }
        }

        div { class: "center-container",
            button {
                class: "landing-button",
                onclick: move |_| state.set(state().apply(Action::Enter)),
                "\u{1f680} Enter the Horoscope Realm"
            }
        }

        match intro {
            FixedImageVm::Ready { data_uri, caption } => rsx! {
                div { class: "landing-image-container",
                    figure { class: "landing-image",
                        img { src: "{data_uri}", alt: "intro" }
                        figcaption { "{caption}" }
                    }
                }
            },
            FixedImageVm::Missing { warning, hint } => rsx! {
                p { class: "warning", "{warning}" }
                {hint.map(|hint| rsx! {
                    p { class: "info", "{hint}" }
                })}
            },
        }
    }
}
