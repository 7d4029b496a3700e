use dioxus::prelude::*;

use horoscope_core::{Action, SessionState};
use services::FixedAsset;

use crate::context::AppContext;
use crate::vm::{FixedImageVm, map_fixed_image};

#[component]
pub fn EndMessageView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut state = use_context::<Signal<SessionState>>();

    let horoscope = ctx.horoscope();
    let end_path = horoscope.fixed_asset(FixedAsset::End);
    let end = map_fixed_image(FixedAsset::End, end_path.as_deref());

    rsx! {
        div { class: "landing-container",
            div { class: "landing-title",
                "\u{2728} Sustainable Public Procurement Message \u{2728}"
            }
            div { class: "landing-subtitle", "A special message from the stars" }
        }

        match end {
            FixedImageVm::Ready { data_uri, caption } => rsx! {
                div { class: "end-image-container",
                    figure { class: "end-image",
                        img { src: "{data_uri}", alt: "end message" }
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

        div { class: "center-container",
            button {
                class: "footer-button",
                onclick: move |_| state.set(state().apply(Action::Return)),
                "\u{1f519} Return to Horoscope"
            }
        }
    }
}
