use dioxus::prelude::*;

use horoscope_core::{Action, SessionState};

use crate::context::AppContext;
use crate::views::{ScrollSelector, ZodiacGrid};
use crate::vm::{
    FORMAT_HINT, ImagePanelVm, PLACEHOLDER_IMAGE_URL, format_today, map_image_panel,
    map_source_link,
};

#[component]
pub fn HoroscopeView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut state = use_context::<Signal<SessionState>>();

    let horoscope = ctx.horoscope();
    let sign = state().selected_sign();

    // Full rescan per render: a file dropped next to the binary shows up
    // on the next action.
    let index = horoscope.image_index();
    let panel = map_image_panel(sign, index.get(sign));
    let source = map_source_link(horoscope.reference_url(sign));
    let today = format_today(horoscope.clock().now());
    let grid = horoscope.variant().has_grid_selector();
    let sparkle = horoscope.sparkle_roll();

    let selector_heading = if grid {
        "\u{1f31f} Select Your Zodiac Sign"
    } else {
        "\u{1f31f} Select Your Zodiac"
    };

    rsx! {
        div { class: "header-row",
            div { class: "header-glass",
                div { class: "kicker", "Sustainable Public Procurement Horoscope" }
                h1 { "\u{1f52e} Zodiac Wheel" }
                div { class: "small", "Spin through the stars to discover your destiny" }
            }
            div { class: "header-glass",
                div { class: "kicker", "Today" }
                h3 { "{today}" }
                div { class: "small", "May the stars be ever in your favor \u{2728}" }
            }
        }

        div { class: "center-container",
            button {
                class: "footer-button",
                onclick: move |_| state.set(state().apply(Action::LearnMore)),
                "\u{1f4d6} Click here to learn more about SourcingHaus"
            }
        }

        h3 { class: "selector-heading", "{selector_heading}" }
        if grid {
            ZodiacGrid {}
        }
        ScrollSelector {}

        div { class: "content-panel",
            match panel {
                ImagePanelVm::Local { data_uri, caption } => rsx! {
                    div { class: "horoscope-image-container",
                        figure { class: "horoscope-image",
                            img { src: "{data_uri}", alt: "{sign.label()}" }
                            figcaption { "{caption}" }
                        }
                    }
                },
                ImagePanelVm::Placeholder { warning } => rsx! {
                    {warning.map(|warning| rsx! {
                        p { class: "warning", "{warning}" }
                        p { class: "info", "{FORMAT_HINT}" }
                    })}
                    h3 { "\u{1f5bc}\u{fe0f} Your horoscope will appear here" }
                    p { class: "small", "Add the image file and pick your sign to begin \u{2728}" }
                    div { class: "horoscope-image-container",
                        figure { class: "horoscope-image",
                            img { src: PLACEHOLDER_IMAGE_URL, alt: "placeholder" }
                            figcaption { "(Placeholder image loaded from Wikipedia)" }
                        }
                    }
                },
            }

            {source.map(|link| rsx! {
                div { class: "source-link",
                    div { class: "source-link-lead", "Learn more about sustainable procurement:" }
                    a { href: "{link.href}", target: "_blank", "{link.href}" }
                }
            })}
        }

        div { class: "footer",
            "Discover your sustainable procurement destiny through the stars \u{2728}"
        }

        if sparkle {
            div { class: "snow", aria_hidden: "true", "\u{2744}\u{fe0f}" }
        }
    }
}
