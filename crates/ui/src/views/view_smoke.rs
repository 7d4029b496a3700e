use std::fs;

use horoscope_core::{Action, SessionState, ZodiacSign};
use services::UiVariant;

use super::test_harness::{ViewKind, setup_view_harness, setup_view_harness_in};
use crate::vm::PLACEHOLDER_IMAGE_URL;

fn main_state() -> SessionState {
    SessionState::new().apply(Action::Enter)
}

#[test]
fn landing_smoke_renders_title_button_and_missing_intro_warning() {
    let mut harness = setup_view_harness(
        ViewKind::Landing,
        UiVariant::Desktop,
        SessionState::new(),
    );
    harness.rebuild();
    let html = harness.render();

    assert!(
        html.contains("Sustainable Public Procurement Horoscope"),
        "missing title in {html}"
    );
    assert!(
        html.contains("Enter the Horoscope Realm"),
        "missing enter button in {html}"
    );
    // Substrings avoid the quote characters, which SSR may escape.
    assert!(
        html.contains("Intro image") && html.contains("intro.jpeg") && html.contains("not found"),
        "missing intro warning in {html}"
    );
}

#[test]
fn landing_smoke_renders_intro_image_when_present() {
    let images = tempfile::tempdir().unwrap();
    fs::write(images.path().join("intro.jpeg"), b"intro bytes").unwrap();

    let mut harness =
        setup_view_harness_in(ViewKind::Landing, UiVariant::Desktop, SessionState::new(), images);
    harness.rebuild();
    let html = harness.render();

    assert!(
        html.contains("data:image/jpeg;base64,"),
        "missing inline intro image in {html}"
    );
    assert!(
        html.contains("Welcome to your sustainable journey"),
        "missing intro caption in {html}"
    );
    assert!(!html.contains("not found"), "unexpected warning in {html}");
}

#[test]
fn main_smoke_renders_placeholder_and_source_link_without_local_image() {
    let mut harness = setup_view_harness(ViewKind::Main, UiVariant::Desktop, main_state());
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Zodiac Wheel"), "missing heading in {html}");
    assert!(
        html.contains("Aug 01, 2025"),
        "missing fixed-clock date in {html}"
    );
    assert!(
        html.contains("Your horoscope will appear here"),
        "missing placeholder heading in {html}"
    );
    assert!(
        html.contains(PLACEHOLDER_IMAGE_URL),
        "missing placeholder image in {html}"
    );
    // Aries is selected by default; the desktop table links it to the
    // World Bank press release.
    assert!(
        html.contains("Learn more about sustainable procurement:"),
        "missing source lead in {html}"
    );
    assert!(
        html.contains("worldbank.org"),
        "missing aries source link in {html}"
    );
}

#[test]
fn main_smoke_renders_local_image_with_caption() {
    let images = tempfile::tempdir().unwrap();
    fs::write(images.path().join("aries.png"), b"aries bytes").unwrap();

    let mut harness =
        setup_view_harness_in(ViewKind::Main, UiVariant::Desktop, main_state(), images);
    harness.rebuild();
    let html = harness.render();

    assert!(
        html.contains("data:image/png;base64,"),
        "missing inline sign image in {html}"
    );
    assert!(
        html.contains("The stars have spoken for Aries"),
        "missing caption in {html}"
    );
    assert!(
        !html.contains("Your horoscope will appear here"),
        "placeholder should be absent in {html}"
    );
}

#[test]
fn main_smoke_selected_sign_drives_the_panel() {
    let images = tempfile::tempdir().unwrap();
    fs::write(images.path().join("scorpio.webp"), b"scorpio bytes").unwrap();

    let state = main_state().apply(Action::Pick(ZodiacSign::Scorpio));
    let mut harness = setup_view_harness_in(ViewKind::Main, UiVariant::Mobile, state, images);
    harness.rebuild();
    let html = harness.render();

    assert!(
        html.contains("The stars have spoken for Scorpio"),
        "missing scorpio caption in {html}"
    );
    // The mobile table links scorpio to the UN energy plan.
    assert!(
        html.contains("un.org"),
        "missing mobile scorpio source in {html}"
    );
}

#[test]
fn main_smoke_grid_variant_renders_all_twelve_options() {
    let mut harness = setup_view_harness(ViewKind::Main, UiVariant::Mobile, main_state());
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("zodiac-grid"), "missing grid in {html}");
    for sign in ZodiacSign::ALL {
        assert!(html.contains(sign.label()), "missing {sign} in {html}");
    }
    assert!(
        html.contains("zodiac-option selected"),
        "missing selection highlight in {html}"
    );
}

#[test]
fn main_smoke_desktop_variant_has_no_grid() {
    let mut harness = setup_view_harness(ViewKind::Main, UiVariant::Desktop, main_state());
    harness.rebuild();
    let html = harness.render();

    assert!(!html.contains("zodiac-grid"), "unexpected grid in {html}");
    assert!(
        html.contains("scroll-selector"),
        "missing scroll selector in {html}"
    );
}

#[test]
fn end_smoke_warns_when_end_image_is_missing() {
    let state = main_state().apply(Action::LearnMore);
    let mut harness = setup_view_harness(ViewKind::End, UiVariant::Desktop, state);
    harness.rebuild();
    let html = harness.render();

    assert!(
        html.contains("End image") && html.contains("end.jpeg") && html.contains("not found"),
        "missing end warning in {html}"
    );
    assert!(
        html.contains("Return to Horoscope"),
        "missing return button in {html}"
    );
}

#[test]
fn end_smoke_renders_end_image_when_present() {
    let images = tempfile::tempdir().unwrap();
    fs::write(images.path().join("end.jpeg"), b"end bytes").unwrap();

    let state = main_state().apply(Action::LearnMore);
    let mut harness = setup_view_harness_in(ViewKind::End, UiVariant::Desktop, state, images);
    harness.rebuild();
    let html = harness.render();

    assert!(
        html.contains("A special message for sustainable procurement"),
        "missing end caption in {html}"
    );
    assert!(!html.contains("not found"), "unexpected warning in {html}");
}
