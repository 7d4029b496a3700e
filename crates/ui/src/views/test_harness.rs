use std::sync::Arc;

use dioxus::prelude::*;
use tempfile::TempDir;

use horoscope_core::SessionState;
use horoscope_core::time::fixed_clock;
use services::{HoroscopeService, Sparkle, UiVariant};

use crate::context::{UiApp, build_app_context};
use crate::views::{EndMessageView, HoroscopeView, LandingView};

struct TestApp {
    horoscope: Arc<HoroscopeService>,
}

impl UiApp for TestApp {
    fn horoscope(&self) -> Arc<HoroscopeService> {
        Arc::clone(&self.horoscope)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Landing,
    Main,
    End,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    state: SessionState,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewHarnessRoot(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| Signal::new(props.state));

    match props.view {
        ViewKind::Landing => rsx! { LandingView {} },
        ViewKind::Main => rsx! { HoroscopeView {} },
        ViewKind::End => rsx! { EndMessageView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub images: TempDir,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

/// Build a harness around an empty temp images directory.
pub fn setup_view_harness(view: ViewKind, variant: UiVariant, state: SessionState) -> ViewHarness {
    let images = tempfile::tempdir().expect("create temp images dir");
    setup_view_harness_in(view, variant, state, images)
}

/// Build a harness around a prepared images directory.
///
/// The sparkle source is seeded so renders are reproducible; tests must
/// not assert on the snow effect either way.
pub fn setup_view_harness_in(
    view: ViewKind,
    variant: UiVariant,
    state: SessionState,
    images: TempDir,
) -> ViewHarness {
    let service = HoroscopeService::new(images.path(), variant, fixed_clock())
        .with_sparkle(Sparkle::seeded(0));
    let app = Arc::new(TestApp {
        horoscope: Arc::new(service),
    });

    let dom = VirtualDom::new_with_props(ViewHarnessRoot, ViewHarnessProps { app, view, state });

    ViewHarness { dom, images }
}
