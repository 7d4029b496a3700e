#![allow(non_snake_case)]

use std::sync::Arc;

use services::{Clock, HoroscopeService, UiVariant};
use ui::{App, UiApp, build_app_context};

/// Bare dev launcher: current directory, desktop variant, system clock.
/// The real binary with configuration lives in `crates/app`.
struct DevApp {
    horoscope: Arc<HoroscopeService>,
}

impl UiApp for DevApp {
    fn horoscope(&self) -> Arc<HoroscopeService> {
        Arc::clone(&self.horoscope)
    }
}

fn main() {
    let app: Arc<dyn UiApp> = Arc::new(DevApp {
        horoscope: Arc::new(HoroscopeService::new(
            ".",
            UiVariant::Desktop,
            Clock::default_clock(),
        )),
    });

    dioxus::LaunchBuilder::desktop()
        .with_context(build_app_context(&app))
        .launch(App);
}
