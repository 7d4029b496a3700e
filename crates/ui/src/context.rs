use std::sync::Arc;

use services::HoroscopeService;

/// What the composition root must hand the UI.
pub trait UiApp: Send + Sync {
    fn horoscope(&self) -> Arc<HoroscopeService>;
}

#[derive(Clone)]
pub struct AppContext {
    horoscope: Arc<HoroscopeService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            horoscope: app.horoscope(),
        }
    }

    #[must_use]
    pub fn horoscope(&self) -> Arc<HoroscopeService> {
        Arc::clone(&self.horoscope)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
