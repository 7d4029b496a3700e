mod end_message;
mod horoscope;
mod landing;
mod selector;

#[cfg(test)]
pub mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use end_message::EndMessageView;
pub use horoscope::HoroscopeView;
pub use landing::LandingView;
pub use selector::{ScrollSelector, ZodiacGrid};
