mod session;
mod sign;

pub use session::{Action, Page, SessionState};
pub use sign::{ParseSignError, ZodiacSign};
