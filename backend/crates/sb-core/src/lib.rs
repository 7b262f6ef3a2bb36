pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::push_registration::PushRegistration;
pub use models::schedule::Schedule;
pub use models::user::User;

#[cfg(test)]
mod tests;
