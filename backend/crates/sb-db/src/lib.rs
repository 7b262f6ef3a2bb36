pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::database::Database;
pub use error::{DbError, Result};
pub use repositories::push_token_repository::PushTokenRepository;
pub use repositories::schedule_repository::ScheduleRepository;
pub use repositories::user_repository::UserRepository;
