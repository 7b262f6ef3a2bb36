pub mod push_registration;
pub mod schedule;
pub mod user;
