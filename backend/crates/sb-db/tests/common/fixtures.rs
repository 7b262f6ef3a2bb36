use sb_core::{Schedule, User};

use uuid::Uuid;

/// Creates a test User with sensible defaults
pub fn create_test_identity(email: &str) -> User {
    User::new(
        email.to_string(),
        "$argon2id$v=19$m=4096,t=3,p=1$c2FsdA$aGFzaA".to_string(),
        Some("Test User".to_string()),
    )
}

/// Creates a test Schedule with sensible defaults
pub fn create_test_schedule(owner_id: Uuid) -> Schedule {
    Schedule::new(owner_id, "Test Schedule".to_string(), vec![1, 2, 3])
}
