use crate::User;

#[test]
fn test_user_new() {
    let user = User::new(
        "alice@example.com".to_string(),
        "$argon2id$stub".to_string(),
        Some("Alice".to_string()),
    );

    assert_eq!(user.email, "alice@example.com");
    assert_eq!(user.display_name.as_deref(), Some("Alice"));
}

#[test]
fn test_user_id_not_derived_from_email() {
    let a = User::new("same@example.com".to_string(), "h".to_string(), None);
    let b = User::new("same@example.com".to_string(), "h".to_string(), None);

    assert_ne!(a.id, b.id);
}

#[test]
fn test_user_serialization_omits_password_hash() {
    let user = User::new("bob@example.com".to_string(), "secret-hash".to_string(), None);

    let json = serde_json::to_value(&user).unwrap();

    assert!(json.get("password_hash").is_none());
    assert_eq!(json["email"], "bob@example.com");
}
