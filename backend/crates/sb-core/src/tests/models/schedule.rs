use crate::{CoreError, Schedule};

use uuid::Uuid;

#[test]
fn test_schedule_new() {
    let owner_id = Uuid::new_v4();
    let schedule = Schedule::new(owner_id, "My Plan".to_string(), vec![101, 102]);

    assert_eq!(schedule.owner_id, owner_id);
    assert_eq!(schedule.name, "My Plan");
    assert_eq!(schedule.match_ids, vec![101, 102]);
    assert_eq!(schedule.created_at, schedule.updated_at);
}

#[test]
fn test_schedule_ids_are_unique() {
    let owner_id = Uuid::new_v4();
    let a = Schedule::new(owner_id, "A".to_string(), vec![]);
    let b = Schedule::new(owner_id, "A".to_string(), vec![]);

    assert_ne!(a.id, b.id);
}

#[test]
fn test_match_ids_json_preserves_order_and_duplicates() {
    let schedule = Schedule::new(Uuid::new_v4(), "Plan".to_string(), vec![103, 101, 101]);

    let json = schedule.match_ids_json();

    assert_eq!(json, "[103,101,101]");
    assert_eq!(Schedule::parse_match_ids(&json).unwrap(), vec![103, 101, 101]);
}

#[test]
fn test_match_ids_json_empty() {
    let schedule = Schedule::new(Uuid::new_v4(), "Empty".to_string(), vec![]);

    assert_eq!(schedule.match_ids_json(), "[]");
    assert!(Schedule::parse_match_ids("[]").unwrap().is_empty());
}

#[test]
fn test_parse_match_ids_rejects_garbage() {
    let result = Schedule::parse_match_ids("not json");

    assert!(matches!(result, Err(CoreError::InvalidMatchIds { .. })));
}
