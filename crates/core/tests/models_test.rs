use std::collections::BTreeMap;

use festsched_core::models::schedule::{DAY_KEYS, DaySchedule, ScheduleResponse};
use festsched_core::models::time_slot::{SlotContent, TimeSlot, Workshop};
use pretty_assertions::assert_eq;
use serde_json::{from_str, from_value, json, to_string, to_value};

#[test]
fn test_time_slot_wire_shape() {
    let slot = TimeSlot(
        "10:00-11:00".to_string(),
        SlotContent::Label("Breakfast".to_string()),
    );

    // The wire form is the two-element array used by the schedule JSON.
    assert_eq!(
        to_value(&slot).expect("Failed to serialize time slot"),
        json!(["10:00-11:00", "Breakfast"])
    );
}

#[test]
fn test_workshop_slot_wire_shape() {
    let slot = TimeSlot(
        "14:00-15:30".to_string(),
        SlotContent::Workshops(vec![Workshop {
            name: "Acro".to_string(),
            teachers: "John Doe".to_string(),
            prereqs: "None".to_string(),
            level: "Beginner".to_string(),
        }]),
    );

    assert_eq!(
        to_value(&slot).expect("Failed to serialize time slot"),
        json!([
            "14:00-15:30",
            [{ "name": "Acro", "teachers": "John Doe", "prereqs": "None", "level": "Beginner" }]
        ])
    );
}

#[test]
fn test_slot_content_deserializes_both_variants() {
    let label: SlotContent =
        from_value(json!("Breakfast")).expect("Failed to deserialize label content");
    assert_eq!(label, SlotContent::Label("Breakfast".to_string()));

    let workshops: SlotContent = from_value(json!([
        { "name": "Acro", "teachers": "John Doe", "prereqs": "", "level": "Beginner" }
    ]))
    .expect("Failed to deserialize workshop content");
    match workshops {
        SlotContent::Workshops(workshops) => assert_eq!(workshops[0].name, "Acro"),
        other => panic!("expected workshops, got {other:?}"),
    }
}

#[test]
fn test_workshop_serialization() {
    let workshop = Workshop {
        name: "Handstands".to_string(),
        teachers: "Jane Doe".to_string(),
        prereqs: "Plank".to_string(),
        level: "Intermediate".to_string(),
    };

    let json = to_string(&workshop).expect("Failed to serialize workshop");
    let deserialized: Workshop = from_str(&json).expect("Failed to deserialize workshop");

    assert_eq!(deserialized, workshop);
}

#[test]
fn test_schedule_response_round_trip() {
    let mut data = BTreeMap::new();
    for key in DAY_KEYS {
        data.insert(
            key.to_string(),
            DaySchedule {
                times: vec![TimeSlot(
                    "09:00-10:00".to_string(),
                    SlotContent::Label("Breakfast".to_string()),
                )],
            },
        );
    }
    let schedule = ScheduleResponse { data };

    let json = to_string(&schedule).expect("Failed to serialize schedule");
    let deserialized: ScheduleResponse = from_str(&json).expect("Failed to deserialize schedule");

    assert_eq!(deserialized, schedule);
}

#[test]
fn test_days_iterates_in_event_order() {
    let mut data = BTreeMap::new();
    for key in DAY_KEYS {
        data.insert(key.to_string(), DaySchedule { times: vec![] });
    }
    let schedule = ScheduleResponse { data };

    let keys: Vec<&str> = schedule.days().map(|(key, _)| key).collect();

    // Event order runs 27th through the 4th, not the map's lexical order.
    assert_eq!(keys, DAY_KEYS.to_vec());
    assert_eq!(keys.first(), Some(&"27"));
    assert_eq!(keys.last(), Some(&"04"));
}

#[test]
fn test_day_keys_are_zero_padded() {
    assert_eq!(DAY_KEYS.len(), 9);
    for key in DAY_KEYS {
        assert_eq!(key.len(), 2);
        assert!(key.chars().all(|c| c.is_ascii_digit()));
    }
}

#[test]
fn test_time_slot_accessors() {
    let slot = TimeSlot(
        "10:00-11:00".to_string(),
        SlotContent::Label("Welcome".to_string()),
    );

    assert_eq!(slot.range(), "10:00-11:00");
    assert_eq!(slot.content(), &SlotContent::Label("Welcome".to_string()));
}
