//! # Schedule Validation
//!
//! The schedule arrives as untyped JSON from a static source; this module is
//! the single boundary guard between that data and the typed model. It walks
//! the nested shape (days, time slots, workshops), collapses whitespace in
//! every text field, and returns either the normalized value or the full list
//! of violations.
//!
//! Validation does not short-circuit: a malformed slot on the 28th does not
//! hide a missing workshop field on the 29th. Each violation carries the
//! JSON-pointer style path of the value it refers to. Text normalization is
//! applied before emptiness checks, so a field of only spaces counts as
//! empty.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::errors::{ValidationError, ValidationErrorKind, ValidationErrors};
use crate::models::schedule::{DAY_KEYS, DaySchedule, ScheduleResponse};
use crate::models::time_slot::{SlotContent, TimeSlot, Workshop};

/// Collapses every run of whitespace (spaces, tabs, newlines) to a single
/// space and strips the ends. Idempotent; nothing but whitespace is altered.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Validates untyped schedule data and returns the normalized value.
///
/// # Arguments
///
/// * `raw` - An arbitrary deserialized JSON value; no shape is assumed.
///
/// # Returns
///
/// The whitespace-normalized [`ScheduleResponse`] on success, or every
/// violation found in the input. Pure and deterministic; malformed input is
/// reported as data, never as a panic.
pub fn validate(raw: &Value) -> Result<ScheduleResponse, ValidationErrors> {
    let mut errors = Vec::new();

    let data = match raw.as_object() {
        Some(root) => match root.get("data") {
            Some(value) => validate_data(value, &mut errors),
            None => {
                fail(&mut errors, "", ValidationErrorKind::MissingField("data"));
                None
            }
        },
        None => {
            fail(&mut errors, "", ValidationErrorKind::ExpectedObject);
            None
        }
    };

    match data {
        Some(data) if errors.is_empty() => Ok(ScheduleResponse { data }),
        _ => Err(ValidationErrors::new(errors)),
    }
}

fn validate_data(
    value: &Value,
    errors: &mut Vec<ValidationError>,
) -> Option<BTreeMap<String, DaySchedule>> {
    let Some(map) = value.as_object() else {
        fail(errors, "/data", ValidationErrorKind::ExpectedObject);
        return None;
    };

    // The day set is fixed: every event day must be present, nothing else
    // is allowed.
    for key in DAY_KEYS {
        if !map.contains_key(key) {
            fail(
                errors,
                "/data",
                ValidationErrorKind::MissingDay(key.to_string()),
            );
        }
    }

    let mut days = BTreeMap::new();
    for (key, value) in map {
        let path = format!("/data/{key}");
        if !DAY_KEYS.contains(&key.as_str()) {
            fail(errors, path, ValidationErrorKind::UnexpectedDay(key.clone()));
            continue;
        }
        if let Some(day) = validate_day(value, &path, errors) {
            days.insert(key.clone(), day);
        }
    }
    Some(days)
}

fn validate_day(
    value: &Value,
    path: &str,
    errors: &mut Vec<ValidationError>,
) -> Option<DaySchedule> {
    let Some(day) = value.as_object() else {
        fail(errors, path, ValidationErrorKind::ExpectedObject);
        return None;
    };
    let Some(times) = day.get("times") else {
        fail(errors, path, ValidationErrorKind::MissingField("times"));
        return None;
    };

    let path = format!("{path}/times");
    let Some(slots) = times.as_array() else {
        fail(errors, path, ValidationErrorKind::ExpectedArray);
        return None;
    };
    if slots.is_empty() {
        fail(errors, path, ValidationErrorKind::EmptyTimes);
        return None;
    }

    let mut validated = Vec::with_capacity(slots.len());
    for (index, slot) in slots.iter().enumerate() {
        if let Some(slot) = validate_slot(slot, &format!("{path}/{index}"), errors) {
            validated.push(slot);
        }
    }
    Some(DaySchedule { times: validated })
}

fn validate_slot(value: &Value, path: &str, errors: &mut Vec<ValidationError>) -> Option<TimeSlot> {
    let slot = match value.as_array() {
        Some(slot) if slot.len() == 2 => slot,
        _ => {
            fail(errors, path, ValidationErrorKind::MalformedSlot);
            return None;
        }
    };

    // Validate both halves before bailing so their errors surface together.
    let range = required_text(&slot[0], &format!("{path}/0"), errors);
    let content = validate_content(&slot[1], &format!("{path}/1"), errors);

    Some(TimeSlot(range?, content?))
}

fn validate_content(
    value: &Value,
    path: &str,
    errors: &mut Vec<ValidationError>,
) -> Option<SlotContent> {
    match value {
        Value::String(_) => required_text(value, path, errors).map(SlotContent::Label),
        Value::Array(workshops) => {
            if workshops.is_empty() {
                fail(errors, path, ValidationErrorKind::EmptyWorkshopList);
                return None;
            }
            let mut validated = Vec::with_capacity(workshops.len());
            for (index, workshop) in workshops.iter().enumerate() {
                if let Some(workshop) =
                    validate_workshop(workshop, &format!("{path}/{index}"), errors)
                {
                    validated.push(workshop);
                }
            }
            (validated.len() == workshops.len()).then_some(SlotContent::Workshops(validated))
        }
        _ => {
            fail(errors, path, ValidationErrorKind::InvalidContent);
            None
        }
    }
}

fn validate_workshop(
    value: &Value,
    path: &str,
    errors: &mut Vec<ValidationError>,
) -> Option<Workshop> {
    let Some(workshop) = value.as_object() else {
        fail(errors, path, ValidationErrorKind::ExpectedObject);
        return None;
    };

    let name = required_field(workshop, "name", path, errors);
    let teachers = required_field(workshop, "teachers", path, errors);
    let prereqs = text_field(workshop, "prereqs", path, errors);
    let level = required_field(workshop, "level", path, errors);

    Some(Workshop {
        name: name?,
        teachers: teachers?,
        prereqs: prereqs?,
        level: level?,
    })
}

/// A field that must be present and remain non-empty after collapsing.
fn required_field(
    workshop: &Map<String, Value>,
    field: &'static str,
    path: &str,
    errors: &mut Vec<ValidationError>,
) -> Option<String> {
    let Some(value) = workshop.get(field) else {
        fail(errors, path, ValidationErrorKind::MissingField(field));
        return None;
    };
    required_text(value, &format!("{path}/{field}"), errors)
}

/// A field that must be present and a string, but may collapse to empty.
fn text_field(
    workshop: &Map<String, Value>,
    field: &'static str,
    path: &str,
    errors: &mut Vec<ValidationError>,
) -> Option<String> {
    let Some(value) = workshop.get(field) else {
        fail(errors, path, ValidationErrorKind::MissingField(field));
        return None;
    };
    let Some(text) = value.as_str() else {
        fail(
            errors,
            format!("{path}/{field}"),
            ValidationErrorKind::ExpectedString,
        );
        return None;
    };
    Some(collapse_whitespace(text))
}

/// A string value that must remain non-empty after collapsing.
fn required_text(value: &Value, path: &str, errors: &mut Vec<ValidationError>) -> Option<String> {
    let Some(text) = value.as_str() else {
        fail(errors, path, ValidationErrorKind::ExpectedString);
        return None;
    };
    let collapsed = collapse_whitespace(text);
    if collapsed.is_empty() {
        fail(errors, path, ValidationErrorKind::Empty);
        return None;
    }
    Some(collapsed)
}

fn fail(errors: &mut Vec<ValidationError>, path: impl Into<String>, kind: ValidationErrorKind) {
    errors.push(ValidationError {
        path: path.into(),
        kind,
    });
}
