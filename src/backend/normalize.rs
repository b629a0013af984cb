// src/backend/normalize.rs — Validated parsing of raw endpoint bodies.
//
// Each endpoint body is parsed once into `Parsed<T>`. A body of the wrong shape
// is `Malformed`, never an error; `Parsed::or_default` is the single place
// where the safe default (empty list, empty grid, no profile) is applied.

use serde_json::{Map, Value};

use super::lenient::{self, display_scalar};
use super::types::{AttendanceRecord, ClassSlot, MarksRecord, Timetable, UserProfile, Weekday};
use super::Endpoint;

/// Result of parsing one endpoint body.
#[derive(Debug, Clone, PartialEq)]
pub enum Parsed<T> {
    Ok(T),
    /// The body was valid JSON but not the expected shape.
    Malformed(String),
}

impl<T: Default> Parsed<T> {
    /// Unwrap to the parsed value, or the shape's default when malformed.
    pub fn or_default(self, endpoint: Endpoint) -> T {
        match self {
            Parsed::Ok(value) => value,
            Parsed::Malformed(reason) => {
                tracing::warn!(%endpoint, %reason, "malformed response, using default");
                T::default()
            }
        }
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// JavaScript-style truthiness, used to decide whether an envelope's `data`
/// member is present.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn parse_records<T: serde::de::DeserializeOwned>(
    endpoint: Endpoint,
    value: Value,
) -> Parsed<Vec<T>> {
    if !value.is_array() {
        return Parsed::Malformed(format!("expected array, got {}", kind_of(&value)));
    }
    let (records, dropped) = lenient::decode_elements(value);
    if dropped > 0 {
        tracing::warn!(%endpoint, dropped, "skipped records that are not objects");
    }
    Parsed::Ok(records)
}

pub fn parse_attendance(value: Value) -> Parsed<Vec<AttendanceRecord>> {
    parse_records(Endpoint::Attendance, value)
}

pub fn parse_marks(value: Value) -> Parsed<Vec<MarksRecord>> {
    parse_records(Endpoint::Marks, value)
}

/// Accepts the grid directly or wrapped as `{"data": <grid>}`. The grid is an
/// object keyed by day index (exactly `"0"`..`"4"`) or an array indexed the
/// same way. Only a truthy top-level `data` member is unwrapped.
pub fn parse_timetable(value: Value) -> Parsed<Timetable> {
    let grid = match value {
        Value::Object(mut obj) if obj.get("data").is_some_and(is_truthy) => {
            obj.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    };

    let mut timetable = Timetable::default();
    match grid {
        Value::Object(days) => {
            for (key, day) in days {
                match Weekday::ALL.into_iter().find(|d| d.index().to_string() == key) {
                    Some(weekday) => timetable.set_day(weekday, parse_day(day)),
                    None => tracing::debug!(%key, "ignoring timetable key outside Mon-Fri"),
                }
            }
        }
        Value::Array(days) => {
            for (i, day) in days.into_iter().enumerate() {
                if let Some(weekday) = Weekday::from_index(i) {
                    timetable.set_day(weekday, parse_day(day));
                }
            }
        }
        other => {
            return Parsed::Malformed(format!(
                "expected object or array, got {}",
                kind_of(&other)
            ))
        }
    }
    Parsed::Ok(timetable)
}

fn parse_day(value: Value) -> Vec<(String, ClassSlot)> {
    let Value::Object(slots) = value else {
        return Vec::new();
    };
    slots
        .into_iter()
        .filter_map(|(time, slot)| match serde_json::from_value::<ClassSlot>(slot) {
            Ok(slot) => Some((time, slot)),
            Err(e) => {
                tracing::debug!(%time, error = %e, "skipping timetable slot");
                None
            }
        })
        .collect()
}

/// An empty object or `null` means "no profile".
pub fn parse_profile(value: Value) -> Parsed<Option<UserProfile>> {
    match value {
        Value::Null => Parsed::Ok(None),
        Value::Object(map) if map.is_empty() => Parsed::Ok(None),
        Value::Object(map) => Parsed::Ok(Some(profile_from_map(map))),
        other => Parsed::Malformed(format!("expected object, got {}", kind_of(&other))),
    }
}

fn profile_from_map(map: Map<String, Value>) -> UserProfile {
    UserProfile {
        fields: map
            .into_iter()
            .map(|(k, v)| {
                let text = display_scalar(&v);
                (k, text)
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_attendance_array() {
        let parsed = parse_attendance(json!([{"code": "CS101", "percetage": "92"}]));
        let Parsed::Ok(records) = parsed else {
            panic!("expected Ok");
        };
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].code, "CS101");
    }

    #[test]
    fn test_attendance_non_array_is_malformed_and_defaults_empty() {
        for body in [json!(null), json!({"error": "x"}), json!("oops"), json!(3)] {
            let parsed = parse_attendance(body);
            assert!(matches!(parsed, Parsed::Malformed(_)));
            assert!(parsed.or_default(Endpoint::Attendance).is_empty());
        }
    }

    #[test]
    fn test_marks_non_array_defaults_empty() {
        assert!(parse_marks(json!({"marks": []}))
            .or_default(Endpoint::Marks)
            .is_empty());
    }

    #[test]
    fn test_non_object_records_are_dropped() {
        let records = parse_marks(json!([{"code": "A"}, 5, null, {"code": "B"}]))
            .or_default(Endpoint::Marks);
        let codes: Vec<&str> = records.iter().map(|r| r.code.as_str()).collect();
        assert_eq!(codes, vec!["A", "B"]);
    }

    #[test]
    fn test_timetable_direct_mapping() {
        let t = parse_timetable(json!({
            "0": {"08:00": {"title": "Maths", "code": "MA1", "room": "101", "category": "Theory"}}
        }))
        .or_default(Endpoint::Timetable);
        assert_eq!(t.day(Weekday::Monday).len(), 1);
        assert_eq!(t.day(Weekday::Monday)[0].0, "08:00");
        assert_eq!(t.day(Weekday::Monday)[0].1.title, "Maths");
        assert!(t.day(Weekday::Tuesday).is_empty());
    }

    #[test]
    fn test_timetable_envelope_equals_direct() {
        let grid = json!({
            "2": {"10:00": {"title": "DB"}, "11:00": {"title": "Net"}},
            "4": {"09:00": {"title": "Lab"}}
        });
        let direct = parse_timetable(grid.clone());
        let wrapped = parse_timetable(json!({"data": grid}));
        assert_eq!(direct, wrapped);
    }

    #[test]
    fn test_timetable_preserves_slot_order() {
        let t = parse_timetable(json!({
            "0": {"9:00": {"title": "A"}, "10:00": {"title": "B"}, "8:00": {"title": "C"}}
        }))
        .or_default(Endpoint::Timetable);
        let times: Vec<&str> = t
            .day(Weekday::Monday)
            .iter()
            .map(|(time, _)| time.as_str())
            .collect();
        assert_eq!(times, vec!["9:00", "10:00", "8:00"]);
    }

    #[test]
    fn test_timetable_array_form() {
        let t = parse_timetable(json!([{}, {"12:00": {"title": "X"}}]))
            .or_default(Endpoint::Timetable);
        assert_eq!(t.day(Weekday::Tuesday)[0].1.title, "X");
        assert!(t.day(Weekday::Friday).is_empty());
    }

    #[test]
    fn test_timetable_ignores_weekend_and_garbage_keys() {
        let t = parse_timetable(json!({
            "5": {"10:00": {"title": "Sat"}},
            "mon": {"10:00": {"title": "?"}},
            "3": "not a day"
        }))
        .or_default(Endpoint::Timetable);
        assert_eq!(t.slot_count(), 0);
    }

    #[test]
    fn test_timetable_day_keys_match_exactly() {
        let t = parse_timetable(json!({
            "1": {"08:00": {"title": "Real"}},
            "01": {},
            "+1": {},
            " 1 ": {}
        }))
        .or_default(Endpoint::Timetable);
        assert_eq!(t.day(Weekday::Tuesday).len(), 1);
        assert_eq!(t.day(Weekday::Tuesday)[0].1.title, "Real");
        assert_eq!(t.slot_count(), 1);
    }

    #[test]
    fn test_timetable_only_data_member_is_unwrapped() {
        // Any other wrapper is read as the grid itself, and its key is not a day.
        let t = parse_timetable(json!({"payload": {"0": {"08:00": {"title": "Hidden"}}}}))
            .or_default(Endpoint::Timetable);
        assert_eq!(t.slot_count(), 0);
    }

    #[test]
    fn test_timetable_envelope_inside_array_is_not_unwrapped() {
        // The first element is Monday's slot map; "data" becomes its time label.
        let t = parse_timetable(json!([{"data": {"0": {"08:00": {"title": "Maths"}}}}]))
            .or_default(Endpoint::Timetable);
        let monday = t.day(Weekday::Monday);
        assert_eq!(monday.len(), 1);
        assert_eq!(monday[0].0, "data");
        assert_eq!(monday[0].1.title, "");
        assert_eq!(t.slot_count(), 1);
    }

    #[test]
    fn test_timetable_falsy_data_is_not_an_envelope() {
        // `data` is null, so the object itself is the grid.
        let t = parse_timetable(json!({"data": null, "1": {"08:00": {"title": "Y"}}}))
            .or_default(Endpoint::Timetable);
        assert_eq!(t.day(Weekday::Tuesday)[0].1.title, "Y");
    }

    #[test]
    fn test_timetable_scalar_is_malformed() {
        assert!(matches!(parse_timetable(json!("nope")), Parsed::Malformed(_)));
        assert_eq!(
            parse_timetable(json!(null))
                .or_default(Endpoint::Timetable)
                .slot_count(),
            0
        );
    }

    #[test]
    fn test_profile_empty_object_is_none() {
        assert_eq!(parse_profile(json!({})), Parsed::Ok(None));
        assert_eq!(parse_profile(json!(null)), Parsed::Ok(None));
    }

    #[test]
    fn test_profile_fields_in_order() {
        let p = parse_profile(json!({"roll": "RA21", "name": "Asha", "year": 3, "active": true}))
            .or_default(Endpoint::User)
            .unwrap();
        assert_eq!(
            p.fields,
            vec![
                ("roll".to_string(), "RA21".to_string()),
                ("name".to_string(), "Asha".to_string()),
                ("year".to_string(), "3".to_string()),
                ("active".to_string(), "true".to_string()),
            ]
        );
    }

    #[test]
    fn test_profile_array_is_malformed() {
        let parsed = parse_profile(json!(["a"]));
        assert!(matches!(parsed, Parsed::Malformed(_)));
        assert!(parsed.or_default(Endpoint::User).is_none());
    }
}
