// src/backend/types.rs — Records returned by the backend, after normalization.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use super::lenient;

// ── Attendance ───────────────────────────────────────────────────

/// One course's attendance summary.
///
/// The wire key for the percentage is `percetage`; it is kept for backend
/// compatibility and `percentage` is accepted as well.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttendanceRecord {
    #[serde(deserialize_with = "lenient::string")]
    pub code: String,
    #[serde(deserialize_with = "lenient::string")]
    pub category: String,
    #[serde(deserialize_with = "lenient::string")]
    pub slot: String,
    #[serde(deserialize_with = "lenient::string")]
    pub title: String,
    #[serde(deserialize_with = "lenient::string")]
    pub faculty: String,
    /// Advisory; shown as sent and never recomputed from the counts.
    #[serde(
        rename = "percetage",
        alias = "percentage",
        deserialize_with = "lenient::string"
    )]
    pub percentage: String,
    #[serde(deserialize_with = "lenient::count")]
    pub conducted: i64,
    #[serde(deserialize_with = "lenient::count")]
    pub absent: i64,
    #[serde(deserialize_with = "lenient::count")]
    pub margin: i64,
}

impl AttendanceRecord {
    /// Classes attended: conducted minus absent.
    pub fn present(&self) -> i64 {
        self.conducted.saturating_sub(self.absent)
    }

    /// Numeric percentage from the leading number in the string, so `"91%"`
    /// and `"92 approx"` both parse.
    pub fn percentage_value(&self) -> Option<f64> {
        lenient::leading_number(&self.percentage)
    }

    /// Color band for this record. Unparseable percentages fall in `Low`.
    pub fn level(&self) -> AttendanceLevel {
        self.percentage_value()
            .map(AttendanceLevel::classify)
            .unwrap_or(AttendanceLevel::Low)
    }
}

/// Attendance color band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttendanceLevel {
    /// p >= 90
    High,
    /// 80 <= p < 90
    Good,
    /// 75 <= p < 80
    Fair,
    /// p < 75
    Low,
}

impl AttendanceLevel {
    pub fn classify(percentage: f64) -> Self {
        if percentage >= 90.0 {
            AttendanceLevel::High
        } else if percentage >= 80.0 {
            AttendanceLevel::Good
        } else if percentage >= 75.0 {
            AttendanceLevel::Fair
        } else {
            AttendanceLevel::Low
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AttendanceLevel::High => "high",
            AttendanceLevel::Good => "good",
            AttendanceLevel::Fair => "fair",
            AttendanceLevel::Low => "low",
        }
    }
}

// ── Marks ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarksRecord {
    #[serde(deserialize_with = "lenient::string")]
    pub code: String,
    #[serde(rename = "type", deserialize_with = "lenient::string")]
    pub kind: String,
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub total: Option<String>,
    #[serde(deserialize_with = "lenient::list")]
    pub marks: Vec<MarkEntry>,
}

/// A single assessment inside a course's marks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkEntry {
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub mark: String,
    #[serde(deserialize_with = "lenient::string")]
    pub total: String,
}

// ── Timetable ────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    pub const ALL: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    /// Day index used by the backend (0 = Monday).
    pub fn index(self) -> usize {
        match self {
            Weekday::Monday => 0,
            Weekday::Tuesday => 1,
            Weekday::Wednesday => 2,
            Weekday::Thursday => 3,
            Weekday::Friday => 4,
        }
    }

    pub fn from_index(i: usize) -> Option<Weekday> {
        Weekday::ALL.get(i).copied()
    }

    pub fn short_label(self) -> &'static str {
        match self {
            Weekday::Monday => "Mon",
            Weekday::Tuesday => "Tue",
            Weekday::Wednesday => "Wed",
            Weekday::Thursday => "Thu",
            Weekday::Friday => "Fri",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassSlot {
    #[serde(deserialize_with = "lenient::string")]
    pub title: String,
    #[serde(deserialize_with = "lenient::string")]
    pub code: String,
    #[serde(deserialize_with = "lenient::string")]
    pub room: String,
    #[serde(deserialize_with = "lenient::string")]
    pub category: String,
}

/// Week grid: for each weekday, `(time label, slot)` pairs in backend order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Timetable {
    days: [Vec<(String, ClassSlot)>; 5],
}

impl Timetable {
    pub fn day(&self, day: Weekday) -> &[(String, ClassSlot)] {
        &self.days[day.index()]
    }

    pub fn set_day(&mut self, day: Weekday, slots: Vec<(String, ClassSlot)>) {
        self.days[day.index()] = slots;
    }

    pub fn slot_count(&self) -> usize {
        self.days.iter().map(Vec::len).sum()
    }
}

struct DaySlots<'a>(&'a [(String, ClassSlot)]);

impl Serialize for DaySlots<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (time, slot) in self.0 {
            map.serialize_entry(time, slot)?;
        }
        map.end()
    }
}

/// Serializes back to the backend's shape: `{"0": {"08:00": {...}}, ...}`.
/// Days without classes are omitted.
impl Serialize for Timetable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let filled = self.days.iter().filter(|d| !d.is_empty()).count();
        let mut map = serializer.serialize_map(Some(filled))?;
        for day in Weekday::ALL {
            let slots = self.day(day);
            if !slots.is_empty() {
                map.serialize_entry(&day.index().to_string(), &DaySlots(slots))?;
            }
        }
        map.end()
    }
}

// ── Profile ──────────────────────────────────────────────────────

/// Open set of profile fields, values already rendered as text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserProfile {
    pub fields: Vec<(String, String)>,
}

impl UserProfile {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn name(&self) -> Option<&str> {
        self.get("name")
    }

    pub fn roll(&self) -> Option<&str> {
        self.get("roll")
    }
}

impl Serialize for UserProfile {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (k, v) in &self.fields {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}
