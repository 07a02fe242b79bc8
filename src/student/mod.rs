//! Student — the record type served by the store.
//!
//! A `Student` is what the store holds and what the API returns. A
//! `StudentInput` is what callers send on create and update: every field is
//! optional and any JSON value is accepted, so a string age or a fractional
//! one is stored exactly as sent.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A stored student record.
///
/// `id` is assigned by the store and never changes. The other fields keep
/// whatever JSON value the caller supplied; an omitted field stays `None`
/// and is left out of the JSON output, while an explicit `null` is kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub age: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub course: Option<Value>,
}

impl Student {
    /// Build a fully populated record. Used for seed data and tests.
    pub fn new(id: impl Into<String>, name: &str, age: i64, course: &str) -> Self {
        Self {
            id: id.into(),
            name: Some(Value::from(name)),
            age: Some(Value::from(age)),
            course: Some(Value::from(course)),
        }
    }

    /// Build a record from caller input under a freshly assigned id.
    pub fn from_input(id: String, input: StudentInput) -> Self {
        Self {
            id,
            name: input.name,
            age: input.age,
            course: input.course,
        }
    }

    /// Apply a partial update.
    ///
    /// A field is overwritten only when the supplied value is truthy. An
    /// absent field, `null`, `false`, `0` or `""` leaves the stored value as
    /// it was.
    pub fn apply(&mut self, input: StudentInput) {
        if let Some(name) = input.name.filter(is_truthy) {
            self.name = Some(name);
        }
        if let Some(age) = input.age.filter(is_truthy) {
            self.age = Some(age);
        }
        if let Some(course) = input.course.filter(is_truthy) {
            self.course = Some(course);
        }
    }
}

/// Body of `POST /students` and `PUT /students/:id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudentInput {
    #[serde(default, deserialize_with = "present")]
    pub name: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub age: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub course: Option<Value>,
}

impl StudentInput {
    pub fn name(mut self, name: impl Into<Value>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn age(mut self, age: impl Into<Value>) -> Self {
        self.age = Some(age.into());
        self
    }

    pub fn course(mut self, course: impl Into<Value>) -> Self {
        self.course = Some(course.into());
        self
    }
}

/// A key that is present deserializes to `Some`, even when it holds `null`.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// JavaScript truthiness over a JSON value.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// The records every fresh process starts with.
pub fn seed() -> Vec<Student> {
    vec![
        Student::new("1", "Alice Johnson", 20, "Computer Science"),
        Student::new("2", "Bob Smith", 22, "Mechanical Engineering"),
        Student::new("3", "Charlie Lee", 19, "Business Administration"),
    ]
}
