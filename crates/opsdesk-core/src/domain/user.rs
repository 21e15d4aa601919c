//! User record as held by the record store.

use serde_json::{Map, Value};

/// Key of the credential hash inside a stored user record.
pub const CREDENTIAL_FIELD: &str = "hashedPassword";

/// A registered user.
///
/// The record is kept exactly as stored: field order, unknown fields and
/// field types are not normalized. Accessors read leniently, so a record
/// with an odd field type still lists and displays.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct User {
    fields: Map<String, Value>,
}

impl User {
    /// Wrap a stored record. Returns `None` unless it is a JSON object.
    pub fn from_record(record: Value) -> Option<Self> {
        match record {
            Value::Object(fields) => Some(Self { fields }),
            _ => None,
        }
    }

    /// First and last name separated by a space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.text("firstName"), self.text("lastName"))
    }

    pub fn phone(&self) -> String {
        self.text("phone")
    }

    /// Number of orders attached to this user; 0 unless `orders` is an array.
    pub fn order_count(&self) -> usize {
        self.fields
            .get("orders")
            .and_then(Value::as_array)
            .map_or(0, Vec::len)
    }

    /// The stored record with the credential hash removed, in stored order.
    pub fn redacted(&self) -> Value {
        let mut fields = self.fields.clone();
        fields.shift_remove(CREDENTIAL_FIELD);
        Value::Object(fields)
    }

    /// Field as display text: strings verbatim, other values as JSON,
    /// missing fields empty.
    fn text(&self, key: &str) -> String {
        match self.fields.get(key) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        }
    }
}
