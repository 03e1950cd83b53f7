use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One item in a backend collection, identified by a string id.
///
/// Everything besides the id is carried verbatim in `fields`; the SDK never
/// inspects or validates the payload shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Record {
    /// Backend-assigned record identifier.
    pub id: String,
    /// Remaining payload, flattened into the record object on the wire.
    #[serde(flatten)]
    pub fields: BTreeMap<String, Value>,
}

impl Record {
    /// Creates a record with the given id and no payload fields.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Adds a payload field, consuming and returning the record.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Returns a payload field by name.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Returns a payload field as a string slice, when it is a JSON string.
    pub fn str_field(&self, name: &str) -> Option<&str> {
        self.field(name).and_then(Value::as_str)
    }
}

/// Kind of change that produced a realtime event.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EventAction {
    Create,
    Update,
    Delete,
}

impl fmt::Display for EventAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EventAction::Create => "create",
            EventAction::Update => "update",
            EventAction::Delete => "delete",
        };
        f.write_str(name)
    }
}

/// Change event delivered for a subscribed record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecordEvent {
    /// What happened to the record.
    pub action: EventAction,
    /// Record state after the change.
    pub record: Record,
}

impl RecordEvent {
    pub fn from_text(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn to_text(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{EventAction, Record, RecordEvent};

    #[test]
    fn event_parses_backend_payload() {
        let text = r#"{"action":"update","record":{"id":"A1","status":"closed","currentBid":120}}"#;
        let event = RecordEvent::from_text(text).expect("parse event");

        assert_eq!(event.action, EventAction::Update);
        assert_eq!(event.record.id, "A1");
        assert_eq!(event.record.str_field("status"), Some("closed"));
        assert_eq!(
            event.record.field("currentBid").and_then(|v| v.as_u64()),
            Some(120)
        );
    }

    #[test]
    fn record_payload_flattens_into_object() {
        let record = Record::new("U7")
            .with_field("name", "grimnir")
            .with_field("dkp", 350);

        let value = serde_json::to_value(&record).expect("serialize record");
        assert_eq!(value.get("id").and_then(|v| v.as_str()), Some("U7"));
        assert_eq!(value.get("name").and_then(|v| v.as_str()), Some("grimnir"));
        assert!(value.get("fields").is_none());
    }

    #[test]
    fn unknown_fields_survive_a_round_trip() {
        let text = r#"{"action":"delete","record":{"id":"A9","collectionName":"auctions","expand":{}}}"#;
        let event = RecordEvent::from_text(text).expect("parse");
        let reencoded = event.to_text().expect("encode");
        let reparsed = RecordEvent::from_text(&reencoded).expect("reparse");

        assert_eq!(reparsed, event);
        assert_eq!(
            reparsed.record.str_field("collectionName"),
            Some("auctions")
        );
    }

    #[test]
    fn missing_string_field_is_none() {
        let record = Record::new("A1").with_field("minBid", json!(50));
        assert_eq!(record.str_field("status"), None);
        assert_eq!(record.str_field("minBid"), None);
    }
}
