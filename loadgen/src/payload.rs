use serde::{Deserialize, Serialize};

use crate::plate::Plate;

/// The body of every request: a camera channel and the plate it "saw".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventPayload {
    #[serde(rename = "ChannelName")]
    pub channel_name: String,
    #[serde(rename = "EventComment")]
    pub event_comment: Plate,
}

impl EventPayload {
    pub fn new(channel_name: impl Into<String>, event_comment: Plate) -> Self {
        Self {
            channel_name: channel_name.into(),
            event_comment,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn serializes_with_the_endpoint_field_names() {
        let plate = Plate::parse("BE5084AG").unwrap();
        let payload = EventPayload::new("P3", plate);

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            json!({ "ChannelName": "P3", "EventComment": "BE5084AG" })
        );
    }

    #[test]
    fn rejects_malformed_plates_on_decode() {
        let raw = r#"{ "ChannelName": "P3", "EventComment": "nope" }"#;
        assert!(serde_json::from_str::<EventPayload>(raw).is_err());
    }
}
