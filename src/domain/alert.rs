// Alert notices shown in the alert feed
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub struct AlertNotice {
    pub kind: String,
    pub message: String,
}

impl AlertNotice {
    pub fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
        }
    }

    /// Presentation class derived from the notice type.
    pub fn css_class(&self) -> String {
        format!("alert-{}", self.kind)
    }

    /// Read the `alerts` array of an alerts payload, preserving delivered order.
    /// Entries that are not objects are skipped; missing fields become empty.
    pub fn list_from_payload(payload: &Value) -> Vec<AlertNotice> {
        payload["alerts"]
            .as_array()
            .into_iter()
            .flatten()
            .filter(|entry| entry.is_object())
            .map(|entry| {
                AlertNotice::new(
                    entry["type"].as_str().unwrap_or("info"),
                    entry["message"].as_str().unwrap_or_default(),
                )
            })
            .collect()
    }
}
