//! Contact form enquiry payload.
//!
//! There is no delivery backend; the submission layer validates the form,
//! serializes the enquiry into the structured log and notifies the visitor.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One submitted contact enquiry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enquiry {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    #[serde(rename = "submittedAt")]
    pub submitted_at: DateTime<Utc>,
}

impl Enquiry {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            message: message.into(),
            submitted_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enquiry_serializes_with_camel_case_timestamp() {
        let enquiry = Enquiry::new("Thandi", "thandi@example.co.za", "012 345 6789", "Hello");
        let json = serde_json::to_string(&enquiry).expect("enquiry serializes");
        assert!(json.contains("\"submittedAt\""));
        assert!(json.contains("\"Thandi\""));

        let back: Enquiry = serde_json::from_str(&json).expect("enquiry deserializes");
        assert_eq!(back, enquiry);
    }
}
