//! Snapshot of a successfully validated submission

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Form values captured when submit passed every rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedData {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
    pub submitted_at: DateTime<Utc>,
}

impl SubmittedData {
    /// The message to display, absent when none was submitted
    pub fn message_display(&self) -> Option<&str> {
        if self.message.is_empty() {
            None
        } else {
            Some(&self.message)
        }
    }

    /// Pretty JSON used for clipboard copy and the exit echo
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample(message: &str) -> SubmittedData {
        SubmittedData {
            first_name: "Miranda".to_string(),
            last_name: "Cascione".to_string(),
            email: "fakeemail@email.com".to_string(),
            message: message.to_string(),
            submitted_at: Utc::now(),
        }
    }

    #[test]
    fn test_message_display_absent_when_empty() {
        assert!(sample("").message_display().is_none());
    }

    #[test]
    fn test_message_display_present() {
        assert_eq!(sample("Thank you!").message_display(), Some("Thank you!"));
    }

    #[test]
    fn test_json_uses_camel_case_keys() {
        let json = sample("Hi").to_json().unwrap();
        assert!(json.contains("\"firstName\": \"Miranda\""));
        assert!(json.contains("\"lastName\": \"Cascione\""));
        assert!(json.contains("\"submittedAt\""));
    }

    #[test]
    fn test_json_omits_empty_message() {
        let original = sample("");
        let json = original.to_json().unwrap();
        assert!(!json.contains("message"));

        let parsed: SubmittedData = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, original);
    }
}
