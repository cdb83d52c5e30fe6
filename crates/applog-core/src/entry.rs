use chrono::{DateTime, FixedOffset, SecondsFormat};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// RFC3339 with whole seconds, `Z` for a zero offset
pub fn format_timestamp(at: &DateTime<FixedOffset>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorLogEntry {
    pub timestamp: String,
    pub error_message: String,
    pub error_details: String,
}

impl ErrorLogEntry {
    pub fn new(at: &DateTime<FixedOffset>, message: &str, details: &str) -> Self {
        Self {
            timestamp: format_timestamp(at),
            error_message: message.to_string(),
            error_details: details.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ActionKind {
    Create,
    Update,
    Delete,
}

impl ActionKind {
    pub const ALL: [ActionKind; 3] = [Self::Create, Self::Update, Self::Delete];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Create => "CREATE",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
        }
    }

    /// Environment variable holding this kind's log directory
    pub fn env_var(self) -> &'static str {
        match self {
            Self::Create => "CREATED_SUCCESS_FOLDER_PATH",
            Self::Update => "UPDATED_SUCCESS_FOLDER_PATH",
            Self::Delete => "DELETED_SUCCESS_FOLDER_PATH",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "CREATE" => Ok(Self::Create),
            "UPDATE" => Ok(Self::Update),
            "DELETE" => Ok(Self::Delete),
            other => Err(format!("unknown action kind: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionLogEntry {
    pub timestamp: String,
    pub action_type: ActionKind,
    pub entity_name: String,
    pub attributes: serde_json::Value,
}

impl ActionLogEntry {
    pub fn new(
        at: &DateTime<FixedOffset>,
        action_type: ActionKind,
        entity_name: &str,
        attributes: serde_json::Value,
    ) -> Self {
        Self {
            timestamp: format_timestamp(at),
            action_type,
            entity_name: entity_name.to_string(),
            attributes,
        }
    }
}
