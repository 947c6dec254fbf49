use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Urgency assigned to a case. Unknown wire values are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Priority {
    Stat,
    Routine,
    Other(String),
}

impl Priority {
    pub fn as_wire_str(&self) -> &str {
        match self {
            Priority::Stat => "STAT",
            Priority::Routine => "ROUTINE",
            Priority::Other(raw) => raw,
        }
    }

    /// Upper-case text shown on the priority badge.
    pub fn display_label(&self) -> String {
        self.as_wire_str().to_uppercase()
    }

    /// Lower-case style class for the priority badge.
    pub fn style_class(&self) -> String {
        self.as_wire_str().to_lowercase()
    }
}

impl From<&str> for Priority {
    fn from(value: &str) -> Self {
        match value {
            "STAT" => Priority::Stat,
            "ROUTINE" => Priority::Routine,
            other => Priority::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire_str())
    }
}

impl Serialize for Priority {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_wire_str())
    }
}

impl<'de> Deserialize<'de> for Priority {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Priority::from(raw.as_str()))
    }
}

/// Reachability of the triage service as shown by the status indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionState {
    #[default]
    Online,
    Offline,
}

impl ConnectionState {
    pub fn label(self) -> &'static str {
        match self {
            ConnectionState::Online => "System Online",
            ConnectionState::Offline => "Offline Mode",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_priorities_map_to_variants() {
        assert_eq!(Priority::from("STAT"), Priority::Stat);
        assert_eq!(Priority::from("ROUTINE"), Priority::Routine);
        assert_eq!(
            Priority::from("URGENT"),
            Priority::Other("URGENT".to_string())
        );
    }

    #[test]
    fn priority_labels_use_case_per_surface() {
        let priority = Priority::Other("Urgent".to_string());
        assert_eq!(priority.display_label(), "URGENT");
        assert_eq!(priority.style_class(), "urgent");
        assert_eq!(Priority::Stat.style_class(), "stat");
    }

    #[test]
    fn connection_defaults_to_online() {
        assert_eq!(ConnectionState::default(), ConnectionState::Online);
        assert_eq!(ConnectionState::Offline.label(), "Offline Mode");
    }
}
