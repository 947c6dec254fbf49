use serde::{Deserialize, Serialize};

use crate::domain::Priority;

/// Finding appended to every locally simulated result.
pub const SIMULATION_MARKER: &str = "(OFFLINE SIMULATION)";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriageRequest {
    pub patient_id: String,
    pub modality: String,
    pub clinical_history: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriageResult {
    pub patient_id: String,
    pub priority: Priority,
    pub findings: Vec<String>,
    pub recommendation: String,
    pub confidence: f64,
}

impl TriageResult {
    pub fn is_simulated(&self) -> bool {
        self.findings.iter().any(|f| f == SIMULATION_MARKER)
    }
}

/// Root document served by the triage service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub status: String,
    pub service: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_uses_snake_case_wire_names() {
        let request = TriageRequest {
            patient_id: "PT-001".into(),
            modality: "CXR".into(),
            clinical_history: String::new(),
        };
        let value = serde_json::to_value(&request).expect("serialize");
        assert_eq!(value["patient_id"], "PT-001");
        assert_eq!(value["modality"], "CXR");
        assert_eq!(value["clinical_history"], "");
    }

    #[test]
    fn result_keeps_unknown_priority() {
        let raw = r#"{
            "patient_id": "PT-9",
            "priority": "URGENT",
            "findings": ["b", "a"],
            "recommendation": "Review required",
            "confidence": 0.5
        }"#;
        let parsed: TriageResult = serde_json::from_str(raw).expect("parse");
        assert_eq!(parsed.priority, Priority::Other("URGENT".into()));
        assert_eq!(parsed.findings, vec!["b", "a"]);
        assert!(!parsed.is_simulated());

        let reencoded = serde_json::to_value(&parsed).expect("serialize");
        assert_eq!(reencoded["priority"], "URGENT");
    }
}
