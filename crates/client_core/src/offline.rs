//! Canned triage results used when the live service cannot be reached.

use shared::{
    domain::Priority,
    protocol::{TriageResult, SIMULATION_MARKER},
};

struct MockCase {
    patient_id: &'static str,
    priority: Priority,
    findings: &'static [&'static str],
    recommendation: &'static str,
    confidence: f64,
}

static MOCK_CASES: [MockCase; 4] = [
    MockCase {
        patient_id: "PT-001",
        priority: Priority::Stat,
        findings: &["Large Right-sided Pneumothorax", "Tracheal Deviation"],
        recommendation: "Immediate chest tube placement recommended.",
        confidence: 0.95,
    },
    MockCase {
        patient_id: "PT-002",
        priority: Priority::Routine,
        findings: &["Normal Cardiac Silhouette", "No acute bony abnormality"],
        recommendation: "Routine post-op screening cleared.",
        confidence: 0.98,
    },
    MockCase {
        patient_id: "PT-CRIT",
        priority: Priority::Stat,
        findings: &["Dense MCA Sign", "Hypodensity in left temporal lobe"],
        recommendation: "Mechanical Thrombectomy candidate.",
        confidence: 0.88,
    },
    MockCase {
        patient_id: "PT-PE",
        priority: Priority::Stat,
        findings: &["Filling defect in pulmonary artery", "Right heart strain"],
        recommendation: "Anticoagulation / Thrombolysis protocol initiated.",
        confidence: 0.90,
    },
];

pub fn known_mock_ids() -> impl Iterator<Item = &'static str> {
    MOCK_CASES.iter().map(|case| case.patient_id)
}

/// Looks up the simulated result for `patient_id`, ignoring case.
///
/// Returns `None` for identifiers outside the fixed set; never fails.
pub fn resolve_offline_mock(patient_id: &str) -> Option<TriageResult> {
    let normalized = patient_id.to_uppercase();
    let case = MOCK_CASES
        .iter()
        .find(|case| case.patient_id == normalized)?;

    let findings = case
        .findings
        .iter()
        .copied()
        .chain(std::iter::once(SIMULATION_MARKER))
        .map(str::to_string)
        .collect();

    Some(TriageResult {
        patient_id: normalized,
        priority: case.priority.clone(),
        findings,
        recommendation: case.recommendation.to_string(),
        confidence: case.confidence,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_known_id_resolves_case_insensitively() {
        for id in known_mock_ids() {
            for variant in [id.to_string(), id.to_lowercase()] {
                let result = resolve_offline_mock(&variant).expect("known id");
                assert_eq!(result.patient_id, id);
                assert!(result.is_simulated());
                assert_eq!(
                    result.findings.last().map(String::as_str),
                    Some(SIMULATION_MARKER)
                );
            }
        }
    }

    #[test]
    fn mixed_case_id_echoes_uppercase() {
        let result = resolve_offline_mock("pt-Crit").expect("known id");
        assert_eq!(result.patient_id, "PT-CRIT");
        assert_eq!(result.priority, Priority::Stat);
        assert_eq!(result.findings[0], "Dense MCA Sign");
    }

    #[test]
    fn fixed_set_spans_stat_and_routine() {
        let priorities: Vec<_> = known_mock_ids()
            .filter_map(resolve_offline_mock)
            .map(|r| r.priority)
            .collect();
        assert_eq!(
            priorities.iter().filter(|p| **p == Priority::Stat).count(),
            3
        );
        assert_eq!(
            priorities.iter().filter(|p| **p == Priority::Routine).count(),
            1
        );
    }

    #[test]
    fn unknown_ids_have_no_match() {
        for id in ["", "PT-003", "PT-0011", " PT-001", "PT-PNEUMO", "pt_001"] {
            assert!(resolve_offline_mock(id).is_none(), "{id:?} should not match");
        }
    }

    #[test]
    fn confidences_match_fixture_values() {
        let confidence = |id: &str| resolve_offline_mock(id).map(|r| r.confidence);
        assert_eq!(confidence("PT-001"), Some(0.95));
        assert_eq!(confidence("PT-002"), Some(0.98));
        assert_eq!(confidence("PT-CRIT"), Some(0.88));
        assert_eq!(confidence("PT-PE"), Some(0.90));
    }
}
