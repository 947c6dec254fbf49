//! Projection of triage outcomes onto a complete, display-ready output value.
//!
//! Every call builds the whole output from scratch; views replace whatever they
//! showed before with the returned value.

use std::fmt;

use shared::protocol::TriageResult;

use crate::offline::known_mock_ids;

#[derive(Debug, Clone, PartialEq)]
pub enum RenderedOutput {
    Result(ResultPanel),
    Failure(FailurePanel),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultPanel {
    pub patient_id: String,
    pub priority_label: String,
    pub priority_class: String,
    pub confidence_label: String,
    pub findings: Vec<String>,
    pub recommendation: String,
    pub simulated: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailurePanel {
    pub title: String,
    pub message: String,
    pub hint: String,
}

/// Rounds `confidence` (0..=1) to a whole percentage, e.g. `0.95` -> `"95%"`.
pub fn format_confidence(confidence: f64) -> String {
    let percent = (confidence * 100.0).round() as i64;
    format!("{percent}%")
}

pub fn render_result(result: &TriageResult) -> ResultPanel {
    ResultPanel {
        patient_id: result.patient_id.clone(),
        priority_label: result.priority.display_label(),
        priority_class: result.priority.style_class(),
        confidence_label: format_confidence(result.confidence),
        findings: result.findings.clone(),
        recommendation: result.recommendation.clone(),
        simulated: result.is_simulated(),
    }
}

pub fn render_hard_failure(patient_id: &str) -> FailurePanel {
    let example = known_mock_ids().next().unwrap_or_default();
    FailurePanel {
        title: "System Error".to_string(),
        message: format!(
            "Failed to connect to the triage service, and no local mock data exists for patient ID '{patient_id}'."
        ),
        hint: format!("Please start the triage service or try a known test ID (e.g., {example})."),
    }
}

impl fmt::Display for ResultPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Patient: {}", self.patient_id)?;
        writeln!(f, "Priority: {} [{}]", self.priority_label, self.priority_class)?;
        writeln!(f, "Confidence: {}", self.confidence_label)?;
        writeln!(f, "Findings:")?;
        for (idx, finding) in self.findings.iter().enumerate() {
            writeln!(f, "  {}. {finding}", idx + 1)?;
        }
        write!(f, "Recommendation: {}", self.recommendation)
    }
}

impl fmt::Display for FailurePanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", self.message)?;
        write!(f, "{}", self.hint)
    }
}

impl fmt::Display for RenderedOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderedOutput::Result(panel) => fmt::Display::fmt(panel, f),
            RenderedOutput::Failure(panel) => fmt::Display::fmt(panel, f),
        }
    }
}
