//! Backend commands queued from UI to backend worker.

use client_core::TriageForm;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCommand {
    Submit(TriageForm),
    CheckStatus,
}
