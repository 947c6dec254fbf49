//! Screen state and its transitions in response to UI actions and backend events.

use client_core::{RenderedOutput, TriageForm};
use shared::domain::ConnectionState;

use crate::{backend_bridge::commands::BackendCommand, controller::events::UiEvent};

pub const MODALITIES: [&str; 4] = ["CXR", "CT_HEAD", "CT_PA", "MRI"];

#[derive(Debug, Clone, PartialEq)]
pub struct TriageScreen {
    pub form: TriageForm,
    pub loading: bool,
    pub output: Option<RenderedOutput>,
    pub connection: ConnectionState,
    pub status: String,
}

impl Default for TriageScreen {
    fn default() -> Self {
        Self {
            form: TriageForm {
                modality: MODALITIES[0].to_string(),
                ..Default::default()
            },
            loading: false,
            output: None,
            connection: ConnectionState::Online,
            status: "Starting backend worker...".to_string(),
        }
    }
}

impl TriageScreen {
    /// Snapshots the form into a submit command, or `None` while a cycle is
    /// already in flight. Marks the screen busy immediately so the button
    /// is disabled before the backend acknowledges.
    pub fn begin_submit(&mut self) -> Option<BackendCommand> {
        if self.loading {
            return None;
        }
        self.loading = true;
        Some(BackendCommand::Submit(self.form.clone()))
    }

    /// Undo `begin_submit` when the command never reached the backend.
    pub fn abort_submit(&mut self) {
        self.loading = false;
    }

    pub fn apply(&mut self, event: UiEvent) {
        match event {
            UiEvent::LoadingChanged(loading) => {
                self.loading = loading;
            }
            UiEvent::OutputReady(output) => {
                self.output = Some(output);
            }
            UiEvent::ConnectionChanged(state) => {
                self.connection = state;
            }
            UiEvent::Info(message) | UiEvent::Error(message) => {
                self.status = message;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use client_core::{
        render::{render_hard_failure, render_result},
        resolve_offline_mock,
    };

    use super::*;

    #[test]
    fn second_submit_is_ignored_while_loading() {
        let mut screen = TriageScreen::default();
        screen.form.patient_id = "PT-001".into();

        let first = screen.begin_submit();
        assert_eq!(first, Some(BackendCommand::Submit(screen.form.clone())));
        assert!(screen.loading);
        assert_eq!(screen.begin_submit(), None);

        screen.apply(UiEvent::LoadingChanged(true));
        screen.apply(UiEvent::LoadingChanged(false));
        assert!(screen.begin_submit().is_some());
    }

    #[test]
    fn submit_snapshots_fields_verbatim() {
        let mut screen = TriageScreen::default();
        screen.form.patient_id = "  pt-002 ".into();
        screen.form.clinical_history = String::new();

        match screen.begin_submit() {
            Some(BackendCommand::Submit(form)) => {
                assert_eq!(form.patient_id, "  pt-002 ");
                assert_eq!(form.modality, "CXR");
                assert_eq!(form.clinical_history, "");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn output_replaces_previous_output() {
        let mut screen = TriageScreen::default();
        let result = RenderedOutput::Result(render_result(
            &resolve_offline_mock("PT-001").expect("mock"),
        ));
        let failure = RenderedOutput::Failure(render_hard_failure("PT-9"));

        screen.apply(UiEvent::OutputReady(result.clone()));
        screen.apply(UiEvent::OutputReady(result.clone()));
        assert_eq!(screen.output, Some(result));

        screen.apply(UiEvent::OutputReady(failure.clone()));
        assert_eq!(screen.output, Some(failure));
    }

    #[test]
    fn connection_indicator_follows_backend() {
        let mut screen = TriageScreen::default();
        screen.apply(UiEvent::ConnectionChanged(ConnectionState::Offline));
        assert_eq!(screen.connection, ConnectionState::Offline);
    }

    #[test]
    fn abort_re_enables_submit() {
        let mut screen = TriageScreen::default();
        assert!(screen.begin_submit().is_some());
        screen.abort_submit();
        assert!(!screen.loading);
    }
}
