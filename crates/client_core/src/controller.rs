//! One submit cycle: loading on, live call, fallback or failure, loading off.

use std::{
    ops::{Deref, DerefMut},
    sync::Arc,
};

use shared::{domain::ConnectionState, protocol::TriageRequest};
use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::{
    offline::resolve_offline_mock,
    render::{render_hard_failure, render_result, RenderedOutput},
    TriageService,
};

/// The surface a submission cycle drives.
pub trait TriageView {
    fn set_loading(&mut self, loading: bool);
    /// Replaces whatever output is currently displayed.
    fn show(&mut self, output: RenderedOutput);
    fn set_connection(&mut self, state: ConnectionState);
}

/// Form contents captured at the moment of submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TriageForm {
    pub patient_id: String,
    pub modality: String,
    pub clinical_history: String,
}

impl TriageForm {
    pub fn to_request(&self) -> TriageRequest {
        TriageRequest {
            patient_id: self.patient_id.clone(),
            modality: self.modality.clone(),
            clinical_history: self.clinical_history.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Live,
    Fallback,
    HardFailure,
}

/// Holds the view in loading state until dropped, on every exit path.
struct LoadingGuard<'a, V: TriageView + ?Sized> {
    view: &'a mut V,
}

impl<'a, V: TriageView + ?Sized> LoadingGuard<'a, V> {
    fn enter(view: &'a mut V) -> Self {
        view.set_loading(true);
        Self { view }
    }
}

impl<V: TriageView + ?Sized> Deref for LoadingGuard<'_, V> {
    type Target = V;

    fn deref(&self) -> &V {
        self.view
    }
}

impl<V: TriageView + ?Sized> DerefMut for LoadingGuard<'_, V> {
    fn deref_mut(&mut self) -> &mut V {
        self.view
    }
}

impl<V: TriageView + ?Sized> Drop for LoadingGuard<'_, V> {
    fn drop(&mut self) {
        self.view.set_loading(false);
    }
}

pub struct SubmissionController {
    service: Arc<dyn TriageService>,
    connection: ConnectionState,
}

impl SubmissionController {
    pub fn new(service: Arc<dyn TriageService>) -> Self {
        Self {
            service,
            connection: ConnectionState::Online,
        }
    }

    pub fn connection(&self) -> ConnectionState {
        self.connection
    }

    /// Runs one submit cycle against `view`.
    ///
    /// Live-call failures never escape: they fall back to the offline
    /// resolver, and an unknown identifier renders the failure panel.
    pub async fn submit<V>(&mut self, view: &mut V, form: &TriageForm) -> SubmitOutcome
    where
        V: TriageView + ?Sized,
    {
        let request = form.to_request();
        let span = info_span!(
            "triage_submission",
            submission_id = %Uuid::new_v4(),
            patient_id = %request.patient_id
        );

        async move {
            let mut view = LoadingGuard::enter(view);

            match self.service.triage(&request).await {
                Ok(result) => {
                    info!(priority = %result.priority, "live triage result received");
                    view.show(RenderedOutput::Result(render_result(&result)));
                    SubmitOutcome::Live
                }
                Err(err) => {
                    warn!(
                        error = %err,
                        timed_out = err.is_timeout(),
                        "triage service call failed; switching to offline mock mode"
                    );
                    match resolve_offline_mock(&request.patient_id) {
                        Some(mock) => {
                            view.show(RenderedOutput::Result(render_result(&mock)));
                            self.connection = ConnectionState::Offline;
                            view.set_connection(self.connection);
                            SubmitOutcome::Fallback
                        }
                        None => {
                            warn!("no offline mock data for patient id");
                            view.show(RenderedOutput::Failure(render_hard_failure(
                                &request.patient_id,
                            )));
                            SubmitOutcome::HardFailure
                        }
                    }
                }
            }
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
