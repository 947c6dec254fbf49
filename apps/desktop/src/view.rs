//! Terminal rendition of the triage form's output surface.

use std::io::Write;

use client_core::{RenderedOutput, TriageView};
use shared::domain::ConnectionState;

pub struct TerminalView<W: Write, E: Write> {
    out: W,
    status: E,
    connection: ConnectionState,
}

impl<W: Write, E: Write> TerminalView<W, E> {
    pub fn new(out: W, status: E) -> Self {
        Self {
            out,
            status,
            connection: ConnectionState::Online,
        }
    }

    pub fn connection(&self) -> ConnectionState {
        self.connection
    }

    #[cfg(test)]
    fn into_parts(self) -> (W, E) {
        (self.out, self.status)
    }
}

// Write failures on stdout/stderr are not actionable from inside a view.
impl<W: Write, E: Write> TriageView for TerminalView<W, E> {
    fn set_loading(&mut self, loading: bool) {
        if loading {
            let _ = writeln!(self.status, "Submitting case for triage...");
        }
        let _ = self.status.flush();
    }

    fn show(&mut self, output: RenderedOutput) {
        let _ = writeln!(self.out, "{output}");
        if let RenderedOutput::Result(panel) = &output {
            if panel.simulated {
                let _ = writeln!(
                    self.status,
                    "note: result simulated locally; triage service unreachable"
                );
            }
        }
    }

    fn set_connection(&mut self, state: ConnectionState) {
        self.connection = state;
        let _ = writeln!(self.status, "[status] {}", state.label());
    }
}
