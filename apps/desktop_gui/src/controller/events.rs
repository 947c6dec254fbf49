//! Backend-to-UI events.

use client_core::RenderedOutput;
use shared::domain::ConnectionState;

#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    LoadingChanged(bool),
    OutputReady(RenderedOutput),
    ConnectionChanged(ConnectionState),
    Info(String),
    Error(String),
}
