//! UI layer for the desktop triage client.

pub mod app;

pub use app::TriageApp;
