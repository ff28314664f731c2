//! Events sent from the backend worker to the UI thread.

use client_core::SessionSnapshot;

#[derive(Debug, Clone)]
pub enum UiEvent {
    /// Worker lifecycle status for the status bar.
    Info(String),
    SessionChanged(SessionSnapshot),
}
