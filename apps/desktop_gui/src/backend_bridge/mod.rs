//! Bridge between the UI thread and the backend worker that owns the edit session.

pub mod commands;
pub mod runtime;
