//! UI layer for the desktop app: app shell plus the form and list panels.

pub mod app;
pub mod form;
pub mod list;

pub use app::CompanyAdminApp;
