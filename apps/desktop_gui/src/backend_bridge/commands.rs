//! Backend commands queued from UI to backend worker.

use client_core::CompanyForm;
use shared::domain::{Company, CompanyId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCommand {
    Refresh,
    StartEdit { company: Company },
    CancelEdit,
    Submit { form: CompanyForm },
    Delete { company_id: CompanyId },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Refresh => "refresh",
            Self::StartEdit { .. } => "start_edit",
            Self::CancelEdit => "cancel_edit",
            Self::Submit { .. } => "submit",
            Self::Delete { .. } => "delete",
        }
    }
}
