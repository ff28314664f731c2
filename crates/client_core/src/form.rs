//! Field binding for the add/edit company form.

use shared::domain::{Company, CompanyDraft, DraftError};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyForm {
    pub name: String,
    pub location: String,
}

impl CompanyForm {
    pub fn for_company(company: &Company) -> Self {
        Self {
            name: company.name.clone(),
            location: company.location.clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.location.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.to_draft().is_ok()
    }

    /// Trimmed, validated request body for the current field values.
    pub fn to_draft(&self) -> Result<CompanyDraft, DraftError> {
        let draft = CompanyDraft::new(self.name.trim(), self.location.trim());
        draft.validate()?;
        Ok(draft)
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.location.clear();
    }
}
