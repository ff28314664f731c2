//! Edit session controller: the record list, the optional edit target and the
//! bound form, reconciled against the store after every mutation.

use shared::domain::{Company, CompanyId};
use tracing::{debug, error, info, warn};

use crate::{error::SessionError, form::CompanyForm, CompanyStore};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionSnapshot {
    pub companies: Vec<Company>,
    pub editing: Option<Company>,
    pub form: CompanyForm,
    /// Bumped whenever the controller reseeds `form`.
    pub form_epoch: u64,
}

impl SessionSnapshot {
    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }
}

pub struct EditSession<S> {
    store: S,
    companies: Vec<Company>,
    editing: Option<Company>,
    form: CompanyForm,
    form_epoch: u64,
}

impl<S: CompanyStore> EditSession<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            companies: Vec::new(),
            editing: None,
            form: CompanyForm::default(),
            form_epoch: 0,
        }
    }

    pub fn companies(&self) -> &[Company] {
        &self.companies
    }

    pub fn editing(&self) -> Option<&Company> {
        self.editing.as_ref()
    }

    pub fn form(&self) -> &CompanyForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut CompanyForm {
        &mut self.form
    }

    /// Replaces the form contents with user input. Does not bump the epoch.
    pub fn set_form(&mut self, form: CompanyForm) {
        self.form = form;
    }

    pub fn form_epoch(&self) -> u64 {
        self.form_epoch
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            companies: self.companies.clone(),
            editing: self.editing.clone(),
            form: self.form.clone(),
            form_epoch: self.form_epoch,
        }
    }

    pub async fn refresh(&mut self) -> Result<(), SessionError> {
        match self.store.list().await {
            Ok(companies) => {
                debug!(count = companies.len(), "company list refreshed");
                self.companies = companies;
                Ok(())
            }
            Err(err) => {
                error!(operation = "list", %err, "error fetching companies");
                Err(err.into())
            }
        }
    }

    pub fn start_edit(&mut self, company: Company) {
        debug!(company_id = %company.id, "editing company");
        self.form = CompanyForm::for_company(&company);
        self.editing = Some(company);
        self.form_epoch += 1;
    }

    pub fn cancel_edit(&mut self) {
        self.reset_form();
    }

    /// Creates a company from the form, or updates the edit target when one is
    /// set. State is left untouched when the request fails.
    pub async fn submit(&mut self) -> Result<(), SessionError> {
        let draft = match self.form.to_draft() {
            Ok(draft) => draft,
            Err(err) => {
                warn!(%err, "submit ignored");
                return Err(err.into());
            }
        };

        let target = self.editing.as_ref().map(|company| company.id);
        let (operation, result) = match target {
            Some(company_id) => ("update", self.store.update(company_id, &draft).await),
            None => ("create", self.store.create(&draft).await),
        };

        let saved = match result {
            Ok(saved) => saved,
            Err(err) => {
                error!(operation, company_id = ?target, %err, "error saving company");
                return Err(err.into());
            }
        };
        info!(operation, company_id = %saved.id, "company saved");

        // A failed re-list is logged by refresh and does not undo the save.
        let _ = self.refresh().await;
        self.reset_form();
        Ok(())
    }

    pub async fn remove(&mut self, company_id: CompanyId) -> Result<(), SessionError> {
        if let Err(err) = self.store.delete(company_id).await {
            error!(operation = "delete", %company_id, %err, "error deleting company");
            return Err(err.into());
        }
        info!(operation = "delete", %company_id, "company deleted");

        let _ = self.refresh().await;
        Ok(())
    }

    fn reset_form(&mut self) {
        self.editing = None;
        self.form.clear();
        self.form_epoch += 1;
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
