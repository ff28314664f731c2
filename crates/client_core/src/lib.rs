use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use shared::{
    domain::{Company, CompanyDraft, CompanyId},
    protocol::{companies_route, company_route, DeleteAck},
};
use tracing::debug;

pub mod config;
pub mod error;
pub mod form;
pub mod session;

pub use config::{load_settings, ClientSettings};
pub use error::{ConfigError, SessionError, StoreError};
pub use form::CompanyForm;
pub use session::{EditSession, SessionSnapshot};

/// The companies REST resource as seen by the client.
///
/// Each call maps to exactly one HTTP request; there are no retries and no
/// caching, so the result of `list` is always the backend's current view.
#[async_trait]
pub trait CompanyStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Company>, StoreError>;
    async fn get(&self, company_id: CompanyId) -> Result<Company, StoreError>;
    async fn create(&self, draft: &CompanyDraft) -> Result<Company, StoreError>;
    async fn update(
        &self,
        company_id: CompanyId,
        draft: &CompanyDraft,
    ) -> Result<Company, StoreError>;
    async fn delete(&self, company_id: CompanyId) -> Result<(), StoreError>;
}

#[async_trait]
impl<T> CompanyStore for Arc<T>
where
    T: CompanyStore + ?Sized,
{
    async fn list(&self) -> Result<Vec<Company>, StoreError> {
        (**self).list().await
    }

    async fn get(&self, company_id: CompanyId) -> Result<Company, StoreError> {
        (**self).get(company_id).await
    }

    async fn create(&self, draft: &CompanyDraft) -> Result<Company, StoreError> {
        (**self).create(draft).await
    }

    async fn update(
        &self,
        company_id: CompanyId,
        draft: &CompanyDraft,
    ) -> Result<Company, StoreError> {
        (**self).update(company_id, draft).await
    }

    async fn delete(&self, company_id: CompanyId) -> Result<(), StoreError> {
        (**self).delete(company_id).await
    }
}

pub struct HttpCompanyStore {
    http: Client,
    base_url: String,
}

impl HttpCompanyStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn from_settings(settings: &ClientSettings) -> Self {
        Self::new(settings.api_base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, route: &str) -> String {
        format!("{}{route}", self.base_url)
    }
}

#[async_trait]
impl CompanyStore for HttpCompanyStore {
    async fn list(&self) -> Result<Vec<Company>, StoreError> {
        let url = self.url(companies_route());
        debug!(%url, "GET companies");
        let response = self.http.get(url).send().await?;
        read_json(ensure_success(response).await?).await
    }

    async fn get(&self, company_id: CompanyId) -> Result<Company, StoreError> {
        let url = self.url(&company_route(company_id));
        debug!(%url, "GET company");
        let response = self.http.get(url).send().await?;
        read_json(ensure_success(response).await?).await
    }

    async fn create(&self, draft: &CompanyDraft) -> Result<Company, StoreError> {
        let url = self.url(companies_route());
        debug!(%url, "POST company");
        let response = self.http.post(url).json(draft).send().await?;
        read_json(ensure_success(response).await?).await
    }

    async fn update(
        &self,
        company_id: CompanyId,
        draft: &CompanyDraft,
    ) -> Result<Company, StoreError> {
        let url = self.url(&company_route(company_id));
        debug!(%url, "PUT company");
        let response = self.http.put(url).json(draft).send().await?;
        read_json(ensure_success(response).await?).await
    }

    async fn delete(&self, company_id: CompanyId) -> Result<(), StoreError> {
        let url = self.url(&company_route(company_id));
        debug!(%url, "DELETE company");
        let response = self.http.delete(url).send().await?;
        let body = ensure_success(response).await?.text().await?;
        // The acknowledgement is informational; an empty or foreign body is fine.
        if let Ok(ack) = serde_json::from_str::<DeleteAck>(&body) {
            debug!(%company_id, message = %ack.message, "delete acknowledged");
        }
        Ok(())
    }
}

async fn ensure_success(response: Response) -> Result<Response, StoreError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = match response.text().await {
        Ok(body) => body,
        Err(err) => {
            debug!(status = status.as_u16(), %err, "failed to read error response body");
            String::new()
        }
    };
    Err(StoreError::RequestFailed {
        status: status.as_u16(),
        body,
    })
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, StoreError> {
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(StoreError::Decode)
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
