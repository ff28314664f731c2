use serde::{Deserialize, Serialize};

use crate::domain::CompanyId;

pub fn companies_route() -> &'static str {
    "/companies"
}

pub fn company_route(company_id: CompanyId) -> String {
    format!("{}/{}", companies_route(), company_id.0)
}

/// Acknowledgement returned by `DELETE /companies/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteAck {
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn company_route_appends_id() {
        assert_eq!(company_route(CompanyId(42)), "/companies/42");
    }

    #[test]
    fn delete_ack_tolerates_missing_message() {
        let ack: DeleteAck = serde_json::from_str("{}").expect("ack");
        assert!(ack.message.is_empty());
    }
}
