//! DTOs exposed by the JSON API endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::customer::Customer;

/// Query parameters accepted by `/api/v1/customers`.
#[derive(Debug, Default, Deserialize)]
pub struct CustomersApiQuery {
    /// Optional free-form search string applied to the customer list.
    pub search: Option<String>,
    /// Optional page number; the whole filtered list is returned when absent.
    pub page: Option<usize>,
}

/// Result payload returned by [`crate::services::api::list_customers`].
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomersResponse {
    /// Total number of customers matching the filter.
    pub total: usize,
    pub total_pages: usize,
    pub page: Option<usize>,
    pub customers: Vec<Customer>,
}
