//! DTOs shaped for the customer directory template.

use serde::{Deserialize, Serialize};

use crate::domain::customer::{Customer, CustomerDraft};
use crate::domain::types::{CustomerField, CustomerId};
use crate::pagination::PageNav;

/// Query parameters accepted by the directory page.
///
/// `view`, `edit` and `delete` carry the id of the record whose overlay is
/// open.
#[derive(Debug, Default, Deserialize)]
pub struct CustomersQuery {
    pub search: Option<String>,
    pub page: Option<usize>,
    pub view: Option<String>,
    pub edit: Option<String>,
    pub delete: Option<String>,
}

/// Table row with its position in the filtered set.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CustomerRow {
    /// 1-based position among all filtered customers, not the record id.
    pub index: usize,
    pub customer: Customer,
}

/// What the table body shows.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "state", content = "rows", rename_all = "snake_case")]
pub enum TableBody {
    /// The store has not finished loading.
    Loading,
    /// The store is ready but nothing matches the search.
    Empty,
    Rows(Vec<CustomerRow>),
}

/// Read-only snapshot shown in the details overlay.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CustomerDetails {
    pub customer: Customer,
    pub member_since: String,
}

impl From<Customer> for CustomerDetails {
    fn from(customer: Customer) -> Self {
        let member_since = customer.member_since();
        Self {
            customer,
            member_since,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct EditFieldView {
    pub name: &'static str,
    pub label: &'static str,
    pub value: String,
    pub input_type: &'static str,
}

/// Edit overlay inputs prefilled from the draft.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct EditFormView {
    pub id: CustomerId,
    pub fields: Vec<EditFieldView>,
}

impl From<&CustomerDraft> for EditFormView {
    fn from(draft: &CustomerDraft) -> Self {
        let fields = CustomerField::ALL
            .into_iter()
            .map(|field| EditFieldView {
                name: field.name(),
                label: field.label(),
                value: draft.value(field).to_string(),
                input_type: match field {
                    CustomerField::Email => "email",
                    _ => "text",
                },
            })
            .collect();

        Self {
            id: draft.id().clone(),
            fields,
        }
    }
}

/// Everything the directory template needs for one render.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DirectoryView {
    pub search: String,
    pub page: usize,
    pub body: TableBody,
    /// Present only when the filtered set spans more than one page.
    pub nav: Option<PageNav>,
    pub viewing: Option<CustomerDetails>,
    pub editing: Option<EditFormView>,
    pub deleting: Option<CustomerId>,
}

/// Location of the directory keeping the user's search and page.
#[derive(Debug, Default, Serialize)]
pub struct DirectoryLocation<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete: Option<&'a str>,
}

impl DirectoryLocation<'_> {
    pub const PATH: &'static str = "/admin/customers";

    /// Path plus encoded query string.
    pub fn to_url(&self) -> String {
        match serde_html_form::to_string(self) {
            Ok(query) if !query.is_empty() => format!("{}?{query}", Self::PATH),
            _ => Self::PATH.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_encodes_search_and_overlay() {
        let location = DirectoryLocation {
            search: Some("ka 99&x"),
            page: Some(2),
            edit: Some("c1"),
            delete: None,
        };

        assert_eq!(
            location.to_url(),
            "/admin/customers?search=ka+99%26x&page=2&edit=c1"
        );
    }

    #[test]
    fn empty_location_is_the_bare_path() {
        assert_eq!(DirectoryLocation::default().to_url(), "/admin/customers");
    }

    #[test]
    fn table_body_serializes_with_state_tag() {
        assert_eq!(
            serde_json::to_value(TableBody::Loading).unwrap(),
            serde_json::json!({"state": "loading"})
        );
        assert_eq!(
            serde_json::to_value(TableBody::Rows(vec![])).unwrap(),
            serde_json::json!({"state": "rows", "rows": []})
        );
    }

    #[test]
    fn edit_form_lists_fields_in_order() {
        let draft = CustomerDraft::empty(CustomerId::new("c1").unwrap())
            .with_field(CustomerField::Email, "a@b.c");

        let view = EditFormView::from(&draft);

        let names: Vec<_> = view.fields.iter().map(|f| f.name).collect();
        assert_eq!(
            names,
            vec!["customerName", "email", "phoneNumber", "vehicleNumber", "address", "city"]
        );
        assert_eq!(view.fields[1].value, "a@b.c");
        assert_eq!(view.fields[1].input_type, "email");
    }
}
