use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{CustomerField, CustomerId};

/// Display format of the "Member Since" line.
pub const MEMBER_SINCE_FORMAT: &str = "%d/%m/%Y";

/// Text shown when a customer has no creation timestamp.
pub const MISSING_DATE: &str = "N/A";

/// Customer record as stored in the customer collection.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: CustomerId,
    pub customer_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub vehicle_number: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub created_at: Option<NaiveDateTime>,
}

impl Customer {
    /// Returns the value of an editable field, if present.
    pub fn field(&self, field: CustomerField) -> Option<&str> {
        match field {
            CustomerField::CustomerName => self.customer_name.as_deref(),
            CustomerField::Email => self.email.as_deref(),
            CustomerField::PhoneNumber => self.phone_number.as_deref(),
            CustomerField::VehicleNumber => self.vehicle_number.as_deref(),
            CustomerField::Address => self.address.as_deref(),
            CustomerField::City => self.city.as_deref(),
        }
    }

    /// Creation date rendered for the details overlay.
    pub fn member_since(&self) -> String {
        format_member_since(self.created_at)
    }
}

/// Formats a creation timestamp as `dd/mm/yyyy`, or `N/A` when absent.
pub fn format_member_since(created_at: Option<NaiveDateTime>) -> String {
    match created_at {
        Some(created_at) => created_at.format(MEMBER_SINCE_FORMAT).to_string(),
        None => MISSING_DATE.to_string(),
    }
}

fn normalize(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Customer attributes for a record the store has not seen yet.
///
/// The store assigns the identifier and the creation timestamp.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct NewCustomer {
    pub customer_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub vehicle_number: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
}

impl NewCustomer {
    #[must_use]
    pub fn new(
        customer_name: Option<String>,
        email: Option<String>,
        phone_number: Option<String>,
        vehicle_number: Option<String>,
        address: Option<String>,
        city: Option<String>,
    ) -> Self {
        Self {
            customer_name: normalize(customer_name),
            email: normalize(email),
            phone_number: normalize(phone_number),
            vehicle_number: normalize(vehicle_number),
            address: normalize(address),
            city: normalize(city),
        }
    }

    /// True when no attribute carries a value.
    pub fn is_blank(&self) -> bool {
        self.customer_name.is_none()
            && self.email.is_none()
            && self.phone_number.is_none()
            && self.vehicle_number.is_none()
            && self.address.is_none()
            && self.city.is_none()
    }
}

/// Full replacement of a customer's editable attributes. Never carries the id.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCustomer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}

impl UpdateCustomer {
    #[must_use]
    pub fn new(
        customer_name: Option<String>,
        email: Option<String>,
        phone_number: Option<String>,
        vehicle_number: Option<String>,
        address: Option<String>,
        city: Option<String>,
    ) -> Self {
        Self {
            customer_name: normalize(customer_name),
            email: normalize(email),
            phone_number: normalize(phone_number),
            vehicle_number: normalize(vehicle_number),
            address: normalize(address),
            city: normalize(city),
        }
    }
}

/// Uncommitted copy of a customer held by the edit overlay.
///
/// Every mutation produces a new draft; the record it was cloned from is never
/// touched. Committing splits the draft into the untouched id and the field
/// payload sent to the store.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDraft {
    id: CustomerId,
    customer_name: String,
    email: String,
    phone_number: String,
    vehicle_number: String,
    address: String,
    city: String,
}

impl CustomerDraft {
    /// Empty draft for the given record id.
    pub fn empty(id: CustomerId) -> Self {
        Self {
            id,
            customer_name: String::new(),
            email: String::new(),
            phone_number: String::new(),
            vehicle_number: String::new(),
            address: String::new(),
            city: String::new(),
        }
    }

    pub fn id(&self) -> &CustomerId {
        &self.id
    }

    /// Current value of a field as shown in the edit input.
    pub fn value(&self, field: CustomerField) -> &str {
        match field {
            CustomerField::CustomerName => &self.customer_name,
            CustomerField::Email => &self.email,
            CustomerField::PhoneNumber => &self.phone_number,
            CustomerField::VehicleNumber => &self.vehicle_number,
            CustomerField::Address => &self.address,
            CustomerField::City => &self.city,
        }
    }

    /// Returns a new draft with exactly one field replaced.
    #[must_use]
    pub fn with_field(self, field: CustomerField, value: impl Into<String>) -> Self {
        let value = value.into();
        match field {
            CustomerField::CustomerName => Self {
                customer_name: value,
                ..self
            },
            CustomerField::Email => Self {
                email: value,
                ..self
            },
            CustomerField::PhoneNumber => Self {
                phone_number: value,
                ..self
            },
            CustomerField::VehicleNumber => Self {
                vehicle_number: value,
                ..self
            },
            CustomerField::Address => Self {
                address: value,
                ..self
            },
            CustomerField::City => Self { city: value, ..self },
        }
    }

    /// Separates the id from the editable fields.
    pub fn commit(self) -> (CustomerId, UpdateCustomer) {
        let updates = UpdateCustomer::new(
            Some(self.customer_name),
            Some(self.email),
            Some(self.phone_number),
            Some(self.vehicle_number),
            Some(self.address),
            Some(self.city),
        );
        (self.id, updates)
    }
}

impl From<&Customer> for CustomerDraft {
    fn from(customer: &Customer) -> Self {
        CustomerField::ALL
            .into_iter()
            .fold(CustomerDraft::empty(customer.id.clone()), |draft, field| {
                let value = customer.field(field).unwrap_or_default().to_string();
                draft.with_field(field, value)
            })
    }
}
