//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce basic invariants (non-empty identifiers, known field
//! names) so that once a value reaches the domain layer it can be treated as
//! trusted.
use std::fmt::{Display, Formatter};
use std::ops::Deref;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided name does not match any editable customer field.
    #[error("unknown customer field: {0}")]
    UnknownField(String),
}

/// Opaque identifier of a customer document assigned by the store.
///
/// The value is never generated or altered by the UI layer; it is read from
/// the store and handed back unchanged on update and delete.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct CustomerId(String);

impl CustomerId {
    /// Wraps a trimmed, non-empty identifier.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        Ok(Self(trimmed))
    }

    /// Borrow the identifier as a `&str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the owned inner `String`.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Deref for CustomerId {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for CustomerId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for CustomerId {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for CustomerId {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CustomerId> for String {
    fn from(value: CustomerId) -> Self {
        value.0
    }
}

/// Editable customer attributes, addressed by name from the edit form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CustomerField {
    CustomerName,
    Email,
    PhoneNumber,
    VehicleNumber,
    Address,
    City,
}

impl CustomerField {
    /// All editable fields in form order.
    pub const ALL: [CustomerField; 6] = [
        CustomerField::CustomerName,
        CustomerField::Email,
        CustomerField::PhoneNumber,
        CustomerField::VehicleNumber,
        CustomerField::Address,
        CustomerField::City,
    ];

    /// Name used by the edit form inputs and the JSON payloads.
    pub const fn name(self) -> &'static str {
        match self {
            CustomerField::CustomerName => "customerName",
            CustomerField::Email => "email",
            CustomerField::PhoneNumber => "phoneNumber",
            CustomerField::VehicleNumber => "vehicleNumber",
            CustomerField::Address => "address",
            CustomerField::City => "city",
        }
    }

    /// Human readable label shown next to the input.
    pub const fn label(self) -> &'static str {
        match self {
            CustomerField::CustomerName => "Customer Name",
            CustomerField::Email => "Email",
            CustomerField::PhoneNumber => "Phone Number",
            CustomerField::VehicleNumber => "Vehicle Number",
            CustomerField::Address => "Address",
            CustomerField::City => "City",
        }
    }
}

impl Display for CustomerField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CustomerField {
    type Err = TypeConstraintError;

    /// Accepts both the camelCase form names and snake_case column names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "customerName" | "customer_name" => Ok(CustomerField::CustomerName),
            "email" => Ok(CustomerField::Email),
            "phoneNumber" | "phone_number" => Ok(CustomerField::PhoneNumber),
            "vehicleNumber" | "vehicle_number" => Ok(CustomerField::VehicleNumber),
            "address" => Ok(CustomerField::Address),
            "city" => Ok(CustomerField::City),
            other => Err(TypeConstraintError::UnknownField(other.to_string())),
        }
    }
}
