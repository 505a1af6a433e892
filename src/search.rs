//! Client-side search over the customer snapshot.

use crate::domain::customer::Customer;
use crate::domain::types::CustomerField;

/// Fields consulted by the directory search box.
pub const SEARCHABLE_FIELDS: [CustomerField; 4] = [
    CustomerField::CustomerName,
    CustomerField::Email,
    CustomerField::PhoneNumber,
    CustomerField::VehicleNumber,
];

/// True when any searchable field contains `needle` ignoring case.
///
/// `needle` must already be lower-cased. Missing fields never match a
/// non-empty needle.
fn matches(customer: &Customer, needle: &str) -> bool {
    SEARCHABLE_FIELDS.iter().any(|&field| {
        customer
            .field(field)
            .unwrap_or_default()
            .to_lowercase()
            .contains(needle)
    })
}

/// Keeps the customers matching `query`, preserving their order.
///
/// An empty query keeps everything.
pub fn filter_customers(customers: Vec<Customer>, query: &str) -> Vec<Customer> {
    if query.is_empty() {
        return customers;
    }
    let needle = query.to_lowercase();
    customers
        .into_iter()
        .filter(|customer| matches(customer, &needle))
        .collect()
}
