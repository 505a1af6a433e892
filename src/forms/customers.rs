use std::io::Read;

use actix_multipart::form::{MultipartForm, tempfile::TempFile};
use serde::Deserialize;

use crate::domain::customer::NewCustomer;
use crate::domain::types::{CustomerField, CustomerId};
use crate::forms::FormError;

/// Edit overlay submission.
///
/// Inputs missing from the request keep the stored value; submitted empty
/// inputs clear the field.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditCustomerForm {
    pub id: String,
    pub customer_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub vehicle_number: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    /// Directory search to return to.
    pub search: Option<String>,
    pub page: Option<usize>,
}

impl EditCustomerForm {
    pub fn customer_id(&self) -> Result<CustomerId, FormError> {
        CustomerId::new(self.id.as_str()).map_err(|_| FormError::InvalidCustomerId)
    }

    /// Submitted fields paired with their values, in form order.
    pub fn submitted_fields(&self) -> Vec<(CustomerField, &str)> {
        CustomerField::ALL
            .into_iter()
            .filter_map(|field| {
                let value = match field {
                    CustomerField::CustomerName => &self.customer_name,
                    CustomerField::Email => &self.email,
                    CustomerField::PhoneNumber => &self.phone_number,
                    CustomerField::VehicleNumber => &self.vehicle_number,
                    CustomerField::Address => &self.address,
                    CustomerField::City => &self.city,
                };
                value.as_deref().map(|value| (field, value))
            })
            .collect()
    }
}

/// Delete confirmation submission.
#[derive(Debug, Default, Deserialize)]
pub struct DeleteCustomerForm {
    pub id: String,
    pub search: Option<String>,
    pub page: Option<usize>,
}

impl DeleteCustomerForm {
    pub fn customer_id(&self) -> Result<CustomerId, FormError> {
        CustomerId::new(self.id.as_str()).map_err(|_| FormError::InvalidCustomerId)
    }
}

#[derive(MultipartForm)]
pub struct UploadCustomersForm {
    #[multipart(limit = "10MB")]
    pub csv: TempFile,
}

impl UploadCustomersForm {
    /// Parses the uploaded file into customers ready for insertion.
    pub fn parse(&mut self) -> Result<Vec<NewCustomer>, FormError> {
        let file = self.csv.file.reopen()?;
        parse_customers_csv(file)
    }
}

/// Reads customers from CSV with a header row.
///
/// Headers are matched by field name in camelCase or snake_case; other columns
/// are ignored. Rows with no values are skipped.
pub fn parse_customers_csv<R: Read>(reader: R) -> Result<Vec<NewCustomer>, FormError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let columns: Vec<Option<CustomerField>> = rdr
        .headers()?
        .iter()
        .map(|header| header.parse().ok())
        .collect();

    if columns.iter().all(Option::is_none) {
        return Err(FormError::MissingColumns);
    }

    let mut customers = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let mut values: [Option<String>; 6] = Default::default();

        for (column, value) in columns.iter().zip(record.iter()) {
            if let Some(field) = column {
                let slot = CustomerField::ALL
                    .iter()
                    .position(|candidate| candidate == field);
                if let Some(slot) = slot {
                    values[slot] = Some(value.to_string());
                }
            }
        }

        let [customer_name, email, phone_number, vehicle_number, address, city] = values;
        let customer = NewCustomer::new(
            customer_name,
            email,
            phone_number,
            vehicle_number,
            address,
            city,
        );
        if !customer.is_blank() {
            customers.push(customer);
        }
    }

    Ok(customers)
}
