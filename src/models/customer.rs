use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::customer::{
    Customer as DomainCustomer, NewCustomer as DomainNewCustomer,
    UpdateCustomer as DomainUpdateCustomer,
};
use crate::domain::types::{CustomerId, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::customers)]
/// Diesel model for [`crate::domain::customer::Customer`].
pub struct Customer {
    pub id: String,
    pub customer_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub vehicle_number: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::customers)]
/// Insertable form of [`Customer`]. The id is generated by the repository.
pub struct NewCustomer<'a> {
    pub id: String,
    pub customer_name: Option<&'a str>,
    pub email: Option<&'a str>,
    pub phone_number: Option<&'a str>,
    pub vehicle_number: Option<&'a str>,
    pub address: Option<&'a str>,
    pub city: Option<&'a str>,
    pub created_at: Option<NaiveDateTime>,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::customers)]
#[diesel(treat_none_as_null = true)]
/// Full replacement of the editable columns; `None` clears a column.
pub struct UpdateCustomer<'a> {
    pub customer_name: Option<&'a str>,
    pub email: Option<&'a str>,
    pub phone_number: Option<&'a str>,
    pub vehicle_number: Option<&'a str>,
    pub address: Option<&'a str>,
    pub city: Option<&'a str>,
}

impl TryFrom<Customer> for DomainCustomer {
    type Error = TypeConstraintError;

    fn try_from(customer: Customer) -> Result<Self, Self::Error> {
        Ok(Self {
            id: CustomerId::new(customer.id)?,
            customer_name: customer.customer_name,
            email: customer.email,
            phone_number: customer.phone_number,
            vehicle_number: customer.vehicle_number,
            address: customer.address,
            city: customer.city,
            created_at: customer.created_at,
        })
    }
}

impl<'a> NewCustomer<'a> {
    /// Builds the insertable row for a domain customer under a store-assigned id.
    pub fn from_domain(id: String, created_at: NaiveDateTime, new: &'a DomainNewCustomer) -> Self {
        Self {
            id,
            customer_name: new.customer_name.as_deref(),
            email: new.email.as_deref(),
            phone_number: new.phone_number.as_deref(),
            vehicle_number: new.vehicle_number.as_deref(),
            address: new.address.as_deref(),
            city: new.city.as_deref(),
            created_at: Some(created_at),
        }
    }
}

impl<'a> From<&'a DomainUpdateCustomer> for UpdateCustomer<'a> {
    fn from(updates: &'a DomainUpdateCustomer) -> Self {
        Self {
            customer_name: updates.customer_name.as_deref(),
            email: updates.email.as_deref(),
            phone_number: updates.phone_number.as_deref(),
            vehicle_number: updates.vehicle_number.as_deref(),
            address: updates.address.as_deref(),
            city: updates.city.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn customer_into_domain() {
        let now: NaiveDateTime = Utc::now().naive_utc();
        let db_customer = Customer {
            id: "c1".to_string(),
            customer_name: Some("Asha".to_string()),
            email: None,
            phone_number: Some("98200".to_string()),
            vehicle_number: Some("MH05AB1234".to_string()),
            address: None,
            city: Some("Kalyan".to_string()),
            created_at: Some(now),
        };

        let domain = DomainCustomer::try_from(db_customer).expect("valid customer");

        assert_eq!(domain.id.as_str(), "c1");
        assert_eq!(domain.customer_name.as_deref(), Some("Asha"));
        assert_eq!(domain.email, None);
        assert_eq!(domain.vehicle_number.as_deref(), Some("MH05AB1234"));
        assert_eq!(domain.created_at, Some(now));
    }

    #[test]
    fn customer_with_blank_id_is_rejected() {
        let db_customer = Customer {
            id: " ".to_string(),
            customer_name: None,
            email: None,
            phone_number: None,
            vehicle_number: None,
            address: None,
            city: None,
            created_at: None,
        };

        assert!(DomainCustomer::try_from(db_customer).is_err());
    }

    #[test]
    fn from_domain_new_borrows_fields() {
        let now: NaiveDateTime = Utc::now().naive_utc();
        let domain = DomainNewCustomer::new(
            Some("Asha".to_string()),
            Some("asha@example.com".to_string()),
            None,
            Some("MH05AB1234".to_string()),
            None,
            None,
        );

        let new = NewCustomer::from_domain("generated".to_string(), now, &domain);

        assert_eq!(new.id, "generated");
        assert_eq!(new.customer_name, Some("Asha"));
        assert_eq!(new.email, Some("asha@example.com"));
        assert_eq!(new.phone_number, None);
        assert_eq!(new.created_at, Some(now));
    }

    #[test]
    fn from_domain_update_keeps_cleared_fields_as_none() {
        let domain = DomainUpdateCustomer::new(
            Some("Asha".to_string()),
            Some(String::new()),
            None,
            None,
            None,
            Some("Thane".to_string()),
        );

        let update: UpdateCustomer = (&domain).into();

        assert_eq!(update.customer_name, Some("Asha"));
        assert_eq!(update.email, None);
        assert_eq!(update.city, Some("Thane"));
    }
}
