use std::sync::atomic::Ordering;

use chrono::{TimeDelta, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::customer::{Customer, NewCustomer, UpdateCustomer};
use crate::domain::types::CustomerId;
use crate::models::customer::{
    Customer as DbCustomer, NewCustomer as DbNewCustomer, UpdateCustomer as DbUpdateCustomer,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{CustomerReader, CustomerWriter, DieselRepository};

impl CustomerReader for DieselRepository {
    fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    fn list_customers(&self) -> RepositoryResult<Vec<Customer>> {
        use crate::schema::customers;

        let mut conn = self.conn()?;
        customers::table
            .order((customers::created_at.asc(), customers::id.asc()))
            .select(DbCustomer::as_select())
            .load::<DbCustomer>(&mut conn)?
            .into_iter()
            .map(|customer| Customer::try_from(customer).map_err(RepositoryError::from))
            .collect()
    }

    fn get_customer_by_id(&self, id: &CustomerId) -> RepositoryResult<Option<Customer>> {
        use crate::schema::customers;

        let mut conn = self.conn()?;
        let customer = customers::table
            .find(id.as_str())
            .select(DbCustomer::as_select())
            .first::<DbCustomer>(&mut conn)
            .optional()?;

        customer
            .map(|customer| Customer::try_from(customer).map_err(RepositoryError::from))
            .transpose()
    }
}

impl CustomerWriter for DieselRepository {
    fn create_customers(&self, new_customers: &[NewCustomer]) -> RepositoryResult<usize> {
        use crate::schema::customers;

        if new_customers.is_empty() {
            return Ok(0);
        }

        let mut conn = self.conn()?;
        let now = Utc::now().naive_utc();
        // Rows of one batch get increasing timestamps so listing keeps input order.
        let insertables: Vec<DbNewCustomer> = new_customers
            .iter()
            .zip(0..)
            .map(|(new, offset)| {
                let created_at = now + TimeDelta::microseconds(offset);
                DbNewCustomer::from_domain(Uuid::new_v4().to_string(), created_at, new)
            })
            .collect();

        let affected = diesel::insert_into(customers::table)
            .values(&insertables)
            .execute(&mut conn)?;

        Ok(affected)
    }

    fn update_customer(&self, id: &CustomerId, updates: &UpdateCustomer) -> RepositoryResult<()> {
        use crate::schema::customers;

        let mut conn = self.conn()?;
        let changes: DbUpdateCustomer = updates.into();

        let affected = diesel::update(customers::table.find(id.as_str()))
            .set(&changes)
            .execute(&mut conn)?;

        match affected {
            0 => Err(RepositoryError::NotFound),
            _ => Ok(()),
        }
    }

    fn delete_customer(&self, id: &CustomerId) -> RepositoryResult<()> {
        use crate::schema::customers;

        let mut conn = self.conn()?;
        let affected = diesel::delete(customers::table.find(id.as_str())).execute(&mut conn)?;

        match affected {
            0 => Err(RepositoryError::NotFound),
            _ => Ok(()),
        }
    }
}
