//! Store abstraction for customer records and its Diesel implementation.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::db::{DbConnection, DbPool, get_connection};
use crate::domain::customer::{Customer, NewCustomer, UpdateCustomer};
use crate::domain::types::CustomerId;
use crate::repository::errors::RepositoryResult;

pub mod customer;
pub mod errors;
#[cfg(feature = "test-mocks")]
pub mod mock;

/// Read access to the customer collection.
pub trait CustomerReader {
    /// Whether the store finished its initial load and may be queried.
    fn is_ready(&self) -> bool;
    /// Current ordered snapshot of every customer.
    fn list_customers(&self) -> RepositoryResult<Vec<Customer>>;
    fn get_customer_by_id(&self, id: &CustomerId) -> RepositoryResult<Option<Customer>>;
}

/// Mutations delegated to the customer store.
pub trait CustomerWriter {
    /// Inserts new customers, returning the number of stored rows.
    fn create_customers(&self, new_customers: &[NewCustomer]) -> RepositoryResult<usize>;
    fn update_customer(&self, id: &CustomerId, updates: &UpdateCustomer) -> RepositoryResult<()>;
    fn delete_customer(&self, id: &CustomerId) -> RepositoryResult<()>;
}

/// Diesel-backed customer store shared by all workers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
    ready: Arc<AtomicBool>,
}

impl DieselRepository {
    /// Wraps the pool; the store stays not-ready until [`Self::mark_ready`].
    pub fn new(pool: DbPool) -> Self {
        Self {
            pool,
            ready: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    /// Flags the store as loaded for every clone of this repository.
    pub fn mark_ready(&self) {
        self.ready.store(true, Ordering::Release);
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}
