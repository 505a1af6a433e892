//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::customer::{Customer, NewCustomer, UpdateCustomer};
use crate::domain::types::CustomerId;
use crate::repository::errors::RepositoryResult;
use crate::repository::{CustomerReader, CustomerWriter};

mock! {
    pub Repository {}

    impl CustomerReader for Repository {
        fn is_ready(&self) -> bool;
        fn list_customers(&self) -> RepositoryResult<Vec<Customer>>;
        fn get_customer_by_id(&self, id: &CustomerId) -> RepositoryResult<Option<Customer>>;
    }

    impl CustomerWriter for Repository {
        fn create_customers(&self, new_customers: &[NewCustomer]) -> RepositoryResult<usize>;
        fn update_customer(
            &self,
            id: &CustomerId,
            updates: &UpdateCustomer,
        ) -> RepositoryResult<()>;
        fn delete_customer(&self, id: &CustomerId) -> RepositoryResult<()>;
    }
}
