use crate::dto::api::{CustomersApiQuery, CustomersResponse};
use crate::pagination::{CUSTOMERS_PER_PAGE, paginate, total_pages};
use crate::repository::CustomerReader;
use crate::search::filter_customers;
use crate::services::{ServiceError, ServiceResult};

/// Returns the filtered customer list, paginated when a page is requested.
pub fn list_customers<R>(repo: &R, params: CustomersApiQuery) -> ServiceResult<CustomersResponse>
where
    R: CustomerReader + ?Sized,
{
    if !repo.is_ready() {
        return Err(ServiceError::NotReady);
    }

    let customers = repo.list_customers().map_err(|err| {
        log::error!("Failed to list customers: {err}");
        ServiceError::from(err)
    })?;
    let filtered = filter_customers(customers, params.search.as_deref().unwrap_or_default());
    let total = filtered.len();

    let customers = match params.page {
        Some(page) => paginate(&filtered, CUSTOMERS_PER_PAGE, page).visible,
        None => filtered,
    };

    Ok(CustomersResponse {
        total,
        total_pages: total_pages(total, CUSTOMERS_PER_PAGE),
        page: params.page,
        customers,
    })
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::domain::customer::Customer;
    use crate::domain::types::CustomerId;
    use crate::repository::mock::MockRepository;

    fn customers(count: usize) -> Vec<Customer> {
        (1..=count)
            .map(|n| Customer {
                id: CustomerId::new(format!("c{n}")).expect("valid id"),
                customer_name: Some(format!("Customer {n}")),
                email: None,
                phone_number: None,
                vehicle_number: None,
                address: None,
                city: None,
                created_at: None,
            })
            .collect()
    }

    #[test]
    fn lists_requested_page() {
        let mut repo = MockRepository::new();
        repo.expect_is_ready().return_const(true);
        repo.expect_list_customers()
            .times(1)
            .returning(|| Ok(customers(12)));

        let response = list_customers(
            &repo,
            CustomersApiQuery {
                search: None,
                page: Some(3),
            },
        )
        .expect("should list");

        assert_eq!(response.total, 12);
        assert_eq!(response.total_pages, 3);
        assert_eq!(response.customers.len(), 2);
    }

    #[test]
    fn without_page_returns_every_match() {
        let mut repo = MockRepository::new();
        repo.expect_is_ready().return_const(true);
        repo.expect_list_customers()
            .returning(|| Ok(customers(12)));

        let response = list_customers(
            &repo,
            CustomersApiQuery {
                search: Some("customer 1".to_string()),
                page: None,
            },
        )
        .expect("should list");

        assert_eq!(response.total, 4);
        assert_eq!(response.customers.len(), 4);
    }

    #[test]
    fn not_ready_store_is_reported() {
        let mut repo = MockRepository::new();
        repo.expect_is_ready().return_const(false);
        repo.expect_list_customers().times(0);

        let result = list_customers(&repo, CustomersApiQuery::default());

        assert!(matches!(result, Err(ServiceError::NotReady)));
    }
}
