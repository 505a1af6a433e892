//! Admin customer directory: search, paging and the view/edit/delete overlays.
//!
//! [`CustomerDirectory`] owns only transient UI state. The customer collection
//! and both mutations come from the injected store, and every render re-reads
//! the store instead of patching a local copy.

use crate::domain::customer::{Customer, CustomerDraft};
use crate::domain::types::{CustomerField, CustomerId};
use crate::dto::customers::{
    CustomerDetails, CustomerRow, DirectoryView, EditFormView, TableBody,
};
use crate::pagination::{CUSTOMERS_PER_PAGE, PageNav, page_start, paginate, total_pages};
use crate::repository::errors::RepositoryError;
use crate::repository::{CustomerReader, CustomerWriter};
use crate::search::filter_customers;
use crate::services::{ServiceError, ServiceResult};

#[derive(Debug, Clone, PartialEq)]
pub enum ViewOverlay {
    Closed,
    Open(Customer),
}

#[derive(Debug, Clone, PartialEq)]
pub enum EditOverlay {
    Closed,
    Open(CustomerDraft),
}

#[derive(Debug, Clone, PartialEq)]
pub enum DeleteFlow {
    Idle,
    Confirming(CustomerId),
}

fn persistence_failure(action: &str, err: RepositoryError) -> ServiceError {
    log::error!("Failed to {action} customer: {err}");
    ServiceError::PersistenceFailure(err.to_string())
}

pub struct CustomerDirectory<'a, S: ?Sized> {
    store: &'a S,
    search_term: String,
    current_page: usize,
    view: ViewOverlay,
    edit: EditOverlay,
    delete: DeleteFlow,
}

impl<'a, S> CustomerDirectory<'a, S>
where
    S: CustomerReader + CustomerWriter + ?Sized,
{
    pub fn new(store: &'a S) -> Self {
        Self {
            store,
            search_term: String::new(),
            current_page: 1,
            view: ViewOverlay::Closed,
            edit: EditOverlay::Closed,
            delete: DeleteFlow::Idle,
        }
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn view_overlay(&self) -> &ViewOverlay {
        &self.view
    }

    pub fn edit_overlay(&self) -> &EditOverlay {
        &self.edit
    }

    pub fn delete_flow(&self) -> &DeleteFlow {
        &self.delete
    }

    fn ensure_ready(&self) -> ServiceResult<()> {
        if self.store.is_ready() {
            Ok(())
        } else {
            Err(ServiceError::NotReady)
        }
    }

    fn filtered(&self) -> ServiceResult<Vec<Customer>> {
        self.ensure_ready()?;
        let customers = self.store.list_customers()?;
        Ok(filter_customers(customers, &self.search_term))
    }

    fn find(&self, id: &CustomerId) -> ServiceResult<Customer> {
        self.ensure_ready()?;
        self.store
            .get_customer_by_id(id)?
            .ok_or(ServiceError::NotFound)
    }

    /// Replaces the search text and goes back to the first page.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.current_page = 1;
    }

    /// Moves to `page` when it exists for the current search.
    ///
    /// Returns `false` and keeps the current page for out-of-range requests.
    pub fn change_page(&mut self, page: usize) -> ServiceResult<bool> {
        let total_items = self.filtered()?.len();
        Ok(self.accept_page(page, total_items))
    }

    fn accept_page(&mut self, page: usize, total_items: usize) -> bool {
        if page == 0 || page > total_pages(total_items, CUSTOMERS_PER_PAGE) {
            return false;
        }
        self.current_page = page;
        true
    }

    pub fn open_view(&mut self, id: &CustomerId) -> ServiceResult<()> {
        let customer = self.find(id)?;
        self.view = ViewOverlay::Open(customer);
        Ok(())
    }

    pub fn close_view(&mut self) {
        self.view = ViewOverlay::Closed;
    }

    /// Starts editing a fresh draft cloned from the stored record.
    pub fn open_edit(&mut self, id: &CustomerId) -> ServiceResult<()> {
        let customer = self.find(id)?;
        self.edit = EditOverlay::Open(CustomerDraft::from(&customer));
        Ok(())
    }

    /// Reopens the edit overlay with a draft that was not read from the store.
    pub fn resume_edit(&mut self, draft: CustomerDraft) {
        self.edit = EditOverlay::Open(draft);
    }

    /// Replaces one draft field. Returns `false` when no draft is open.
    pub fn edit_field(&mut self, field: CustomerField, value: impl Into<String>) -> bool {
        match std::mem::replace(&mut self.edit, EditOverlay::Closed) {
            EditOverlay::Open(draft) => {
                self.edit = EditOverlay::Open(draft.with_field(field, value));
                true
            }
            EditOverlay::Closed => false,
        }
    }

    pub fn cancel_edit(&mut self) {
        self.edit = EditOverlay::Closed;
    }

    /// Sends the draft to the store and closes the overlay on success.
    ///
    /// On failure the draft stays open so the user can retry or cancel.
    pub fn submit_edit(&mut self) -> ServiceResult<()> {
        let EditOverlay::Open(draft) = &self.edit else {
            return Ok(());
        };
        self.ensure_ready()?;

        let (id, updates) = draft.clone().commit();
        self.store
            .update_customer(&id, &updates)
            .map_err(|err| persistence_failure("update", err))?;

        log::info!("Updated customer {id}");
        self.edit = EditOverlay::Closed;
        Ok(())
    }

    /// First phase of deletion: remember the target and ask for confirmation.
    pub fn request_delete(&mut self, id: CustomerId) {
        self.delete = DeleteFlow::Confirming(id);
    }

    pub fn cancel_delete(&mut self) {
        self.delete = DeleteFlow::Idle;
    }

    /// Second phase of deletion: delete the remembered target.
    ///
    /// On failure the prompt stays open with the same target.
    pub fn confirm_delete(&mut self) -> ServiceResult<()> {
        let DeleteFlow::Confirming(id) = &self.delete else {
            return Ok(());
        };
        self.ensure_ready()?;

        self.store
            .delete_customer(id)
            .map_err(|err| persistence_failure("delete", err))?;

        log::info!("Deleted customer {id}");
        self.delete = DeleteFlow::Idle;
        Ok(())
    }

    /// Builds the table, navigation and overlays from a fresh store snapshot.
    pub fn render(&self) -> ServiceResult<DirectoryView> {
        if !self.store.is_ready() {
            return Ok(self.build_view(None));
        }
        let filtered = self.filtered()?;
        Ok(self.build_view(Some(filtered.as_slice())))
    }

    /// Moves to `page` when it exists and renders, reading the store once.
    pub fn render_page(&mut self, page: usize) -> ServiceResult<DirectoryView> {
        if !self.store.is_ready() {
            return Ok(self.build_view(None));
        }
        let filtered = self.filtered()?;
        self.accept_page(page, filtered.len());
        Ok(self.build_view(Some(filtered.as_slice())))
    }

    /// `None` stands for a store that has not finished loading.
    fn build_view(&self, filtered: Option<&[Customer]>) -> DirectoryView {
        let (body, nav) = match filtered {
            None => (TableBody::Loading, None),
            Some(filtered) => {
                let page = paginate(filtered, CUSTOMERS_PER_PAGE, self.current_page);
                let start = page_start(self.current_page, CUSTOMERS_PER_PAGE);

                let body = if page.visible.is_empty() {
                    TableBody::Empty
                } else {
                    TableBody::Rows(
                        page.visible
                            .into_iter()
                            .enumerate()
                            .map(|(offset, customer)| CustomerRow {
                                index: start + offset + 1,
                                customer,
                            })
                            .collect(),
                    )
                };
                let nav = (filtered.len() > CUSTOMERS_PER_PAGE).then(|| {
                    PageNav::new(self.current_page, CUSTOMERS_PER_PAGE, filtered.len())
                });
                (body, nav)
            }
        };

        DirectoryView {
            search: self.search_term.clone(),
            page: self.current_page,
            body,
            nav,
            viewing: match &self.view {
                ViewOverlay::Open(customer) => Some(CustomerDetails::from(customer.clone())),
                ViewOverlay::Closed => None,
            },
            editing: match &self.edit {
                EditOverlay::Open(draft) => Some(EditFormView::from(draft)),
                EditOverlay::Closed => None,
            },
            deleting: match &self.delete {
                DeleteFlow::Confirming(id) => Some(id.clone()),
                DeleteFlow::Idle => None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;
    use crate::domain::customer::{NewCustomer, UpdateCustomer};
    use crate::repository::errors::RepositoryResult;

    #[derive(Default)]
    struct FakeStore {
        not_ready: Cell<bool>,
        fail_writes: Cell<bool>,
        list_calls: Cell<usize>,
        customers: RefCell<Vec<Customer>>,
        updates: RefCell<Vec<(CustomerId, UpdateCustomer)>>,
        deletes: RefCell<Vec<CustomerId>>,
    }

    impl FakeStore {
        fn with_customers(customers: Vec<Customer>) -> Self {
            let store = Self::default();
            store.customers.replace(customers);
            store
        }
    }

    impl CustomerReader for FakeStore {
        fn is_ready(&self) -> bool {
            !self.not_ready.get()
        }

        fn list_customers(&self) -> RepositoryResult<Vec<Customer>> {
            self.list_calls.set(self.list_calls.get() + 1);
            Ok(self.customers.borrow().clone())
        }

        fn get_customer_by_id(&self, id: &CustomerId) -> RepositoryResult<Option<Customer>> {
            Ok(self
                .customers
                .borrow()
                .iter()
                .find(|customer| &customer.id == id)
                .cloned())
        }
    }

    impl CustomerWriter for FakeStore {
        fn create_customers(&self, new_customers: &[NewCustomer]) -> RepositoryResult<usize> {
            Ok(new_customers.len())
        }

        fn update_customer(
            &self,
            id: &CustomerId,
            updates: &UpdateCustomer,
        ) -> RepositoryResult<()> {
            if self.fail_writes.get() {
                return Err(RepositoryError::DatabaseError("disk I/O error".to_string()));
            }
            self.updates.borrow_mut().push((id.clone(), updates.clone()));
            Ok(())
        }

        fn delete_customer(&self, id: &CustomerId) -> RepositoryResult<()> {
            if self.fail_writes.get() {
                return Err(RepositoryError::DatabaseError("disk I/O error".to_string()));
            }
            self.deletes.borrow_mut().push(id.clone());
            Ok(())
        }
    }

    fn id(value: &str) -> CustomerId {
        CustomerId::new(value).unwrap()
    }

    fn customer(value: &str, name: &str) -> Customer {
        Customer {
            id: id(value),
            customer_name: Some(name.to_string()),
            email: None,
            phone_number: None,
            vehicle_number: None,
            address: None,
            city: None,
            created_at: None,
        }
    }

    fn many(count: usize) -> Vec<Customer> {
        (1..=count)
            .map(|n| customer(&format!("c{n}"), &format!("Customer {n}")))
            .collect()
    }

    fn rows(view: &DirectoryView) -> Vec<(usize, String)> {
        match &view.body {
            TableBody::Rows(rows) => rows
                .iter()
                .map(|row| (row.index, row.customer.id.to_string()))
                .collect(),
            other => panic!("expected rows, got {other:?}"),
        }
    }

    #[test]
    fn cancelling_edit_leaves_stored_record_untouched() {
        let store = FakeStore::with_customers(vec![customer("c1", "A")]);
        let mut directory = CustomerDirectory::new(&store);

        directory.open_edit(&id("c1")).unwrap();
        assert!(directory.edit_field(CustomerField::CustomerName, "Changed"));
        directory.cancel_edit();

        assert_eq!(directory.edit_overlay(), &EditOverlay::Closed);
        assert_eq!(
            store.customers.borrow()[0].customer_name.as_deref(),
            Some("A")
        );
        assert!(store.updates.borrow().is_empty());
    }

    #[test]
    fn submitting_edit_sends_fields_without_id() {
        let store = FakeStore::with_customers(vec![customer("c1", "A")]);
        let mut directory = CustomerDirectory::new(&store);

        directory.open_edit(&id("c1")).unwrap();
        directory.edit_field(CustomerField::CustomerName, "B");
        directory.edit_field(CustomerField::Email, "b@x.com");
        directory.submit_edit().unwrap();

        let updates = store.updates.borrow();
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].0, id("c1"));
        assert_eq!(
            serde_json::to_value(&updates[0].1).unwrap(),
            serde_json::json!({"customerName": "B", "email": "b@x.com"})
        );
        assert_eq!(directory.edit_overlay(), &EditOverlay::Closed);
    }

    #[test]
    fn failed_submit_keeps_draft_open() {
        let store = FakeStore::with_customers(vec![customer("c1", "A")]);
        store.fail_writes.set(true);
        let mut directory = CustomerDirectory::new(&store);

        directory.open_edit(&id("c1")).unwrap();
        directory.edit_field(CustomerField::CustomerName, "B");
        let result = directory.submit_edit();

        assert!(matches!(result, Err(ServiceError::PersistenceFailure(_))));
        match directory.edit_overlay() {
            EditOverlay::Open(draft) => {
                assert_eq!(draft.value(CustomerField::CustomerName), "B")
            }
            EditOverlay::Closed => panic!("draft should stay open"),
        }
    }

    #[test]
    fn edit_field_without_open_draft_is_ignored() {
        let store = FakeStore::default();
        let mut directory = CustomerDirectory::new(&store);

        assert!(!directory.edit_field(CustomerField::City, "Pune"));
        assert!(directory.submit_edit().is_ok());
        assert!(store.updates.borrow().is_empty());
    }

    #[test]
    fn delete_then_cancel_never_deletes() {
        let store = FakeStore::with_customers(vec![customer("c1", "A")]);
        let mut directory = CustomerDirectory::new(&store);

        directory.request_delete(id("c1"));
        assert_eq!(directory.delete_flow(), &DeleteFlow::Confirming(id("c1")));
        directory.cancel_delete();
        directory.confirm_delete().unwrap();

        assert!(store.deletes.borrow().is_empty());
        assert_eq!(directory.delete_flow(), &DeleteFlow::Idle);
    }

    #[test]
    fn delete_then_confirm_deletes_selected_id_once() {
        let store = FakeStore::with_customers(vec![customer("c1", "A"), customer("c2", "B")]);
        let mut directory = CustomerDirectory::new(&store);

        directory.request_delete(id("c2"));
        directory.confirm_delete().unwrap();
        directory.confirm_delete().unwrap();

        assert_eq!(*store.deletes.borrow(), vec![id("c2")]);
        assert_eq!(directory.delete_flow(), &DeleteFlow::Idle);
    }

    #[test]
    fn failed_delete_keeps_prompt_open() {
        let store = FakeStore::with_customers(vec![customer("c1", "A")]);
        store.fail_writes.set(true);
        let mut directory = CustomerDirectory::new(&store);

        directory.request_delete(id("c1"));

        assert!(matches!(
            directory.confirm_delete(),
            Err(ServiceError::PersistenceFailure(_))
        ));
        assert_eq!(directory.delete_flow(), &DeleteFlow::Confirming(id("c1")));
    }

    #[test]
    fn mutations_before_ready_fail_with_not_ready() {
        let store = FakeStore::with_customers(vec![customer("c1", "A")]);
        store.not_ready.set(true);
        let mut directory = CustomerDirectory::new(&store);

        assert!(matches!(
            directory.open_edit(&id("c1")),
            Err(ServiceError::NotReady)
        ));
        directory.request_delete(id("c1"));
        assert!(matches!(
            directory.confirm_delete(),
            Err(ServiceError::NotReady)
        ));
        assert_eq!(directory.delete_flow(), &DeleteFlow::Confirming(id("c1")));
        assert!(store.deletes.borrow().is_empty());
    }

    #[test]
    fn render_shows_loading_until_store_is_ready() {
        let store = FakeStore::with_customers(many(3));
        store.not_ready.set(true);
        let directory = CustomerDirectory::new(&store);

        let view = directory.render().unwrap();

        assert_eq!(view.body, TableBody::Loading);
        assert!(view.nav.is_none());
    }

    #[test]
    fn render_shows_empty_state_when_nothing_matches() {
        let store = FakeStore::with_customers(many(3));
        let mut directory = CustomerDirectory::new(&store);
        directory.set_search("nobody");

        assert_eq!(directory.render().unwrap().body, TableBody::Empty);
    }

    #[test]
    fn rows_are_numbered_by_filtered_position() {
        let store = FakeStore::with_customers(many(12));
        let mut directory = CustomerDirectory::new(&store);

        assert!(directory.change_page(3).unwrap());
        let view = directory.render().unwrap();

        assert_eq!(
            rows(&view),
            vec![(11, "c11".to_string()), (12, "c12".to_string())]
        );
        let nav = view.nav.expect("navigation for three pages");
        assert_eq!(nav.total_pages, 3);
        assert!(!nav.has_next);
    }

    #[test]
    fn out_of_range_page_requests_are_ignored() {
        let store = FakeStore::with_customers(many(7));
        let mut directory = CustomerDirectory::new(&store);

        assert!(directory.change_page(2).unwrap());
        assert!(!directory.change_page(3).unwrap());
        assert!(!directory.change_page(0).unwrap());
        assert_eq!(directory.current_page(), 2);
    }

    #[test]
    fn changing_search_resets_to_first_page() {
        let store = FakeStore::with_customers(many(12));
        let mut directory = CustomerDirectory::new(&store);
        directory.change_page(2).unwrap();

        directory.set_search("Customer 1");

        assert_eq!(directory.current_page(), 1);
        let view = directory.render().unwrap();
        assert_eq!(
            rows(&view),
            vec![
                (1, "c1".to_string()),
                (2, "c10".to_string()),
                (3, "c11".to_string()),
                (4, "c12".to_string())
            ]
        );
        assert!(view.nav.is_none());
    }

    #[test]
    fn view_overlay_shows_snapshot_until_closed() {
        let store = FakeStore::with_customers(vec![customer("c1", "A")]);
        let mut directory = CustomerDirectory::new(&store);

        directory.open_view(&id("c1")).unwrap();
        let details = directory.render().unwrap().viewing.expect("details open");
        assert_eq!(details.customer.id, id("c1"));
        assert_eq!(details.member_since, "N/A");

        directory.close_view();
        assert!(directory.render().unwrap().viewing.is_none());
    }

    #[test]
    fn opening_unknown_record_reports_not_found() {
        let store = FakeStore::default();
        let mut directory = CustomerDirectory::new(&store);

        assert!(matches!(
            directory.open_view(&id("missing")),
            Err(ServiceError::NotFound)
        ));
        assert_eq!(directory.view_overlay(), &ViewOverlay::Closed);
    }

    #[test]
    fn render_page_reads_store_once() {
        let store = FakeStore::with_customers(many(12));
        let mut directory = CustomerDirectory::new(&store);

        let view = directory.render_page(3).unwrap();

        assert_eq!(store.list_calls.get(), 1);
        assert_eq!(directory.current_page(), 3);
        assert_eq!(rows(&view), vec![(11, "c11".to_string()), (12, "c12".to_string())]);

        directory.render_page(9).unwrap();
        assert_eq!(directory.current_page(), 3);
    }

    #[test]
    fn resumed_draft_survives_unready_store() {
        let store = FakeStore::default();
        store.not_ready.set(true);
        let mut directory = CustomerDirectory::new(&store);

        directory.resume_edit(CustomerDraft::empty(id("c1")));
        directory.edit_field(CustomerField::CustomerName, "Typed");

        assert!(matches!(directory.submit_edit(), Err(ServiceError::NotReady)));
        let view = directory.render().unwrap();
        assert_eq!(view.body, TableBody::Loading);
        let form = view.editing.expect("draft stays open");
        assert_eq!(form.id, id("c1"));
        assert_eq!(form.fields[0].value, "Typed");
    }
}
