//! Directory use cases: each request replays the overlay state it carries and
//! performs at most one store mutation.

use crate::directory::CustomerDirectory;
use crate::domain::customer::CustomerDraft;
use crate::domain::types::CustomerId;
use crate::dto::customers::{CustomersQuery, DirectoryView};
use crate::forms::customers::{DeleteCustomerForm, EditCustomerForm, UploadCustomersForm};
use crate::repository::{CustomerReader, CustomerWriter};
use crate::services::{ServiceError, ServiceResult};

fn overlay_target(raw: Option<&str>) -> Option<CustomerId> {
    raw.and_then(|id| CustomerId::new(id).ok())
}

/// Opens an overlay, tolerating records that vanished or a store still loading.
fn open_overlay(result: ServiceResult<()>, overlay: &str, id: &CustomerId) -> ServiceResult<()> {
    match result {
        Ok(()) => Ok(()),
        Err(ServiceError::NotFound) => {
            log::warn!("Cannot open {overlay} overlay, customer {id} not found");
            Ok(())
        }
        Err(ServiceError::NotReady) => Ok(()),
        Err(err) => Err(err),
    }
}

/// Result of a directory mutation the store may turn down.
#[derive(Debug)]
pub enum MutationOutcome {
    Done,
    /// The store was not ready or rejected the change. `view` keeps the overlay
    /// open with what the user submitted so they can retry or cancel.
    Retry {
        error: ServiceError,
        view: Box<DirectoryView>,
    },
}

fn keeps_overlay_open(err: &ServiceError) -> bool {
    matches!(
        err,
        ServiceError::NotReady | ServiceError::PersistenceFailure(_)
    )
}

/// Restores the table position the form was submitted from.
fn restore_position<R>(
    directory: &mut CustomerDirectory<'_, R>,
    search: Option<String>,
    page: Option<usize>,
) -> ServiceResult<DirectoryView>
where
    R: CustomerReader + CustomerWriter + ?Sized,
{
    if let Some(search) = search {
        directory.set_search(search);
    }
    match page {
        Some(page) => directory.render_page(page),
        None => directory.render(),
    }
}

/// Builds the directory page for the given search, page and open overlays.
pub fn load_customers_page<R>(repo: &R, query: CustomersQuery) -> ServiceResult<DirectoryView>
where
    R: CustomerReader + CustomerWriter + ?Sized,
{
    let mut directory = CustomerDirectory::new(repo);

    if let Some(id) = overlay_target(query.view.as_deref()) {
        open_overlay(directory.open_view(&id), "view", &id)?;
    }
    if let Some(id) = overlay_target(query.edit.as_deref()) {
        open_overlay(directory.open_edit(&id), "edit", &id)?;
    }
    if let Some(id) = overlay_target(query.delete.as_deref()) {
        directory.request_delete(id);
    }

    restore_position(&mut directory, query.search, query.page).map_err(|err| {
        log::error!("Failed to render customer directory: {err}");
        err
    })
}

/// Applies the submitted edit form to a fresh draft and commits it.
///
/// Inputs left out of the form keep the stored value. While the store is
/// still loading the draft holds only the submitted inputs.
pub fn save_customer<R>(repo: &R, form: EditCustomerForm) -> ServiceResult<MutationOutcome>
where
    R: CustomerReader + CustomerWriter + ?Sized,
{
    let id = form.customer_id()?;
    let mut directory = CustomerDirectory::new(repo);

    match directory.open_edit(&id) {
        Ok(()) => {}
        Err(ServiceError::NotReady) => directory.resume_edit(CustomerDraft::empty(id)),
        Err(err) => return Err(err),
    }
    for (field, value) in form.submitted_fields() {
        directory.edit_field(field, value);
    }

    match directory.submit_edit() {
        Ok(()) => Ok(MutationOutcome::Done),
        Err(error) if keeps_overlay_open(&error) => {
            let view = restore_position(&mut directory, form.search, form.page)?;
            Ok(MutationOutcome::Retry {
                error,
                view: Box::new(view),
            })
        }
        Err(err) => Err(err),
    }
}

/// Runs both deletion phases for the confirmed id.
pub fn delete_customer<R>(repo: &R, form: DeleteCustomerForm) -> ServiceResult<MutationOutcome>
where
    R: CustomerReader + CustomerWriter + ?Sized,
{
    let id = form.customer_id()?;
    let mut directory = CustomerDirectory::new(repo);

    directory.request_delete(id);
    match directory.confirm_delete() {
        Ok(()) => Ok(MutationOutcome::Done),
        Err(error) if keeps_overlay_open(&error) => {
            let view = restore_position(&mut directory, form.search, form.page)?;
            Ok(MutationOutcome::Retry {
                error,
                view: Box::new(view),
            })
        }
        Err(err) => Err(err),
    }
}

/// Parses the uploaded CSV and creates customer records in bulk.
pub fn import_customers<R>(repo: &R, form: &mut UploadCustomersForm) -> ServiceResult<usize>
where
    R: CustomerReader + CustomerWriter + ?Sized,
{
    if !repo.is_ready() {
        return Err(ServiceError::NotReady);
    }

    let customers = form.parse().map_err(|err| {
        log::error!("Failed to parse customers: {err}");
        err
    })?;

    let created = repo.create_customers(&customers).map_err(|err| {
        log::error!("Failed to add customers: {err}");
        ServiceError::PersistenceFailure(err.to_string())
    })?;

    log::info!("Imported {created} customers");
    Ok(created)
}
