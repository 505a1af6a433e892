use actix_multipart::form::MultipartForm;
use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages, Level};
use tera::Tera;

use crate::dto::customers::{CustomersQuery, DirectoryLocation, DirectoryView};
use crate::forms::customers::{DeleteCustomerForm, EditCustomerForm, UploadCustomersForm};
use crate::repository::DieselRepository;
use crate::routes::{
    alert_level_to_str, base_context, collect_alerts, page_context, redirect, render_template,
};
use crate::services::ServiceError;
use crate::services::customers::{
    MutationOutcome, delete_customer as delete_customer_service, import_customers,
    load_customers_page, save_customer,
};

fn render_directory(
    tera: &Tera,
    flash_messages: &IncomingFlashMessages,
    directory: &DirectoryView,
    failure: Option<String>,
) -> HttpResponse {
    let context = match failure {
        Some(message) => {
            let mut alerts = collect_alerts(flash_messages);
            alerts.push((message, alert_level_to_str(&Level::Error)));
            let mut context = page_context(&alerts, "customers");
            context.insert("directory", directory);
            context
        }
        None => {
            let mut context = base_context(flash_messages, "customers");
            context.insert("directory", directory);
            context
        }
    };

    render_template(tera, "customers/index.html", &context)
}

#[get("/admin/customers")]
pub async fn show_customers(
    query: web::Query<CustomersQuery>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match load_customers_page(repo.get_ref(), query.into_inner()) {
        Ok(directory) => render_directory(&tera, &flash_messages, &directory, None),
        Err(_) => HttpResponse::InternalServerError().finish(),
    }
}

/// Saves the edit form. A rejected save re-renders the page with the submitted
/// draft still open instead of redirecting.
#[post("/admin/customers/update")]
pub async fn update_customer(
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
    web::Form(form): web::Form<EditCustomerForm>,
) -> impl Responder {
    let search = form.search.clone();
    let location = DirectoryLocation {
        search: search.as_deref(),
        page: form.page,
        ..Default::default()
    };

    match save_customer(repo.get_ref(), form) {
        Ok(MutationOutcome::Done) => {
            FlashMessage::success("Customer updated.").send();
        }
        Ok(MutationOutcome::Retry { error, view }) => {
            let message = format!("Failed to update customer: {error}");
            return render_directory(&tera, &flash_messages, &view, Some(message));
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Customer not found.").send();
        }
        Err(err) => {
            FlashMessage::error(format!("Failed to update customer: {err}")).send();
        }
    }

    redirect(&location.to_url())
}

#[post("/admin/customers/delete")]
pub async fn delete_customer(
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
    web::Form(form): web::Form<DeleteCustomerForm>,
) -> impl Responder {
    let search = form.search.clone();
    let location = DirectoryLocation {
        search: search.as_deref(),
        page: form.page,
        ..Default::default()
    };

    match delete_customer_service(repo.get_ref(), form) {
        Ok(MutationOutcome::Done) => {
            FlashMessage::success("Customer deleted.").send();
        }
        Ok(MutationOutcome::Retry { error, view }) => {
            let message = format!("Failed to delete customer: {error}");
            return render_directory(&tera, &flash_messages, &view, Some(message));
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Customer not found.").send();
        }
        Err(err) => {
            FlashMessage::error(format!("Failed to delete customer: {err}")).send();
        }
    }

    redirect(&location.to_url())
}

#[post("/admin/customers/upload")]
pub async fn upload_customers(
    repo: web::Data<DieselRepository>,
    MultipartForm(mut form): MultipartForm<UploadCustomersForm>,
) -> impl Responder {
    match import_customers(repo.get_ref(), &mut form) {
        Ok(count) => {
            FlashMessage::success(format!("Imported {count} customers.")).send();
        }
        Err(err) => {
            FlashMessage::error(format!("Failed to import customers: {err}")).send();
        }
    }

    redirect(DirectoryLocation::PATH)
}
