use actix_web::{HttpResponse, Responder, get, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::routes::{base_context, redirect, render_template};
use crate::services::ServiceError;
use crate::services::policies::{get_policy, list_policies};

#[get("/policies")]
pub async fn show_policies(
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let mut context = base_context(&flash_messages, "policies");
    context.insert("policies", &list_policies());

    render_template(&tera, "policies/index.html", &context)
}

#[get("/policies/{policy_id}")]
pub async fn show_policy(
    policy_id: web::Path<String>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let policy = match get_policy(&policy_id) {
        Ok(policy) => policy,
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Policy not found.").send();
            return redirect("/policies");
        }
        Err(err) => {
            log::error!("Failed to load policy {policy_id}: {err}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let mut context = base_context(&flash_messages, "policies");
    context.insert("policy", &policy);

    render_template(&tera, "policies/show.html", &context)
}
