use actix_web::{HttpResponse, Responder, get, web};

use crate::dto::api::CustomersApiQuery;
use crate::repository::DieselRepository;
use crate::services::ServiceError;
use crate::services::api::list_customers;
use crate::services::policies::list_policies;

#[get("/v1/customers")]
pub async fn api_v1_customers(
    params: web::Query<CustomersApiQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match list_customers(repo.get_ref(), params.into_inner()) {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(ServiceError::NotReady) => HttpResponse::ServiceUnavailable().finish(),
        Err(err) => {
            log::error!("Failed to list customers: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/v1/policies")]
pub async fn api_v1_policies() -> impl Responder {
    HttpResponse::Ok().json(list_policies())
}
