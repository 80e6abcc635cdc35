pub mod auth;
pub mod employee;

use actix_web::{error::JsonPayloadError, web, HttpRequest};
use log::warn;

use crate::db::Store;
use crate::errors::AppError;
use crate::utils::validation::FieldError;

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    warn!("Rejected request body: {}", err);
    AppError::InvalidInput(vec![FieldError::new("body", err.to_string())]).into()
}

/// Mounts the dashboard routes backed by store `S`.
pub fn configure<S: Store + 'static>(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(web::resource("/").route(web::post().to(auth::login::<S>)))
        .service(
            web::resource("/createemployee")
                .route(web::post().to(employee::create_employee::<S>)),
        )
        .service(
            web::resource("/employeelist")
                .route(web::get().to(employee::get_employees::<S>)),
        )
        .service(
            web::resource("/deleteemployee")
                .route(web::delete().to(employee::delete_employee::<S>)),
        )
        .service(
            web::resource("/{id}/edit")
                .route(web::get().to(employee::get_employee::<S>)),
        )
        .service(
            web::resource("/employeeedit/{id}")
                .route(web::put().to(employee::update_employee::<S>)),
        );
}
