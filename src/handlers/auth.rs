use actix_web::{web, HttpResponse};
use log::{info, warn};
use serde::Deserialize;
use serde_json::json;
use validator::Validate;

use crate::db::Store;
use crate::errors::AppError;
use crate::utils::{password, validation};

#[derive(Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(rename = "f_userName", default)]
    #[validate(length(
        min = 3,
        max = 30,
        message = "\"f_userName\" length must be between 3 and 30 characters"
    ))]
    username: String,
    #[serde(rename = "f_Pwd", default)]
    #[validate(length(min = 6, message = "\"f_Pwd\" length must be at least 6 characters long"))]
    password: String,
}

const LOGIN_FIELDS: &[(&str, &str)] = &[("username", "f_userName"), ("password", "f_Pwd")];

pub async fn login<S: Store>(
    store: web::Data<S>,
    req: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    req.validate().map_err(|err| {
        let mut details = validation::field_errors(&err, LOGIN_FIELDS);
        // Only the first failing field is reported.
        details.truncate(1);
        AppError::InvalidInput(details)
    })?;

    let admin = store
        .find_admin(&req.username)
        .await?
        .filter(|admin| password::verify_password(&req.password, &admin.password_hash));

    match admin {
        Some(admin) => {
            info!("Administrator '{}' logged in", admin.username);
            Ok(HttpResponse::Ok().json(json!({
                "message": "Login successful",
                "admin": admin,
            })))
        }
        None => {
            warn!("Rejected login for '{}'", req.username);
            Err(AppError::Unauthorized("Incorrect username or password".to_string()))
        }
    }
}
