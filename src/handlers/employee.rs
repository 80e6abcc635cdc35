use actix_web::{web, HttpResponse};
use log::{info, warn};
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::db::Store;
use crate::errors::AppError;
use crate::utils::validation::validate_employee;

#[derive(Deserialize)]
pub struct DeleteRequest {
    #[serde(rename = "_id", default)]
    id: Option<String>,
}

/// Ids that are not UUIDs can never match a stored record.
fn parse_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::employee_not_found())
}

fn email_exists(email: &str) -> AppError {
    warn!("Email already exists: {}", email);
    AppError::Conflict("Email already exists".to_string())
}

pub async fn create_employee<S: Store>(
    store: web::Data<S>,
    payload: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
    let fields = validate_employee(&payload).map_err(|errors| {
        warn!("Rejected employee payload: {:?}", errors.first());
        AppError::first_of(errors)
    })?;

    if store.email_taken(&fields.email, None).await? {
        return Err(email_exists(&fields.email));
    }

    let employee = store.insert_employee(&fields).await?;
    info!("Created employee {}", employee.id);

    Ok(HttpResponse::Ok().json(json!({
        "message": "Form submitted successfully",
        "data": payload.into_inner(),
    })))
}

pub async fn get_employees<S: Store>(store: web::Data<S>) -> Result<HttpResponse, AppError> {
    let employees = store.list_employees().await?;
    Ok(HttpResponse::Ok().json(employees))
}

pub async fn delete_employee<S: Store>(
    store: web::Data<S>,
    req: web::Json<DeleteRequest>,
) -> Result<HttpResponse, AppError> {
    let id = match req.id.as_deref() {
        Some(raw) => parse_id(raw)?,
        None => return Err(AppError::employee_not_found()),
    };

    if !store.delete_employee(id).await? {
        return Err(AppError::employee_not_found());
    }
    info!("Deleted employee {}", id);

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Employee deleted successfully",
    })))
}

pub async fn get_employee<S: Store>(
    store: web::Data<S>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = parse_id(&id.into_inner())?;

    let employee = store
        .find_employee(id)
        .await?
        .ok_or_else(AppError::employee_not_found)?;

    Ok(HttpResponse::Ok().json(employee))
}

pub async fn update_employee<S: Store>(
    store: web::Data<S>,
    id: web::Path<String>,
    payload: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
    let fields = validate_employee(&payload).map_err(|errors| {
        warn!("Rejected employee payload: {:?}", errors.first());
        AppError::first_of(errors)
    })?;
    let id = parse_id(&id.into_inner())?;

    if store.email_taken(&fields.email, Some(id)).await? {
        return Err(email_exists(&fields.email));
    }

    let employee = store
        .update_employee(id, &fields)
        .await?
        .ok_or_else(AppError::employee_not_found)?;
    info!("Updated employee {}", employee.id);

    Ok(HttpResponse::Ok().json(json!({
        "message": "Form submitted successfully",
        "data": employee,
    })))
}
