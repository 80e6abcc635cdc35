//! Persistence seam for employee records and administrator credentials.

#[cfg(test)]
pub mod memory;
pub mod postgres;

pub use postgres::PgStore;

use log::{info, warn};
use std::fmt;
use uuid::Uuid;

use crate::config::AdminSeed;
use crate::models::admin::Admin;
use crate::models::employee::{Employee, EmployeeFields};
use crate::utils::password;

#[derive(Debug)]
pub enum DbError {
    /// A storage-level unique constraint rejected the write.
    UniqueViolation(String),
    Sqlx(sqlx::Error),
}

impl fmt::Display for DbError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DbError::UniqueViolation(constraint) => write!(f, "Unique violation: {}", constraint),
            DbError::Sqlx(err) => write!(f, "Database Error: {}", err),
        }
    }
}

impl std::error::Error for DbError {}

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() {
                return DbError::UniqueViolation(db_err.constraint().unwrap_or("unique").to_string());
            }
        }
        DbError::Sqlx(err)
    }
}

pub type DbResult<T> = Result<T, DbError>;

/// Single-record operations every handler goes through.
#[allow(async_fn_in_trait)]
pub trait Store {
    async fn find_admin(&self, username: &str) -> DbResult<Option<Admin>>;
    /// Returns `false` if an administrator with this username already exists.
    async fn insert_admin(&self, username: &str, password_hash: &str) -> DbResult<bool>;

    async fn list_employees(&self) -> DbResult<Vec<Employee>>;
    async fn find_employee(&self, id: Uuid) -> DbResult<Option<Employee>>;
    /// True if another record uses `email`; `except` excludes one record id.
    async fn email_taken(&self, email: &str, except: Option<Uuid>) -> DbResult<bool>;
    async fn insert_employee(&self, fields: &EmployeeFields) -> DbResult<Employee>;
    /// Replaces every field; `None` if no record has this id.
    async fn update_employee(&self, id: Uuid, fields: &EmployeeFields) -> DbResult<Option<Employee>>;
    async fn delete_employee(&self, id: Uuid) -> DbResult<bool>;
}

/// Creates the bootstrap administrator unless one with that username exists.
pub async fn seed_admin<S: Store>(store: &S, seed: &AdminSeed) -> DbResult<()> {
    if store.find_admin(&seed.username).await?.is_some() {
        return Ok(());
    }

    let hash = match password::hash_password(&seed.password) {
        Ok(hash) => hash,
        Err(err) => {
            warn!("could not hash bootstrap admin password: {}", err);
            return Ok(());
        }
    };

    if store.insert_admin(&seed.username, &hash).await? {
        info!("Seeded administrator '{}'", seed.username);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::memory::MemoryStore;
    use super::*;

    #[actix_web::test]
    async fn seeds_a_hashed_admin_once() {
        let store = MemoryStore::default();
        let seed = AdminSeed {
            username: "admin".to_string(),
            password: "secret123".to_string(),
        };

        seed_admin(&store, &seed).await.unwrap();
        let admin = store.find_admin("admin").await.unwrap().unwrap();
        assert!(password::verify_password("secret123", &admin.password_hash));

        let changed = AdminSeed {
            password: "another-password".to_string(),
            ..seed
        };
        seed_admin(&store, &changed).await.unwrap();
        let again = store.find_admin("admin").await.unwrap().unwrap();
        assert_eq!(again.id, admin.id);
        assert!(password::verify_password("secret123", &again.password_hash));
    }
}
