use log::{error, info};
use sqlx::postgres::{PgPool, PgPoolOptions};
use uuid::Uuid;

use super::{seed_admin, DbResult, Store};
use crate::config::Config;
use crate::models::admin::Admin;
use crate::models::employee::{Employee, EmployeeFields};

const EMPLOYEE_COLUMNS: &str =
    "id, name, email, mobile_no, designation, gender, course, image, create_date";

pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Builds the pool without touching the network; connections open on first use.
    pub fn connect(config: &Config) -> DbResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect_lazy(&config.database_url)?;
        Ok(PgStore { pool })
    }

    /// Applies migrations and seeds the bootstrap admin.
    ///
    /// An unreachable database is logged, not fatal: requests will fail with
    /// 500 until it comes back.
    pub async fn init(&self, config: &Config) {
        if let Err(err) = sqlx::migrate!("./migrations").run(&self.pool).await {
            error!("Failed to prepare the database: {}", err);
            return;
        }
        info!("Database connection open");

        if let Some(seed) = &config.admin_seed {
            if let Err(err) = seed_admin(self, seed).await {
                error!("Failed to seed administrator: {}", err);
            }
        }
    }

    pub async fn close(&self) {
        self.pool.close().await;
        info!("Database connection closed");
    }
}

impl Store for PgStore {
    async fn find_admin(&self, username: &str) -> DbResult<Option<Admin>> {
        let admin = sqlx::query_as::<_, Admin>(
            "SELECT id, username, password_hash FROM t_admins WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;
        Ok(admin)
    }

    async fn insert_admin(&self, username: &str, password_hash: &str) -> DbResult<bool> {
        let result = sqlx::query(
            "INSERT INTO t_admins (id, username, password_hash) VALUES ($1, $2, $3) ON CONFLICT (username) DO NOTHING",
        )
        .bind(Uuid::new_v4())
        .bind(username)
        .bind(password_hash)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn list_employees(&self) -> DbResult<Vec<Employee>> {
        let employees = sqlx::query_as::<_, Employee>(&format!(
            "SELECT {} FROM t_employees",
            EMPLOYEE_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(employees)
    }

    async fn find_employee(&self, id: Uuid) -> DbResult<Option<Employee>> {
        let employee = sqlx::query_as::<_, Employee>(&format!(
            "SELECT {} FROM t_employees WHERE id = $1",
            EMPLOYEE_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(employee)
    }

    async fn email_taken(&self, email: &str, except: Option<Uuid>) -> DbResult<bool> {
        let taken = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM t_employees WHERE email = $1 AND ($2::uuid IS NULL OR id <> $2))",
        )
        .bind(email)
        .bind(except)
        .fetch_one(&self.pool)
        .await?;
        Ok(taken)
    }

    async fn insert_employee(&self, fields: &EmployeeFields) -> DbResult<Employee> {
        let employee = sqlx::query_as::<_, Employee>(&format!(
            "INSERT INTO t_employees ({}) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) RETURNING {}",
            EMPLOYEE_COLUMNS, EMPLOYEE_COLUMNS
        ))
        .bind(Uuid::new_v4())
        .bind(&fields.name)
        .bind(&fields.email)
        .bind(&fields.mobile_no)
        .bind(&fields.designation)
        .bind(fields.gender.as_str())
        .bind(fields.course.as_str())
        .bind(&fields.pic)
        .bind(&fields.create_date)
        .fetch_one(&self.pool)
        .await?;
        Ok(employee)
    }

    async fn update_employee(&self, id: Uuid, fields: &EmployeeFields) -> DbResult<Option<Employee>> {
        let employee = sqlx::query_as::<_, Employee>(&format!(
            "UPDATE t_employees SET name = $1, email = $2, mobile_no = $3, designation = $4, gender = $5, course = $6, image = $7, create_date = $8 WHERE id = $9 RETURNING {}",
            EMPLOYEE_COLUMNS
        ))
        .bind(&fields.name)
        .bind(&fields.email)
        .bind(&fields.mobile_no)
        .bind(&fields.designation)
        .bind(fields.gender.as_str())
        .bind(fields.course.as_str())
        .bind(&fields.pic)
        .bind(&fields.create_date)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(employee)
    }

    async fn delete_employee(&self, id: Uuid) -> DbResult<bool> {
        let result = sqlx::query("DELETE FROM t_employees WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
