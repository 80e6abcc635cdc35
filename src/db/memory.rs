use std::sync::Mutex;
use uuid::Uuid;

use super::{DbError, DbResult, Store};
use crate::models::admin::Admin;
use crate::models::employee::{Employee, EmployeeFields};

fn record(id: Uuid, fields: &EmployeeFields) -> Employee {
    Employee {
        id,
        name: fields.name.clone(),
        email: fields.email.clone(),
        mobile_no: fields.mobile_no.clone(),
        designation: fields.designation.clone(),
        gender: fields.gender.as_str().to_string(),
        course: fields.course.as_str().to_string(),
        image: fields.pic.clone(),
        create_date: fields.create_date.clone(),
    }
}

/// Store kept in process memory, in insertion order.
#[derive(Default)]
pub struct MemoryStore {
    admins: Mutex<Vec<Admin>>,
    employees: Mutex<Vec<Employee>>,
    /// When set, every call fails like a lost connection.
    offline: bool,
    /// When set, `email_taken` always misses, as if a concurrent write
    /// landed between the check and the insert.
    racing: bool,
}

impl MemoryStore {
    pub fn offline() -> Self {
        MemoryStore {
            offline: true,
            ..Default::default()
        }
    }

    pub fn racing() -> Self {
        MemoryStore {
            racing: true,
            ..Default::default()
        }
    }

    fn check(&self) -> DbResult<()> {
        if self.offline {
            return Err(DbError::Sqlx(sqlx::Error::PoolClosed));
        }
        Ok(())
    }
}

impl Store for MemoryStore {
    async fn find_admin(&self, username: &str) -> DbResult<Option<Admin>> {
        self.check()?;
        let admins = self.admins.lock().unwrap();
        Ok(admins.iter().find(|a| a.username == username).cloned())
    }

    async fn insert_admin(&self, username: &str, password_hash: &str) -> DbResult<bool> {
        self.check()?;
        let mut admins = self.admins.lock().unwrap();
        if admins.iter().any(|a| a.username == username) {
            return Ok(false);
        }
        admins.push(Admin {
            id: Uuid::new_v4(),
            username: username.to_string(),
            password_hash: password_hash.to_string(),
        });
        Ok(true)
    }

    async fn list_employees(&self) -> DbResult<Vec<Employee>> {
        self.check()?;
        Ok(self.employees.lock().unwrap().clone())
    }

    async fn find_employee(&self, id: Uuid) -> DbResult<Option<Employee>> {
        self.check()?;
        let employees = self.employees.lock().unwrap();
        Ok(employees.iter().find(|e| e.id == id).cloned())
    }

    async fn email_taken(&self, email: &str, except: Option<Uuid>) -> DbResult<bool> {
        self.check()?;
        if self.racing {
            return Ok(false);
        }
        let employees = self.employees.lock().unwrap();
        Ok(employees
            .iter()
            .any(|e| e.email == email && Some(e.id) != except))
    }

    async fn insert_employee(&self, fields: &EmployeeFields) -> DbResult<Employee> {
        self.check()?;
        let mut employees = self.employees.lock().unwrap();
        if employees.iter().any(|e| e.email == fields.email) {
            return Err(DbError::UniqueViolation("t_employees_email_key".to_string()));
        }
        let employee = record(Uuid::new_v4(), fields);
        employees.push(employee.clone());
        Ok(employee)
    }

    async fn update_employee(&self, id: Uuid, fields: &EmployeeFields) -> DbResult<Option<Employee>> {
        self.check()?;
        let mut employees = self.employees.lock().unwrap();
        if employees.iter().any(|e| e.email == fields.email && e.id != id) {
            return Err(DbError::UniqueViolation("t_employees_email_key".to_string()));
        }
        Ok(employees.iter_mut().find(|e| e.id == id).map(|e| {
            *e = record(id, fields);
            e.clone()
        }))
    }

    async fn delete_employee(&self, id: Uuid) -> DbResult<bool> {
        self.check()?;
        let mut employees = self.employees.lock().unwrap();
        let before = employees.len();
        employees.retain(|e| e.id != id);
        Ok(employees.len() < before)
    }
}
