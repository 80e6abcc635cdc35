use serde::Serialize;
use uuid::Uuid;

#[derive(sqlx::FromRow, Serialize, Debug, Clone)]
pub struct Admin {
    #[serde(rename = "_id")]
    pub id: Uuid,
    #[serde(rename = "f_userName")]
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
}
