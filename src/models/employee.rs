use serde::Serialize;
use uuid::Uuid;

/// Stored employee record. Serializes with the dashboard's document keys.
#[derive(sqlx::FromRow, Serialize, Debug, Clone, PartialEq)]
pub struct Employee {
    #[serde(rename = "_id")]
    pub id: Uuid,
    #[serde(rename = "f_Name")]
    pub name: String,
    #[serde(rename = "f_Email")]
    pub email: String,
    #[serde(rename = "f_MobileNo")]
    pub mobile_no: String,
    #[serde(rename = "f_Designation")]
    pub designation: String,
    #[serde(rename = "f_Gender")]
    pub gender: String,
    #[serde(rename = "f_Course")]
    pub course: String,
    #[serde(rename = "f_Image")]
    pub image: String,
    #[serde(rename = "f_CreateDate")]
    pub create_date: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Male" => Some(Gender::Male),
            "Female" => Some(Gender::Female),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Course {
    Mca,
    Bca,
    Bsc,
}

impl Course {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "MCA" => Some(Course::Mca),
            "BCA" => Some(Course::Bca),
            "BSC" => Some(Course::Bsc),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Course::Mca => "MCA",
            Course::Bca => "BCA",
            Course::Bsc => "BSC",
        }
    }
}

/// A fully validated employee payload, ready to be written.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeFields {
    pub name: String,
    pub email: String,
    pub mobile_no: String,
    pub designation: String,
    pub gender: Gender,
    pub course: Course,
    pub pic: String,
    pub create_date: String,
}
