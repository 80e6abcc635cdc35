use serde::Serialize;
use serde_json::Value;
use validator::{validate_email, validate_length, validate_url, ValidationErrors};

use crate::models::employee::{Course, EmployeeFields, Gender};

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, message: impl Into<String>) -> Self {
        FieldError {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

pub type FieldResult<T> = Result<T, FieldError>;

/// Flattens derive-based validation errors into `details`, ordered by `fields`.
///
/// `fields` maps struct field names to the wire names the client sent.
pub fn field_errors(errors: &ValidationErrors, fields: &[(&str, &str)]) -> Vec<FieldError> {
    let by_field = errors.field_errors();
    let mut details = Vec::new();
    for (name, wire_name) in fields {
        if let Some(errs) = by_field.get(*name) {
            for err in errs.iter() {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("\"{}\" is invalid", wire_name));
                details.push(FieldError::new(wire_name, message));
            }
        }
    }
    details
}

/// Messages shared by every string field: absent, wrong type, empty.
struct StringMessages<'a> {
    required: &'a str,
    base: &'a str,
    empty: &'a str,
}

fn string_field<'a>(body: &'a Value, field: &str, msgs: &StringMessages<'_>) -> FieldResult<&'a str> {
    match body.get(field) {
        None | Some(Value::Null) => Err(FieldError::new(field, msgs.required)),
        Some(Value::String(s)) if s.is_empty() => Err(FieldError::new(field, msgs.empty)),
        Some(Value::String(s)) => Ok(s.as_str()),
        Some(_) => Err(FieldError::new(field, msgs.base)),
    }
}

pub fn validate_name(body: &Value) -> FieldResult<String> {
    let name = string_field(
        body,
        "name",
        &StringMessages {
            required: "Name is required.",
            base: "Name should be a string.",
            empty: "Name cannot be empty.",
        },
    )?;
    if !validate_length(name, Some(3), None, None) {
        return Err(FieldError::new("name", "Name should be at least 3 characters."));
    }
    if !validate_length(name, None, Some(30), None) {
        return Err(FieldError::new("name", "Name should not exceed 30 characters."));
    }
    Ok(name.to_string())
}

pub fn validate_email_field(body: &Value) -> FieldResult<String> {
    let email = string_field(
        body,
        "email",
        &StringMessages {
            required: "Email is required.",
            base: "\"email\" must be a string",
            empty: "Email cannot be empty.",
        },
    )?;
    if !validate_email(email) || !has_dotted_domain(email) {
        return Err(FieldError::new("email", "Please enter a valid email address."));
    }
    Ok(email.to_string())
}

/// The domain needs at least two segments: `a@x` and `a@localhost` are rejected.
fn has_dotted_domain(email: &str) -> bool {
    match email.rsplit_once('@') {
        Some((_, domain)) => domain
            .char_indices()
            .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len()),
        None => false,
    }
}

pub fn validate_mobile_no(body: &Value) -> FieldResult<String> {
    let mobile_no = string_field(
        body,
        "mobileNo",
        &StringMessages {
            required: "Mobile number is required.",
            base: "\"mobileNo\" must be a string",
            empty: "Mobile No cannot be empty.",
        },
    )?;
    if mobile_no.len() != 10 || !mobile_no.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FieldError::new("mobileNo", "Mobile number must be a 10-digit number."));
    }
    Ok(mobile_no.to_string())
}

pub fn validate_designation(body: &Value) -> FieldResult<String> {
    string_field(
        body,
        "designation",
        &StringMessages {
            required: "Designation is required.",
            base: "\"designation\" must be a string",
            empty: "Enter a valid Designation",
        },
    )
    .map(str::to_string)
}

pub fn validate_gender(body: &Value) -> FieldResult<Gender> {
    const ONLY: &str = "Gender must be either 'Male' or 'Female'.";
    let gender = string_field(
        body,
        "gender",
        &StringMessages {
            required: "Gender is required.",
            base: "\"gender\" must be a string",
            empty: ONLY,
        },
    )?;
    Gender::parse(gender).ok_or_else(|| FieldError::new("gender", ONLY))
}

pub fn validate_course(body: &Value) -> FieldResult<Course> {
    const ONLY: &str = "Course must be either 'MCA', 'BCA', or 'BSC'.";
    let course = string_field(
        body,
        "course",
        &StringMessages {
            required: "Course is required.",
            base: "\"course\" must be a string",
            empty: ONLY,
        },
    )?;
    Course::parse(course).ok_or_else(|| FieldError::new("course", ONLY))
}

pub fn validate_pic(body: &Value) -> FieldResult<String> {
    let pic = string_field(
        body,
        "pic",
        &StringMessages {
            required: "Picture is required.",
            base: "\"pic\" must be a string",
            empty: "Upload the Image",
        },
    )?;
    if !validate_url(pic) {
        return Err(FieldError::new("pic", "Please provide a valid URL for the picture."));
    }
    Ok(pic.to_string())
}

pub fn validate_create_date(body: &Value) -> FieldResult<String> {
    string_field(
        body,
        "createDate",
        &StringMessages {
            required: "\"createDate\" is required",
            base: "\"createDate\" must be a string",
            empty: "\"createDate\" is not allowed to be empty",
        },
    )
    .map(str::to_string)
}

const EMPLOYEE_KEYS: [&str; 8] = [
    "name",
    "email",
    "mobileNo",
    "designation",
    "gender",
    "course",
    "pic",
    "createDate",
];

/// Rejects the first key outside the employee schema.
pub fn validate_known_keys(body: &Value) -> FieldResult<()> {
    let unknown = body
        .as_object()
        .and_then(|map| map.keys().find(|key| !EMPLOYEE_KEYS.contains(&key.as_str())));
    match unknown {
        Some(key) => Err(FieldError::new(key, format!("\"{}\" is not allowed", key))),
        None => Ok(()),
    }
}

/// Runs every field validator in schema order, then the unknown-key check.
///
/// On failure the returned list holds one entry per rejected field, in the
/// order the fields are declared.
pub fn validate_employee(body: &Value) -> Result<EmployeeFields, Vec<FieldError>> {
    if !body.is_object() {
        return Err(vec![FieldError::new("value", "\"value\" must be of type object")]);
    }

    let name = validate_name(body);
    let email = validate_email_field(body);
    let mobile_no = validate_mobile_no(body);
    let designation = validate_designation(body);
    let gender = validate_gender(body);
    let course = validate_course(body);
    let pic = validate_pic(body);
    let create_date = validate_create_date(body);
    let known_keys = validate_known_keys(body);

    match (name, email, mobile_no, designation, gender, course, pic, create_date, known_keys) {
        (
            Ok(name),
            Ok(email),
            Ok(mobile_no),
            Ok(designation),
            Ok(gender),
            Ok(course),
            Ok(pic),
            Ok(create_date),
            Ok(()),
        ) => Ok(EmployeeFields {
            name,
            email,
            mobile_no,
            designation,
            gender,
            course,
            pic,
            create_date,
        }),
        (name, email, mobile_no, designation, gender, course, pic, create_date, known_keys) => Err([
            name.err(),
            email.err(),
            mobile_no.err(),
            designation.err(),
            gender.err(),
            course.err(),
            pic.err(),
            create_date.err(),
            known_keys.err(),
        ]
        .into_iter()
        .flatten()
        .collect()),
    }
}
