use serde::{Deserialize, Serialize};

/// User record as the backend stores it. The password travels through this
/// type only; it is never copied into session state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: u64,
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Body for `POST /users`; the backend assigns the id.
#[derive(Debug, Clone, Serialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRecord {
    pub id: u64,
    pub employee_name: String,
    pub job_designation: String,
    pub company_name: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
    pub employee_name: String,
    pub job_designation: String,
    pub company_name: String,
}
