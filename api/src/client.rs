use std::time::Duration;

use reqwest::Client;
use tracing::{debug, instrument};

use crate::error::ApiError;
use crate::types::{EmployeeRecord, NewEmployee, NewUser, UserRecord};

/// Thin client over the backend's `/users` and `/employees` resources.
///
/// Requests carry a fixed timeout; a request that fails to complete within
/// it surfaces as a connection failure. There is no retry at this layer.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(timeout)
            .pool_idle_timeout(Duration::from_secs(30))
            .tcp_keepalive(Duration::from_secs(30))
            .build()?;

        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self { http, base_url })
    }

    #[instrument(skip(self), level = "debug")]
    pub async fn list_users(&self) -> Result<Vec<UserRecord>, ApiError> {
        let url = format!("{}/users", self.base_url);

        let resp = self.http.get(&url).send().await?.error_for_status()?;
        let users: Vec<UserRecord> = resp.json().await?;

        debug!(count = users.len(), "fetched users");
        Ok(users)
    }

    #[instrument(skip_all, fields(email = %user.email), level = "debug")]
    pub async fn create_user(&self, user: &NewUser) -> Result<UserRecord, ApiError> {
        let url = format!("{}/users", self.base_url);

        let resp = self
            .http
            .post(&url)
            .json(user)
            .send()
            .await?
            .error_for_status()?;

        let created: UserRecord = resp.json().await?;
        debug!(user_id = created.id, "user created");
        Ok(created)
    }

    /// Full-record update; the backend replaces the stored user wholesale.
    #[instrument(skip_all, fields(user_id = id), level = "debug")]
    pub async fn update_user(&self, id: u64, user: &UserRecord) -> Result<UserRecord, ApiError> {
        let url = format!("{}/users/{}", self.base_url, id);

        let resp = self
            .http
            .put(&url)
            .json(user)
            .send()
            .await?
            .error_for_status()?;

        Ok(resp.json().await?)
    }

    #[instrument(skip(self), level = "debug")]
    pub async fn list_employees(&self) -> Result<Vec<EmployeeRecord>, ApiError> {
        let url = format!("{}/employees", self.base_url);

        let resp = self.http.get(&url).send().await?.error_for_status()?;
        let employees: Vec<EmployeeRecord> = resp.json().await?;

        debug!(count = employees.len(), "fetched employees");
        Ok(employees)
    }

    #[instrument(skip_all, fields(name = %employee.employee_name), level = "debug")]
    pub async fn create_employee(
        &self,
        employee: &NewEmployee,
    ) -> Result<EmployeeRecord, ApiError> {
        let url = format!("{}/employees", self.base_url);

        let resp = self
            .http
            .post(&url)
            .json(employee)
            .send()
            .await?
            .error_for_status()?;

        let created: EmployeeRecord = resp.json().await?;
        debug!(employee_id = created.id, "employee created");
        Ok(created)
    }
}
