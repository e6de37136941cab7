use tracing::info;

use api::ApiClient;
use api::types::{EmployeeRecord, NewEmployee};

use super::{FlowError, invalid_if_any};
use crate::validate::check_required;

#[derive(Debug, Clone, Default)]
pub struct EmployeeForm {
    pub employee_name: String,
    pub job_designation: String,
    pub company_name: String,
}

impl EmployeeForm {
    pub fn validate(&self) -> Result<(), FlowError> {
        let errors = [
            check_required("employee name", &self.employee_name),
            check_required("job designation", &self.job_designation),
            check_required("company name", &self.company_name),
        ];
        invalid_if_any(errors.into_iter().flatten().collect())
    }
}

pub async fn create(api: &ApiClient, form: &EmployeeForm) -> Result<EmployeeRecord, FlowError> {
    form.validate()?;

    let created = api
        .create_employee(&NewEmployee {
            employee_name: form.employee_name.clone(),
            job_designation: form.job_designation.clone(),
            company_name: form.company_name.clone(),
        })
        .await?;

    info!(employee_id = created.id, "employee record created");
    Ok(created)
}

/// An empty list is a normal outcome, not an error.
pub async fn list(api: &ApiClient) -> Result<Vec<EmployeeRecord>, FlowError> {
    Ok(api.list_employees().await?)
}
