use super::{
    client::{path_segment, ApiClient},
    types::{AbsenceStatistics, ApiError, BackendConfig},
};

impl ApiClient {
    pub async fn employee_absence_statistics(
        &self,
        employee_id: &str,
    ) -> Result<AbsenceStatistics, ApiError> {
        self.get_envelope(&format!(
            "/api/absence/employee/{}/statistics",
            path_segment(employee_id)
        ))
        .await?
        .ok_or_else(|| ApiError::unknown("Failed to fetch statistics"))
    }

    pub async fn backend_config(&self) -> Result<BackendConfig, ApiError> {
        self.get_envelope("/api/config")
            .await?
            .ok_or_else(|| ApiError::unknown("Failed to fetch app config"))
    }
}
