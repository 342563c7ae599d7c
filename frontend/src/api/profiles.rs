use super::{
    client::{path_segment, ApiClient},
    types::{ApiError, EmployeeProfile, ProfileEnvelope, UpdateProfileRequest},
};

impl ApiClient {
    pub async fn list_profiles(&self) -> Result<Vec<EmployeeProfile>, ApiError> {
        Ok(self.get_envelope("/api/profiles").await?.unwrap_or_default())
    }

    pub async fn get_profile(&self, profile_id: &str) -> Result<EmployeeProfile, ApiError> {
        let url = self.endpoint(&format!("/api/profiles/{}", path_segment(profile_id)));
        let request = self.authorized(self.http_client().get(url))?;
        let response = self.send(request).await?;
        let envelope: ProfileEnvelope = self.map_json(response).await?;
        envelope
            .data
            .ok_or_else(|| ApiError::unknown("Profile response was empty"))
    }

    pub async fn update_profile(
        &self,
        profile_id: &str,
        update: &UpdateProfileRequest,
    ) -> Result<Option<EmployeeProfile>, ApiError> {
        let url = self.endpoint(&format!("/api/profiles/{}", path_segment(profile_id)));
        let request = self.authorized(self.http_client().put(url).json(update))?;
        let response = self.send(request).await?;
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::unknown(format!("Failed to read response: {}", e)))?;
        if body.trim().is_empty() {
            return Ok(None);
        }
        let envelope: ProfileEnvelope = serde_json::from_str(&body)
            .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))?;
        Ok(envelope.data)
    }
}
