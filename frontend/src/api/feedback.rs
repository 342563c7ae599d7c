use super::{
    client::{path_segment, ApiClient},
    types::{ApiError, Feedback, NewFeedback},
};

impl ApiClient {
    pub async fn list_received_feedback(&self) -> Result<Vec<Feedback>, ApiError> {
        Ok(self
            .get_envelope("/api/feedback/received")
            .await?
            .unwrap_or_default())
    }

    pub async fn list_profile_feedback(&self, profile_id: &str) -> Result<Vec<Feedback>, ApiError> {
        Ok(self
            .get_envelope(&format!(
                "/api/feedback/profiles/{}",
                path_segment(profile_id)
            ))
            .await?
            .unwrap_or_default())
    }

    /// `Ok(None)` means the server accepted the write but sent no canonical record back.
    pub async fn create_profile_feedback(
        &self,
        profile_id: &str,
        payload: &NewFeedback,
    ) -> Result<Option<Feedback>, ApiError> {
        let url = self.endpoint(&format!(
            "/api/feedback/profiles/{}",
            path_segment(profile_id)
        ));
        let request = self.authorized(self.http_client().post(url).json(payload))?;
        let response = self.send(request).await?;
        self.map_optional_envelope(response).await
    }

    pub async fn delete_feedback(&self, feedback_id: &str) -> Result<(), ApiError> {
        let url = self.endpoint(&format!("/api/feedback/{}", path_segment(feedback_id)));
        let request = self.authorized(self.http_client().delete(url))?;
        self.send(request).await.map(|_| ())
    }
}
