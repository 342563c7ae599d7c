use super::{
    client::ApiClient,
    types::{ApiError, LoginRequest, LoginResponse, UserResponse},
};

impl ApiClient {
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let response = self
            .send(
                self.http_client()
                    .post(self.endpoint("/api/auth/login"))
                    .json(request),
            )
            .await?;
        self.map_envelope(response)
            .await?
            .ok_or_else(|| ApiError::unknown("Login response did not include a session"))
    }

    /// Validates a specific token, independent of what storage currently holds.
    pub async fn current_user(&self, token: &str) -> Result<UserResponse, ApiError> {
        let request =
            self.authorized_with(self.http_client().get(self.endpoint("/api/auth/me")), token)?;
        let response = self.send(request).await?;
        self.map_envelope(response)
            .await?
            .ok_or_else(|| ApiError::unknown("Session response did not include a user"))
    }
}
