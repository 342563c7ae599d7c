use crate::{
    api::{ApiClient, ApiError, LoginRequest, LoginResponse, UserResponse},
    utils::storage::TokenStorage,
};
use std::rc::Rc;

#[derive(Clone)]
pub struct LoginRepository {
    client: Rc<ApiClient>,
}

impl Default for LoginRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginRepository {
    pub fn new() -> Self {
        Self::new_with_client(Rc::new(ApiClient::new()))
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub fn tokens(&self) -> Rc<dyn TokenStorage> {
        self.client.token_storage()
    }

    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, ApiError> {
        self.client.login(&request).await
    }

    pub async fn current_user(&self, token: &str) -> Result<UserResponse, ApiError> {
        self.client.current_user(token).await
    }
}
