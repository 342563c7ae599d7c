use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::{header::HeaderMap, Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::rc::Rc;

use crate::{
    api::types::{ApiError, Envelope},
    config,
    utils::storage::{BrowserTokenStorage, TokenStorage},
};

const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    tokens: Rc<dyn TokenStorage>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
            tokens: Rc::new(BrowserTokenStorage),
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: Some(base_url.into()),
            ..Self::new()
        }
    }

    pub fn with_token_storage(mut self, tokens: Rc<dyn TokenStorage>) -> Self {
        self.tokens = tokens;
        self
    }

    pub fn token_storage(&self) -> Rc<dyn TokenStorage> {
        Rc::clone(&self.tokens)
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        let url = match &self.base_url {
            Some(base) => config::join_url(base, path),
            None => config::api_url(path),
        };
        absolute_url(url)
    }

    fn bearer_headers(token: &str) -> Result<HeaderMap, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            reqwest::header::AUTHORIZATION,
            format!("Bearer {}", token)
                .parse()
                .map_err(|_| ApiError::unauthorized("Invalid token format"))?,
        );
        Ok(headers)
    }

    pub(crate) fn get_auth_headers(&self) -> Result<HeaderMap, ApiError> {
        let token = self
            .tokens
            .read_token()
            .ok_or_else(|| ApiError::unauthorized("No token"))?;
        Self::bearer_headers(&token)
    }

    pub(crate) fn authorized(&self, builder: RequestBuilder) -> Result<RequestBuilder, ApiError> {
        Ok(builder.headers(self.get_auth_headers()?))
    }

    pub(crate) fn authorized_with(
        &self,
        builder: RequestBuilder,
        token: &str,
    ) -> Result<RequestBuilder, ApiError> {
        Ok(builder.headers(Self::bearer_headers(token)?))
    }

    /// Sends the request and turns transport failures and non-2xx statuses into `ApiError`.
    pub(crate) async fn send(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;
        if response.status().is_success() {
            Ok(response)
        } else {
            Err(Self::error_from_response(response).await)
        }
    }

    async fn error_from_response(response: Response) -> ApiError {
        let status = response.status().as_u16();
        let body: Option<Value> = response.json().await.ok();
        let message = body.as_ref().and_then(|value| {
            value
                .get("error")
                .or_else(|| value.get("message"))
                .and_then(|v| v.as_str())
                .map(str::to_string)
        });
        let mut error = ApiError::from_status(status, message);
        error.details = body.and_then(|value| value.get("details").cloned());
        error
    }

    pub(crate) async fn map_json<T: DeserializeOwned>(
        &self,
        response: Response,
    ) -> Result<T, ApiError> {
        response
            .json()
            .await
            .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
    }

    pub(crate) async fn map_envelope<T: DeserializeOwned>(
        &self,
        response: Response,
    ) -> Result<Option<T>, ApiError> {
        let envelope: Envelope<T> = self.map_json(response).await?;
        Ok(envelope.into_data())
    }

    /// Like `map_envelope`, but a blank 2xx body reads as "no record".
    pub(crate) async fn map_optional_envelope<T: DeserializeOwned>(
        &self,
        response: Response,
    ) -> Result<Option<T>, ApiError> {
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::unknown(format!("Failed to read response: {}", e)))?;
        if body.trim().is_empty() {
            return Ok(None);
        }
        let envelope: Envelope<T> = serde_json::from_str(&body)
            .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))?;
        Ok(envelope.into_data())
    }

    pub(crate) async fn get_envelope<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Option<T>, ApiError> {
        let request = self.authorized(self.client.get(self.endpoint(path)))?;
        let response = self.send(request).await?;
        self.map_envelope(response).await
    }
}

pub(crate) fn path_segment(raw: &str) -> String {
    utf8_percent_encode(raw, PATH_SEGMENT).to_string()
}

/// reqwest needs absolute URLs; root-relative ones are anchored to the page origin.
pub fn absolute_url(url: String) -> String {
    if url.starts_with('/') {
        if let Some(origin) = current_origin() {
            return format!("{}{}", origin, url);
        }
    }
    url
}

#[cfg(target_arch = "wasm32")]
fn current_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn current_origin() -> Option<String> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_segments_are_encoded() {
        assert_eq!(path_segment("p-1_a.b~c"), "p-1_a.b~c");
        assert_eq!(path_segment("a/b c"), "a%2Fb%20c");
    }

    #[test]
    fn explicit_base_url_builds_endpoint() {
        let client = ApiClient::new_with_base_url("http://localhost:3001/");
        assert_eq!(
            client.endpoint("api/feedback/received"),
            "http://localhost:3001/api/feedback/received"
        );
    }

    #[test]
    fn relative_urls_stay_relative_off_browser() {
        assert_eq!(absolute_url("/api/config".into()), "/api/config");
        assert_eq!(
            absolute_url("https://api.example.com/api/config".into()),
            "https://api.example.com/api/config"
        );
    }
}
