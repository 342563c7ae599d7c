use chrono::{DateTime, Utc};
use leptos::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "MANAGER", alias = "Manager", alias = "manager")]
    Manager,
    #[serde(rename = "EMPLOYEE", alias = "Employee", alias = "employee")]
    Employee,
    #[serde(
        rename = "COWORKER",
        alias = "CO_WORKER",
        alias = "Coworker",
        alias = "coworker"
    )]
    Coworker,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Manager, Role::Employee, Role::Coworker];

    pub fn label(&self) -> &'static str {
        match self {
            Role::Manager => "Manager",
            Role::Employee => "Employee",
            Role::Coworker => "Coworker",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// `{ "data": ... }` wrapper used by every endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    #[serde(default = "Option::default")]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    pub fn into_data(self) -> Option<T> {
        self.data
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserResponse,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: String,
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub id: String,
    pub author_id: String,
    pub target_id: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewFeedback {
    pub body: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbsenceStatistics {
    #[serde(default)]
    pub total_days_requested: f64,
    #[serde(default)]
    pub pending_requests: u32,
    #[serde(default)]
    pub total_requests: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackendConfig {
    #[serde(default)]
    pub annual_vacation_days: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeProfile {
    pub id: String,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub salary: Option<f64>,
}

/// Single-profile reads historically came back as `{ "profile": ... }`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileEnvelope {
    #[serde(default, alias = "profile")]
    pub data: Option<EmployeeProfile>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

impl UpdateProfileRequest {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    fn with_code(msg: impl Into<String>, code: &str) -> Self {
        Self {
            error: msg.into(),
            code: code.to_string(),
            details: None,
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "VALIDATION_ERROR")
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "UNKNOWN")
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "REQUEST_FAILED")
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "UNAUTHORIZED")
    }

    pub fn cancelled() -> Self {
        Self::with_code("Request was cancelled", "CANCELLED")
    }

    pub fn from_status(status: u16, msg: Option<String>) -> Self {
        let code = match status {
            401 => "UNAUTHORIZED",
            403 => "FORBIDDEN",
            404 => "NOT_FOUND",
            400 | 422 => "VALIDATION_ERROR",
            500..=599 => "SERVER_ERROR",
            _ => "REQUEST_FAILED",
        };
        let msg = msg
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| default_status_message(status));
        Self::with_code(msg, code)
    }

    pub fn is_unauthorized(&self) -> bool {
        self.code == "UNAUTHORIZED"
    }

    /// The server looked at the request and said no, as opposed to never answering.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self.code.as_str(),
            "UNAUTHORIZED" | "FORBIDDEN" | "VALIDATION_ERROR"
        )
    }

    pub fn is_cancelled(&self) -> bool {
        self.code == "CANCELLED"
    }
}

fn default_status_message(status: u16) -> String {
    match status {
        401 => "Your session is not authorized. Please sign in again.".into(),
        403 => "You do not have access to this resource.".into(),
        404 => "The requested resource was not found.".into(),
        _ => format!("Request failed with status {}", status),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn role_accepts_common_spellings() {
        for (raw, role) in [
            ("MANAGER", Role::Manager),
            ("Manager", Role::Manager),
            ("employee", Role::Employee),
            ("CO_WORKER", Role::Coworker),
            ("Coworker", Role::Coworker),
        ] {
            let parsed: Role = serde_json::from_value(json!(raw)).unwrap();
            assert_eq!(parsed, role, "{}", raw);
        }
        assert_eq!(serde_json::to_value(Role::Coworker).unwrap(), json!("COWORKER"));
        assert_eq!(Role::Manager.to_string(), "Manager");
    }

    #[test]
    fn feedback_uses_camel_case_fields() {
        let feedback: Feedback = serde_json::from_value(json!({
            "id": "f1",
            "authorId": "u1",
            "targetId": "p1",
            "body": "Great work",
            "createdAt": "2025-01-02T10:00:00Z",
            "updatedAt": "2025-01-02T10:00:00Z"
        }))
        .unwrap();
        assert_eq!(feedback.author_id, "u1");
        assert_eq!(feedback.target_id, "p1");
    }

    #[test]
    fn envelope_without_data_is_none() {
        let empty: Envelope<Vec<Feedback>> = serde_json::from_value(json!({})).unwrap();
        assert!(empty.into_data().is_none());
        let list: Envelope<Vec<Feedback>> =
            serde_json::from_value(json!({ "data": [] })).unwrap();
        assert_eq!(list.into_data(), Some(Vec::new()));
    }

    #[test]
    fn profile_envelope_accepts_legacy_key() {
        let legacy: ProfileEnvelope = serde_json::from_value(json!({
            "profile": { "id": "p1", "name": "Ada" }
        }))
        .unwrap();
        assert_eq!(legacy.data.unwrap().name, "Ada");
        let current: ProfileEnvelope = serde_json::from_value(json!({
            "data": { "id": "p2", "name": "Grace", "role": "Employee" }
        }))
        .unwrap();
        assert_eq!(current.data.unwrap().role, Some(Role::Employee));
    }

    #[test]
    fn update_profile_skips_unset_fields() {
        let update = UpdateProfileRequest {
            bio: Some("Hello".into()),
            ..UpdateProfileRequest::default()
        };
        assert_eq!(serde_json::to_value(&update).unwrap(), json!({ "bio": "Hello" }));
        assert!(!update.is_empty());
        assert!(UpdateProfileRequest::default().is_empty());
    }

    #[test]
    fn api_error_codes_follow_status() {
        assert!(ApiError::from_status(401, None).is_unauthorized());
        assert_eq!(ApiError::from_status(403, None).code, "FORBIDDEN");
        assert_eq!(ApiError::from_status(422, None).code, "VALIDATION_ERROR");
        assert_eq!(ApiError::from_status(503, None).code, "SERVER_ERROR");
        let custom = ApiError::from_status(404, Some("Profile missing".into()));
        assert_eq!(custom.error, "Profile missing");
        assert_eq!(custom.code, "NOT_FOUND");
        let blank = ApiError::from_status(500, Some("  ".into()));
        assert_eq!(blank.error, "Request failed with status 500");
    }

    #[test]
    fn api_error_helpers_set_codes() {
        assert_eq!(ApiError::validation("x").code, "VALIDATION_ERROR");
        assert_eq!(ApiError::unknown("x").code, "UNKNOWN");
        assert_eq!(ApiError::request_failed("x").code, "REQUEST_FAILED");
        assert!(ApiError::cancelled().is_cancelled());
        assert!(ApiError::validation("x").is_rejection());
        assert!(!ApiError::request_failed("x").is_rejection());
        assert_eq!(ApiError::validation("bad input").to_string(), "bad input");
    }
}
