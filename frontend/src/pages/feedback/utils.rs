use crate::{
    api::{Feedback, Role},
    state::{auth::Session, feedback::is_temporary},
};
use chrono::{DateTime, Utc};

pub const MAX_FEEDBACK_LEN: usize = 1000;

/// Authors may withdraw their own feedback; managers may remove any.
pub fn can_delete(feedback: &Feedback, viewer: &Session) -> bool {
    if is_temporary(&feedback.id) {
        return false;
    }
    viewer.role == Role::Manager || feedback.author_id == viewer.user_id
}

pub fn validate_body(body: &str) -> Result<String, String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Err("Feedback cannot be empty".into());
    }
    if trimmed.chars().count() > MAX_FEEDBACK_LEN {
        return Err(format!(
            "Feedback must be at most {} characters",
            MAX_FEEDBACK_LEN
        ));
    }
    Ok(trimmed.to_string())
}

pub fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.format("%b %-d, %Y %H:%M").to_string()
}
