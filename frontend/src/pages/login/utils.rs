use crate::api::LoginRequest;

pub fn validate_credentials(email: &str, password: &str) -> Result<LoginRequest, String> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Please enter your email address".into());
    }
    if !email.contains('@') {
        return Err("Please enter a valid email address".into());
    }
    if password.is_empty() {
        return Err("Please enter your password".into());
    }
    Ok(LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_missing_fields() {
        assert!(validate_credentials("", "secret").is_err());
        assert!(validate_credentials("   ", "secret").is_err());
        assert!(validate_credentials("not-an-email", "secret").is_err());
        assert!(validate_credentials("a@example.com", "").is_err());
    }

    #[test]
    fn trims_email_but_not_password() {
        let request = validate_credentials("  a@example.com ", " pw ").unwrap();
        assert_eq!(request.email, "a@example.com");
        assert_eq!(request.password, " pw ");
    }
}
