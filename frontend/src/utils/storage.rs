use std::cell::RefCell;
use web_sys::{Storage, Window};

pub const AUTH_TOKEN_KEY: &str = "authToken";

pub fn window() -> Result<Window, String> {
    web_sys::window().ok_or_else(|| "No window object".to_string())
}

pub fn local_storage() -> Result<Storage, String> {
    window()?
        .local_storage()
        .map_err(|_| "No localStorage".to_string())?
        .ok_or_else(|| "No localStorage".to_string())
}

/// Durable home of the bearer token. The auth store owns every write and clear;
/// the API client only reads.
pub trait TokenStorage {
    fn read_token(&self) -> Option<String>;
    fn write_token(&self, token: &str) -> Result<(), String>;
    fn clear_token(&self);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTokenStorage;

impl TokenStorage for BrowserTokenStorage {
    fn read_token(&self) -> Option<String> {
        local_storage()
            .ok()?
            .get_item(AUTH_TOKEN_KEY)
            .ok()
            .flatten()
            .filter(|token| !token.trim().is_empty())
    }

    fn write_token(&self, token: &str) -> Result<(), String> {
        local_storage()?
            .set_item(AUTH_TOKEN_KEY, token)
            .map_err(|_| "Failed to store token".to_string())
    }

    fn clear_token(&self) {
        if let Ok(storage) = local_storage() {
            let _ = storage.remove_item(AUTH_TOKEN_KEY);
        }
    }
}

#[derive(Debug, Default)]
pub struct MemoryTokenStorage {
    token: RefCell<Option<String>>,
}

impl MemoryTokenStorage {
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RefCell::new(Some(token.into())),
        }
    }
}

impl TokenStorage for MemoryTokenStorage {
    fn read_token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn write_token(&self, token: &str) -> Result<(), String> {
        *self.token.borrow_mut() = Some(token.to_string());
        Ok(())
    }

    fn clear_token(&self) {
        self.token.borrow_mut().take();
    }
}
