use crate::{
    api::{ApiError, LoginRequest},
    pages::login::utils,
    state::auth,
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
    pub login_action: Action<LoginRequest, Result<(), ApiError>>,
}

impl LoginViewModel {
    /// Validates locally and dispatches; returns false when nothing was sent.
    pub fn submit(&self) -> bool {
        if self.login_action.pending().get_untracked() {
            return false;
        }
        match utils::validate_credentials(
            &self.email.get_untracked(),
            &self.password.get_untracked(),
        ) {
            Ok(request) => {
                self.error.set(None);
                self.login_action.dispatch(request);
                true
            }
            Err(msg) => {
                self.error.set(Some(msg));
                false
            }
        }
    }
}

pub fn use_login_view_model() -> LoginViewModel {
    let error = create_rw_signal(None::<String>);
    let password = create_rw_signal(String::new());
    let login_action = auth::use_login_action();

    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(()) => {
                    error.set(None);
                    password.set(String::new());
                }
                Err(err) => error.set(Some(err.error)),
            }
        }
    });

    LoginViewModel {
        email: create_rw_signal(String::new()),
        password,
        error,
        login_action,
    }
}
