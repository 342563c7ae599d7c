#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = leptos::create_runtime();
    let result = f();
    runtime.dispose();
    result
}

#[cfg(test)]
pub mod helpers {
    use crate::api::{ApiClient, Role};
    use crate::state::auth::{AuthContext, AuthState, AuthStatus, Session};
    use crate::utils::storage::MemoryTokenStorage;
    use leptos::*;
    use std::rc::Rc;

    fn session(user_id: &str, name: &str, role: Role) -> Session {
        Session {
            user_id: user_id.into(),
            name: name.into(),
            email: format!("{}@example.com", user_id),
            role,
            bearer_token: format!("token-{}", user_id),
        }
    }

    pub fn manager_session() -> Session {
        session("u-manager", "Mia Manager", Role::Manager)
    }

    pub fn employee_session() -> Session {
        session("u-employee", "Eli Employee", Role::Employee)
    }

    pub fn coworker_session() -> Session {
        session("u-coworker", "Cora Coworker", Role::Coworker)
    }

    /// Provides a fixed auth state and an API client that never touches the browser.
    pub fn provide_auth(status: AuthStatus, session: Option<Session>) -> AuthContext {
        let tokens = match &session {
            Some(session) => MemoryTokenStorage::with_token(session.bearer_token.clone()),
            None => MemoryTokenStorage::default(),
        };
        provide_context(
            ApiClient::new_with_base_url("http://localhost:3001").with_token_storage(Rc::new(tokens)),
        );
        let ctx = create_signal(AuthState {
            status,
            session,
            error: None,
        });
        provide_context::<AuthContext>(ctx);
        ctx
    }
}
