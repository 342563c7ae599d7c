use crate::{
    api::{ApiClient, ApiError, LoginRequest, Role, UserResponse},
    config::UnauthorizedPolicy,
    pages::login::repository::LoginRepository,
    utils::{storage::TokenStorage, token},
};
use chrono::Utc;
use leptos::*;
use std::rc::Rc;

pub type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

const EXPIRED_SESSION_MESSAGE: &str = "Your session has expired. Please sign in again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthStatus {
    Unauthenticated,
    /// Startup begins here while any persisted token is checked.
    #[default]
    Authenticating,
    Authenticated,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub bearer_token: String,
}

impl Session {
    pub fn from_user(user: UserResponse, bearer_token: String) -> Self {
        Self {
            user_id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
            bearer_token,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub status: AuthStatus,
    pub session: Option<Session>,
    pub error: Option<String>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.status == AuthStatus::Authenticated && self.session.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.status == AuthStatus::Authenticating
    }

    pub fn role(&self) -> Option<Role> {
        self.session.as_ref().map(|s| s.role)
    }

    pub fn user_id(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.user_id.as_str())
    }

    fn begin(&mut self) {
        self.status = AuthStatus::Authenticating;
        self.error = None;
    }

    fn establish(&mut self, session: Session) {
        self.status = AuthStatus::Authenticated;
        self.session = Some(session);
        self.error = None;
    }

    fn reject(&mut self, message: Option<String>) {
        self.status = AuthStatus::Unauthenticated;
        self.session = None;
        self.error = message;
    }

    fn fail(&mut self, message: String) {
        self.status = AuthStatus::Error;
        self.session = None;
        self.error = Some(message);
    }
}

fn enter_authenticated(
    tokens: &dyn TokenStorage,
    set_auth_state: WriteSignal<AuthState>,
    session: Session,
) {
    if let Err(err) = tokens.write_token(&session.bearer_token) {
        log::warn!("Session established but token could not be persisted: {}", err);
    }
    log::info!("Signed in as {} ({})", session.user_id, session.role);
    set_auth_state.update(|state| state.establish(session));
}

fn leave_authenticated(
    tokens: &dyn TokenStorage,
    set_auth_state: WriteSignal<AuthState>,
    message: Option<String>,
) {
    tokens.clear_token();
    set_auth_state.update(|state| state.reject(message));
}

fn create_auth_context(repo: LoginRepository) -> AuthContext {
    let (auth_state, set_auth_state) = create_signal(AuthState::default());
    spawn_local(async move {
        if let Err(err) = restore_session(&repo, set_auth_state).await {
            log::debug!("Persisted session not restored: {}", err);
        }
    });
    (auth_state, set_auth_state)
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(|| {
        let api = ApiClient::new();
        provide_context(api.clone());
        api
    });
    let ctx = create_auth_context(LoginRepository::new_with_client(Rc::new(api)));
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

/// Startup check of whatever token durable storage holds.
pub async fn restore_session(
    repo: &LoginRepository,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    let tokens = repo.tokens();
    let Some(persisted) = tokens.read_token() else {
        set_auth_state.update(|state| state.reject(None));
        return Ok(());
    };
    if token::is_expired(&persisted, Utc::now()) {
        leave_authenticated(
            tokens.as_ref(),
            set_auth_state,
            Some(EXPIRED_SESSION_MESSAGE.into()),
        );
        return Ok(());
    }

    set_auth_state.update(|state| state.begin());
    match repo.current_user(&persisted).await {
        Ok(user) => {
            enter_authenticated(
                tokens.as_ref(),
                set_auth_state,
                Session::from_user(user, persisted),
            );
            Ok(())
        }
        Err(err) if err.is_rejection() => {
            leave_authenticated(tokens.as_ref(), set_auth_state, None);
            Err(err)
        }
        Err(err) => {
            // The token may still be good; keep it for the next attempt.
            set_auth_state.update(|state| state.fail(err.error.clone()));
            Err(err)
        }
    }
}

pub async fn login_request(
    request: LoginRequest,
    repo: &LoginRepository,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    set_auth_state.update(|state| state.begin());
    let tokens = repo.tokens();

    match repo.login(request).await {
        Ok(response) => {
            enter_authenticated(
                tokens.as_ref(),
                set_auth_state,
                Session::from_user(response.user, response.token),
            );
            Ok(())
        }
        Err(err) if err.is_rejection() => {
            leave_authenticated(tokens.as_ref(), set_auth_state, Some(err.error.clone()));
            Err(err)
        }
        Err(err) => {
            set_auth_state.update(|state| state.fail(err.error.clone()));
            Err(err)
        }
    }
}

pub fn logout(tokens: &dyn TokenStorage, set_auth_state: WriteSignal<AuthState>) {
    log::info!("Signed out");
    leave_authenticated(tokens, set_auth_state, None);
}

pub fn expire_session(tokens: &dyn TokenStorage, set_auth_state: WriteSignal<AuthState>) {
    log::info!("Session expired by backend");
    leave_authenticated(tokens, set_auth_state, Some(EXPIRED_SESSION_MESSAGE.into()));
}

/// Returns true when the error ended the session.
pub fn apply_unauthorized_policy(
    policy: UnauthorizedPolicy,
    error: &ApiError,
    tokens: &dyn TokenStorage,
    set_auth_state: WriteSignal<AuthState>,
) -> bool {
    if !error.is_unauthorized() || policy != UnauthorizedPolicy::ExpireSession {
        return false;
    }
    expire_session(tokens, set_auth_state);
    true
}

pub fn use_login_action() -> Action<LoginRequest, Result<(), ApiError>> {
    let (_auth, set_auth) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repo = LoginRepository::new_with_client(Rc::new(api));

    create_action(move |request: &LoginRequest| {
        let payload = request.clone();
        let repo = repo.clone();
        async move { login_request(payload, &repo, set_auth).await }
    })
}

pub fn use_logout() -> Callback<()> {
    let (_auth, set_auth) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let tokens = api.token_storage();
    Callback::new(move |_| logout(tokens.as_ref(), set_auth))
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::utils::storage::MemoryTokenStorage;
    use httpmock::prelude::*;

    fn user_json(role: &str) -> serde_json::Value {
        serde_json::json!({
            "id": "u1",
            "email": "alice@example.com",
            "name": "Alice Example",
            "role": role
        })
    }

    fn repo(server: &MockServer, storage: Rc<MemoryTokenStorage>) -> LoginRepository {
        let api = ApiClient::new_with_base_url(server.base_url()).with_token_storage(storage);
        LoginRepository::new_with_client(Rc::new(api))
    }

    fn request() -> LoginRequest {
        LoginRequest {
            email: "alice@example.com".into(),
            password: "secret".into(),
        }
    }

    #[tokio::test]
    async fn login_success_persists_token_and_session() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/auth/login");
                then.status(200).json_body(serde_json::json!({
                    "data": { "token": "t-new", "user": user_json("MANAGER") }
                }));
            })
            .await;

        let runtime = create_runtime();
        let storage = Rc::new(MemoryTokenStorage::default());
        let (state, set_state) = create_signal(AuthState::default());
        login_request(request(), &repo(&server, storage.clone()), set_state)
            .await
            .unwrap();

        let snapshot = state.get();
        assert_eq!(snapshot.status, AuthStatus::Authenticated);
        assert_eq!(snapshot.role(), Some(Role::Manager));
        assert_eq!(
            snapshot.session.map(|s| s.bearer_token).as_deref(),
            Some("t-new")
        );
        assert_eq!(storage.read_token().as_deref(), Some("t-new"));
        runtime.dispose();
    }

    #[tokio::test]
    async fn rejected_credentials_clear_stored_token() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/auth/login");
                then.status(401)
                    .json_body(serde_json::json!({ "error": "Invalid credentials" }));
            })
            .await;

        let runtime = create_runtime();
        let storage = Rc::new(MemoryTokenStorage::with_token("old"));
        let (state, set_state) = create_signal(AuthState::default());
        let err = login_request(request(), &repo(&server, storage.clone()), set_state)
            .await
            .unwrap_err();

        assert!(err.is_unauthorized());
        let snapshot = state.get();
        assert_eq!(snapshot.status, AuthStatus::Unauthenticated);
        assert_eq!(snapshot.error.as_deref(), Some("Invalid credentials"));
        assert!(storage.read_token().is_none());
        runtime.dispose();
    }

    #[tokio::test]
    async fn server_failure_on_login_is_error_state() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/auth/login");
                then.status(503).body("");
            })
            .await;

        let runtime = create_runtime();
        let storage = Rc::new(MemoryTokenStorage::default());
        let (state, set_state) = create_signal(AuthState::default());
        let _ = login_request(request(), &repo(&server, storage), set_state).await;
        assert_eq!(state.get().status, AuthStatus::Error);
        assert!(state.get().error.is_some());
        runtime.dispose();
    }

    #[tokio::test]
    async fn restore_without_token_is_unauthenticated() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/api/auth/me");
                then.status(200)
                    .json_body(serde_json::json!({ "data": user_json("EMPLOYEE") }));
            })
            .await;

        let runtime = create_runtime();
        let (state, set_state) = create_signal(AuthState::default());
        restore_session(&repo(&server, Rc::new(MemoryTokenStorage::default())), set_state)
            .await
            .unwrap();
        assert_eq!(state.get().status, AuthStatus::Unauthenticated);
        assert_eq!(mock.hits_async().await, 0);
        runtime.dispose();
    }

    #[tokio::test]
    async fn restore_with_valid_token_authenticates() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/auth/me")
                    .header("Authorization", "Bearer persisted");
                then.status(200)
                    .json_body(serde_json::json!({ "data": user_json("EMPLOYEE") }));
            })
            .await;

        let runtime = create_runtime();
        let storage = Rc::new(MemoryTokenStorage::with_token("persisted"));
        let (state, set_state) = create_signal(AuthState::default());
        restore_session(&repo(&server, storage.clone()), set_state)
            .await
            .unwrap();
        let snapshot = state.get();
        assert!(snapshot.is_authenticated());
        assert_eq!(snapshot.role(), Some(Role::Employee));
        assert_eq!(storage.read_token().as_deref(), Some("persisted"));
        runtime.dispose();
    }

    #[tokio::test]
    async fn restore_with_invalid_token_clears_it() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/auth/me");
                then.status(401).body("");
            })
            .await;

        let runtime = create_runtime();
        let storage = Rc::new(MemoryTokenStorage::with_token("revoked"));
        let (state, set_state) = create_signal(AuthState::default());
        assert!(restore_session(&repo(&server, storage.clone()), set_state)
            .await
            .is_err());
        assert_eq!(state.get().status, AuthStatus::Unauthenticated);
        assert!(storage.read_token().is_none());
        runtime.dispose();
    }

    #[tokio::test]
    async fn restore_with_expired_jwt_skips_the_network() {
        use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};

        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/api/auth/me");
                then.status(200)
                    .json_body(serde_json::json!({ "data": user_json("EMPLOYEE") }));
            })
            .await;
        let payload = URL_SAFE_NO_PAD.encode(r#"{"sub":"u1","exp":1000}"#);
        let expired = format!("header.{}.sig", payload);

        let runtime = create_runtime();
        let storage = Rc::new(MemoryTokenStorage::with_token(expired));
        let (state, set_state) = create_signal(AuthState::default());
        restore_session(&repo(&server, storage.clone()), set_state)
            .await
            .unwrap();
        assert_eq!(state.get().status, AuthStatus::Unauthenticated);
        assert_eq!(state.get().error.as_deref(), Some(EXPIRED_SESSION_MESSAGE));
        assert!(storage.read_token().is_none());
        assert_eq!(mock.hits_async().await, 0);
        runtime.dispose();
    }

    #[tokio::test]
    async fn restore_during_outage_keeps_token() {
        let runtime = create_runtime();
        let storage = Rc::new(MemoryTokenStorage::with_token("persisted"));
        let api = ApiClient::new_with_base_url("http://127.0.0.1:9").with_token_storage(storage.clone());
        let (state, set_state) = create_signal(AuthState::default());
        let err = restore_session(&LoginRepository::new_with_client(Rc::new(api)), set_state)
            .await
            .unwrap_err();
        assert_eq!(err.code, "REQUEST_FAILED");
        assert_eq!(state.get().status, AuthStatus::Error);
        assert_eq!(storage.read_token().as_deref(), Some("persisted"));
        runtime.dispose();
    }
}
