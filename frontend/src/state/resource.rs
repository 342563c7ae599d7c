use crate::{
    api::{ApiClient, ApiError},
    config::{self, UnauthorizedPolicy},
    state::{
        auth::{self, AuthContext, Session},
        scope::{RequestScope, RequestTicket},
    },
};
use leptos::*;
use std::rc::Rc;

/// Loading flag, error banner and request bookkeeping shared by every store.
#[derive(Clone)]
pub struct ResourceHandle {
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    api: Rc<ApiClient>,
    auth: AuthContext,
    scope: RequestScope,
    policy: UnauthorizedPolicy,
}

impl ResourceHandle {
    pub fn new(
        api: Rc<ApiClient>,
        auth: AuthContext,
        scope: RequestScope,
        policy: UnauthorizedPolicy,
    ) -> Self {
        Self {
            loading: create_rw_signal(false),
            error: create_rw_signal(None),
            api,
            auth,
            scope,
            policy,
        }
    }

    /// Wires the handle to the surrounding component: its API client, session and
    /// an unmount-bound request scope.
    pub fn use_in_component() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        Self::new(
            Rc::new(api),
            auth::use_auth(),
            RequestScope::bind_to_owner(),
            config::current().unauthorized_policy,
        )
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn scope(&self) -> &RequestScope {
        &self.scope
    }

    pub fn session(&self) -> Option<Session> {
        self.auth.0.with_untracked(|state| state.session.clone())
    }

    pub fn begin_read(&self) -> RequestTicket {
        let ticket = self.scope.issue();
        self.loading.set(true);
        self.error.set(None);
        ticket
    }

    pub fn finish_read(&self, ticket: RequestTicket) {
        if self.scope.is_live() && self.scope.is_latest(ticket) {
            self.loading.set(false);
        }
    }

    pub fn clear_error(&self) {
        if self.scope.is_live() {
            self.error.set(None);
        }
    }

    /// Local precondition failures never reach the network.
    pub fn precondition(&self, message: &str) -> ApiError {
        let err = ApiError::validation(message);
        if self.scope.is_live() {
            self.error.set(Some(err.error.clone()));
        }
        err
    }

    pub fn fail(&self, operation: &str, err: &ApiError) {
        log::error!("{} failed: {} ({})", operation, err.error, err.code);
        if self.scope.is_cancelled() {
            return;
        }
        let tokens = self.api.token_storage();
        auth::apply_unauthorized_policy(self.policy, err, tokens.as_ref(), self.auth.1);
        self.error.set(Some(err.error.clone()));
    }
}
