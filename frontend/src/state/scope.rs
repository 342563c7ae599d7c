use leptos::on_cleanup;
use std::{cell::Cell, rc::Rc};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket(u64);

#[derive(Debug, Default)]
struct ScopeInner {
    cancelled: Cell<bool>,
    issued: Cell<u64>,
    applied: Cell<u64>,
}

/// Lifetime and ordering guard for one resource's in-flight requests.
///
/// Completions check the scope before touching state: once the owning view is torn
/// down nothing is applied, and a read response older than the last applied one is
/// dropped.
#[derive(Debug, Clone, Default)]
pub struct RequestScope {
    inner: Rc<ScopeInner>,
}

impl RequestScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancels automatically when the current reactive owner is disposed.
    pub fn bind_to_owner() -> Self {
        let scope = Self::new();
        let handle = scope.clone();
        on_cleanup(move || handle.cancel());
        scope
    }

    pub fn cancel(&self) {
        self.inner.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.get()
    }

    pub fn is_live(&self) -> bool {
        !self.is_cancelled()
    }

    pub fn issue(&self) -> RequestTicket {
        let next = self.inner.issued.get() + 1;
        self.inner.issued.set(next);
        RequestTicket(next)
    }

    pub fn is_latest(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.inner.issued.get()
    }

    pub fn accept(&self, ticket: RequestTicket) -> bool {
        if self.is_cancelled() || ticket.0 <= self.inner.applied.get() {
            return false;
        }
        self.inner.applied.set(ticket.0);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_order_responses_are_all_applied() {
        let scope = RequestScope::new();
        let first = scope.issue();
        let second = scope.issue();
        assert!(scope.accept(first));
        assert!(scope.accept(second));
    }

    #[test]
    fn stale_response_after_newer_one_is_dropped() {
        let scope = RequestScope::new();
        let slow = scope.issue();
        let fast = scope.issue();
        assert!(scope.accept(fast));
        assert!(!scope.accept(slow));
        assert!(!scope.is_latest(slow));
        assert!(scope.is_latest(fast));
    }

    #[test]
    fn a_ticket_applies_once() {
        let scope = RequestScope::new();
        let ticket = scope.issue();
        assert!(scope.accept(ticket));
        assert!(!scope.accept(ticket));
    }

    #[test]
    fn cancelled_scope_accepts_nothing() {
        let scope = RequestScope::new();
        let ticket = scope.issue();
        let clone = scope.clone();
        clone.cancel();
        assert!(scope.is_cancelled());
        assert!(!scope.is_live());
        assert!(!scope.accept(ticket));
    }

    #[test]
    fn bound_scope_starts_live() {
        let runtime = leptos::create_runtime();
        let scope = RequestScope::bind_to_owner();
        assert!(scope.is_live());
        runtime.dispose();
    }

    #[test]
    fn unmounting_the_owner_cancels_the_scope() {
        let runtime = leptos::create_runtime();
        let (scope, disposer) =
            leptos::as_child_of_current_owner(|_: ()| RequestScope::bind_to_owner())(());
        let ticket = scope.issue();
        assert!(scope.is_live());
        drop(disposer);
        assert!(scope.is_cancelled());
        assert!(!scope.accept(ticket));
        runtime.dispose();
    }
}
