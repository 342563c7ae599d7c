use crate::{
    api::{ApiError, Feedback, NewFeedback},
    state::resource::ResourceHandle,
};
use chrono::{DateTime, Utc};
use leptos::*;
use uuid::Uuid;

pub const TEMP_ID_PREFIX: &str = "temp-";

pub fn is_temporary(id: &str) -> bool {
    id.starts_with(TEMP_ID_PREFIX)
}

pub fn optimistic_record(
    author_id: &str,
    target_id: &str,
    body: &str,
    now: DateTime<Utc>,
) -> Feedback {
    Feedback {
        id: format!("{}{}", TEMP_ID_PREFIX, Uuid::new_v4()),
        author_id: author_id.to_string(),
        target_id: target_id.to_string(),
        body: body.to_string(),
        created_at: now,
        updated_at: now,
    }
}

pub fn insert_optimistic(list: &mut Vec<Feedback>, record: Feedback) {
    list.insert(0, record);
}

/// Swaps the temporary record for the server's copy in place.
pub fn reconcile(list: &mut [Feedback], temp_id: &str, canonical: Feedback) -> bool {
    match list.iter_mut().find(|item| item.id == temp_id) {
        Some(slot) => {
            *slot = canonical;
            true
        }
        None => false,
    }
}

pub fn rollback(list: &mut Vec<Feedback>, temp_id: &str) -> bool {
    let before = list.len();
    list.retain(|item| item.id != temp_id);
    list.len() != before
}

pub fn remove(list: &mut Vec<Feedback>, id: &str) -> Option<Feedback> {
    let index = list.iter().position(|item| item.id == id)?;
    Some(list.remove(index))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackScope {
    Received,
    Profile(String),
}

#[derive(Clone)]
pub struct FeedbackStore {
    pub items: RwSignal<Vec<Feedback>>,
    /// True while a create is waiting for the server.
    pub creating: RwSignal<bool>,
    pub resource: ResourceHandle,
}

impl FeedbackStore {
    pub fn new(resource: ResourceHandle) -> Self {
        Self::with_items(resource, Vec::new())
    }

    pub fn with_items(resource: ResourceHandle, items: Vec<Feedback>) -> Self {
        Self {
            items: create_rw_signal(items),
            creating: create_rw_signal(false),
            resource,
        }
    }

    pub async fn refresh(&self, scope: FeedbackScope) -> Result<(), ApiError> {
        let ticket = self.resource.begin_read();
        let api = self.resource.api();
        let result = match &scope {
            FeedbackScope::Received => api.list_received_feedback().await,
            FeedbackScope::Profile(id) => api.list_profile_feedback(id).await,
        };
        let requests = self.resource.scope();
        let applied = requests.accept(ticket);
        self.resource.finish_read(ticket);

        if requests.is_cancelled() {
            return Err(ApiError::cancelled());
        }
        match result {
            Ok(items) => {
                if applied {
                    self.items.set(items);
                    self.resource.clear_error();
                } else {
                    log::debug!("Dropped stale feedback response for {:?}", scope);
                }
                Ok(())
            }
            Err(err) => {
                if applied {
                    self.resource.fail("Refresh feedback", &err);
                }
                Err(err)
            }
        }
    }

    pub async fn create(&self, profile_id: &str, payload: NewFeedback) -> Result<(), ApiError> {
        let body = payload.body.trim().to_string();
        if body.is_empty() {
            return Err(self.resource.precondition("Feedback cannot be empty"));
        }
        let Some(session) = self.resource.session() else {
            return Err(self.resource.precondition("You must be signed in to leave feedback"));
        };

        let temp = optimistic_record(&session.user_id, profile_id, &body, Utc::now());
        let temp_id = temp.id.clone();
        self.resource.clear_error();
        self.creating.set(true);
        self.items.update(|items| insert_optimistic(items, temp));

        let result = self
            .resource
            .api()
            .create_profile_feedback(profile_id, &NewFeedback { body })
            .await;
        if self.resource.scope().is_cancelled() {
            return result.map(|_| ());
        }
        self.creating.set(false);
        match result {
            Ok(Some(canonical)) => {
                self.items.update(|items| {
                    reconcile(items, &temp_id, canonical);
                });
                Ok(())
            }
            Ok(None) => {
                log::warn!("Feedback created without a record in the response; keeping {}", temp_id);
                Ok(())
            }
            Err(err) => {
                self.items.update(|items| {
                    rollback(items, &temp_id);
                });
                self.resource.fail("Create feedback", &err);
                Err(err)
            }
        }
    }

    /// Removes the record immediately. A failed delete surfaces an error but does
    /// not put the record back.
    pub async fn delete(&self, feedback_id: &str) -> Result<(), ApiError> {
        if is_temporary(feedback_id) {
            return Err(self.resource.precondition("Feedback is still being saved"));
        }
        self.resource.clear_error();
        self.items.update(|items| {
            remove(items, feedback_id);
        });

        let result = self.resource.api().delete_feedback(feedback_id).await;
        if let Err(err) = &result {
            self.resource.fail("Delete feedback", err);
        }
        result
    }
}

pub fn use_feedback() -> FeedbackStore {
    FeedbackStore::new(ResourceHandle::use_in_component())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record(id: &str) -> Feedback {
        let at = Utc.with_ymd_and_hms(2025, 1, 2, 10, 0, 0).unwrap();
        Feedback {
            id: id.into(),
            author_id: "u1".into(),
            target_id: "p1".into(),
            body: format!("body {}", id),
            created_at: at,
            updated_at: at,
        }
    }

    #[test]
    fn optimistic_record_is_temporary_and_timestamped() {
        let now = Utc::now();
        let temp = optimistic_record("u1", "p1", "Great work", now);
        assert!(is_temporary(&temp.id));
        assert_eq!(temp.created_at, now);
        assert_eq!(temp.updated_at, now);
        let other = optimistic_record("u1", "p1", "Great work", now);
        assert_ne!(temp.id, other.id);
    }

    #[test]
    fn reconcile_swaps_in_place_without_changing_length() {
        let mut list = vec![record("f1"), record("f2")];
        let temp = optimistic_record("u1", "p1", "new", Utc::now());
        let temp_id = temp.id.clone();
        insert_optimistic(&mut list, temp);
        assert_eq!(list.len(), 3);
        assert!(reconcile(&mut list, &temp_id, record("f3")));
        assert_eq!(list.len(), 3);
        assert_eq!(list[0].id, "f3");
        assert!(!reconcile(&mut list, &temp_id, record("f4")));
    }

    #[test]
    fn rollback_restores_previous_list() {
        let original = vec![record("f1"), record("f2"), record("f3")];
        let mut list = original.clone();
        let temp = optimistic_record("u1", "p1", "new", Utc::now());
        let temp_id = temp.id.clone();
        insert_optimistic(&mut list, temp);
        assert!(rollback(&mut list, &temp_id));
        assert_eq!(list, original);
    }

    #[test]
    fn rollback_leaves_other_pending_records() {
        let mut list = vec![record("f1")];
        let first = optimistic_record("u1", "p1", "one", Utc::now());
        let second = optimistic_record("u1", "p1", "two", Utc::now());
        let first_id = first.id.clone();
        let second_id = second.id.clone();
        insert_optimistic(&mut list, first);
        insert_optimistic(&mut list, second);
        rollback(&mut list, &first_id);
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].id, second_id);
    }

    #[test]
    fn remove_returns_the_record() {
        let mut list = vec![record("f1"), record("f2")];
        assert_eq!(remove(&mut list, "f1").map(|f| f.id).as_deref(), Some("f1"));
        assert!(remove(&mut list, "missing").is_none());
        assert_eq!(list.len(), 1);
    }
}
