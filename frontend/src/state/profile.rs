use crate::{
    api::{ApiError, EmployeeProfile, UpdateProfileRequest},
    state::resource::ResourceHandle,
};
use leptos::*;

/// A single profile: read, then edited in place.
#[derive(Clone)]
pub struct ProfileStore {
    pub profile: RwSignal<Option<EmployeeProfile>>,
    pub saving: RwSignal<bool>,
    pub resource: ResourceHandle,
}

impl ProfileStore {
    pub fn new(resource: ResourceHandle) -> Self {
        Self {
            profile: create_rw_signal(None),
            saving: create_rw_signal(false),
            resource,
        }
    }

    pub async fn load(&self, profile_id: &str) -> Result<(), ApiError> {
        let ticket = self.resource.begin_read();
        let result = self.resource.api().get_profile(profile_id).await;
        let requests = self.resource.scope();
        let applied = requests.accept(ticket);
        self.resource.finish_read(ticket);
        if requests.is_cancelled() {
            return Err(ApiError::cancelled());
        }
        match result {
            Ok(profile) => {
                if applied {
                    self.profile.set(Some(profile));
                    self.resource.clear_error();
                }
                Ok(())
            }
            Err(err) => {
                if applied {
                    self.resource.fail("Load profile", &err);
                }
                Err(err)
            }
        }
    }

    pub async fn save(&self, update: UpdateProfileRequest) -> Result<(), ApiError> {
        let Some(profile_id) = self.profile.with_untracked(|p| p.as_ref().map(|p| p.id.clone()))
        else {
            return Err(self.resource.precondition("No profile loaded"));
        };
        if update.is_empty() {
            return Ok(());
        }

        self.saving.set(true);
        self.resource.clear_error();
        let api = self.resource.api();
        let result = match api.update_profile(&profile_id, &update).await {
            Ok(Some(updated)) => Ok(updated),
            Ok(None) => api.get_profile(&profile_id).await,
            Err(err) => Err(err),
        };
        if self.resource.scope().is_cancelled() {
            return result.map(|_| ());
        }
        self.saving.set(false);
        match result {
            Ok(updated) => {
                self.profile.set(Some(updated));
                Ok(())
            }
            Err(err) => {
                self.resource.fail("Save profile", &err);
                Err(err)
            }
        }
    }
}

#[derive(Clone)]
pub struct ProfileDirectory {
    pub profiles: RwSignal<Vec<EmployeeProfile>>,
    pub resource: ResourceHandle,
}

impl ProfileDirectory {
    pub fn new(resource: ResourceHandle) -> Self {
        Self {
            profiles: create_rw_signal(Vec::new()),
            resource,
        }
    }

    pub async fn refresh(&self) -> Result<(), ApiError> {
        let ticket = self.resource.begin_read();
        let result = self.resource.api().list_profiles().await;
        let requests = self.resource.scope();
        let applied = requests.accept(ticket);
        self.resource.finish_read(ticket);
        if requests.is_cancelled() {
            return Err(ApiError::cancelled());
        }
        match result {
            Ok(profiles) => {
                if applied {
                    self.profiles.set(profiles);
                    self.resource.clear_error();
                }
                Ok(())
            }
            Err(err) => {
                if applied {
                    self.resource.fail("Load profiles", &err);
                }
                Err(err)
            }
        }
    }
}

pub fn use_profile() -> ProfileStore {
    ProfileStore::new(ResourceHandle::use_in_component())
}

pub fn use_profile_directory() -> ProfileDirectory {
    ProfileDirectory::new(ResourceHandle::use_in_component())
}
