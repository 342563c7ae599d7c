use crate::{
    api::{AbsenceStatistics, ApiError, BackendConfig},
    state::resource::ResourceHandle,
};
use leptos::*;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct VacationDays {
    pub total_days: f64,
    pub used_days: f64,
    pub remaining_days: f64,
}

impl VacationDays {
    pub fn derive(stats: &AbsenceStatistics, config: &BackendConfig) -> Self {
        let total_days = config.annual_vacation_days;
        let used_days = stats.total_days_requested;
        Self {
            total_days,
            used_days,
            remaining_days: (total_days - used_days).max(0.0),
        }
    }

    pub fn allowance_exhausted(&self) -> bool {
        self.used_days >= self.total_days
    }
}

#[derive(Clone)]
pub struct AbsenceStatisticsStore {
    pub statistics: RwSignal<Option<AbsenceStatistics>>,
    pub backend: RwSignal<Option<BackendConfig>>,
    pub resource: ResourceHandle,
}

impl AbsenceStatisticsStore {
    pub fn new(resource: ResourceHandle) -> Self {
        Self {
            statistics: create_rw_signal(None),
            backend: create_rw_signal(None),
            resource,
        }
    }

    /// Statistics and the allowance are fetched together and applied together.
    pub async fn refresh(&self, employee_id: &str) -> Result<(), ApiError> {
        let ticket = self.resource.begin_read();
        let api = self.resource.api();
        let (stats, backend) = futures::join!(
            api.employee_absence_statistics(employee_id),
            api.backend_config()
        );
        let requests = self.resource.scope();
        let applied = requests.accept(ticket);
        self.resource.finish_read(ticket);
        if requests.is_cancelled() {
            return Err(ApiError::cancelled());
        }

        match (stats, backend) {
            (Ok(stats), Ok(backend)) => {
                if applied {
                    self.statistics.set(Some(stats));
                    self.backend.set(Some(backend));
                    self.resource.clear_error();
                }
                Ok(())
            }
            (Err(err), _) | (_, Err(err)) => {
                if applied {
                    self.resource.fail("Load absence statistics", &err);
                }
                Err(err)
            }
        }
    }

    pub fn vacation_days(&self) -> Option<VacationDays> {
        let stats = self.statistics.get()?;
        let backend = self.backend.get()?;
        Some(VacationDays::derive(&stats, &backend))
    }
}

pub fn use_absence_statistics() -> AbsenceStatisticsStore {
    AbsenceStatisticsStore::new(ResourceHandle::use_in_component())
}
