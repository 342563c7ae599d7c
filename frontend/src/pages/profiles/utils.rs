use crate::api::EmployeeProfile;

/// Case-insensitive match on name, department or position; blank matches all.
pub fn filter_profiles(profiles: &[EmployeeProfile], query: &str) -> Vec<EmployeeProfile> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return profiles.to_vec();
    }
    profiles
        .iter()
        .filter(|profile| {
            [
                Some(profile.name.as_str()),
                profile.department.as_deref(),
                profile.position.as_deref(),
            ]
            .into_iter()
            .flatten()
            .any(|field| field.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

pub fn profile_href(id: &str) -> String {
    format!("/profile/{}", id)
}

pub fn feedback_href(id: &str) -> String {
    format!("/profile/{}?tab=feedback", id)
}
