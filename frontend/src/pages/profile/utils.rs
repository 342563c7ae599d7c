use crate::{
    api::{EmployeeProfile, Role, UpdateProfileRequest},
    state::auth::Session,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileTab {
    #[default]
    Overview,
    Feedback,
}

impl ProfileTab {
    pub fn from_query(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some(tab) if tab.eq_ignore_ascii_case("feedback") => ProfileTab::Feedback,
            _ => ProfileTab::Overview,
        }
    }

    pub fn query(&self) -> &'static str {
        match self {
            ProfileTab::Overview => "",
            ProfileTab::Feedback => "?tab=feedback",
        }
    }
}

pub fn is_owner(viewer: &Session, profile: &EmployeeProfile) -> bool {
    profile.user_id.as_deref() == Some(viewer.user_id.as_str()) || profile.id == viewer.user_id
}

/// Owners and managers edit a profile and see its sensitive fields.
pub fn can_edit(viewer: &Session, profile: &EmployeeProfile) -> bool {
    viewer.role == Role::Manager || is_owner(viewer, profile)
}

pub fn can_leave_feedback(viewer: &Session, profile: &EmployeeProfile) -> bool {
    !is_owner(viewer, profile)
}

pub fn format_salary(amount: f64) -> String {
    let whole = amount.round() as i64;
    let digits = whole.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if whole < 0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileDraft {
    pub name: String,
    pub department: String,
    pub position: String,
    pub location: String,
    pub phone: String,
    pub bio: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Department,
    Position,
    Location,
    Phone,
    Bio,
}

impl ProfileDraft {
    fn slot(&mut self, field: DraftField) -> &mut String {
        match field {
            DraftField::Name => &mut self.name,
            DraftField::Department => &mut self.department,
            DraftField::Position => &mut self.position,
            DraftField::Location => &mut self.location,
            DraftField::Phone => &mut self.phone,
            DraftField::Bio => &mut self.bio,
        }
    }

    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::Department => &self.department,
            DraftField::Position => &self.position,
            DraftField::Location => &self.location,
            DraftField::Phone => &self.phone,
            DraftField::Bio => &self.bio,
        }
    }

    pub fn set(&mut self, field: DraftField, value: String) {
        *self.slot(field) = value;
    }

    pub fn from_profile(profile: &EmployeeProfile) -> Self {
        let text = |value: &Option<String>| value.clone().unwrap_or_default();
        Self {
            name: profile.name.clone(),
            department: text(&profile.department),
            position: text(&profile.position),
            location: text(&profile.location),
            phone: text(&profile.phone),
            bio: text(&profile.bio),
        }
    }

    /// Only fields that differ from `current` are sent.
    pub fn changes(&self, current: &EmployeeProfile) -> Result<UpdateProfileRequest, String> {
        if self.name.trim().is_empty() {
            return Err("Name is required".into());
        }
        let changed = |draft: &str, current: Option<&str>| {
            let draft = draft.trim();
            (draft != current.unwrap_or_default().trim()).then(|| draft.to_string())
        };
        Ok(UpdateProfileRequest {
            name: changed(&self.name, Some(current.name.as_str())),
            department: changed(&self.department, current.department.as_deref()),
            position: changed(&self.position, current.position.as_deref()),
            location: changed(&self.location, current.location.as_deref()),
            phone: changed(&self.phone, current.phone.as_deref()),
            bio: changed(&self.bio, current.bio.as_deref()),
        })
    }
}
