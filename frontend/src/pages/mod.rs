pub mod absence;
pub mod dashboard;
pub mod feedback;
pub mod login;
pub mod profile;
pub mod profiles;
