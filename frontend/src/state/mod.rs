pub mod absence;
pub mod auth;
pub mod feedback;
pub mod profile;
pub mod resource;
pub mod scope;
