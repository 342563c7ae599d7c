mod absence;
mod auth;
pub mod client;
mod feedback;
mod profiles;
pub mod types;

pub use client::*;
pub use types::*;
