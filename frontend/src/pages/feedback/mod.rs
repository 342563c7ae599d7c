pub mod components;
pub mod panel;
pub mod utils;

pub use panel::FeedbackPage;
