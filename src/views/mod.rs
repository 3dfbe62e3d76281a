//! Page Views
//!
//! One view per routed page.

mod home;
mod app_detail;
mod anonymous_buzz;
mod not_found;

pub use home::HomeView;
pub use app_detail::AppDetailView;
pub use anonymous_buzz::AnonymousBuzzView;
pub use not_found::NotFoundView;
