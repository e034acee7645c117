//! Application pages module
//!
//! - Landing page (home)
//! - Dashboard (project list)
//! - Editor page
//! - Not found page

mod dashboard;
mod editor;
mod landing;
mod not_found;

pub use dashboard::DashboardPage;
pub use editor::EditorPage;
pub use landing::LandingPage;
pub use not_found::NotFoundPage;
