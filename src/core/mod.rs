//! Core domain models and logic for the Visionary Studio site

pub mod api_error;
#[cfg(feature = "ssr")]
pub mod config;
pub mod contact;
pub mod content;
pub mod editor;
pub mod format;
pub mod motion;
pub mod pointer;
pub mod projects;
pub mod site;
#[cfg(test)]
mod tests;

pub use api_error::ApiError;
pub use contact::{ContactError, ContactMessage};
pub use editor::EditorTool;
pub use projects::{NewProject, Project, ProjectError};
pub use site::SiteSettings;
