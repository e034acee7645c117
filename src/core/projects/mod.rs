//! Editing projects listed on the dashboard and opened in the editor
//!
//! Project data normally lives in the hosted backend. The server keeps an
//! in-memory `ProjectStore` with the same query surface:
//! - GET /api/projects - List projects, newest first
//! - POST /api/projects - Create a blank project
//! - GET /api/projects/{id} - Get a project by ID

#[cfg(feature = "ssr")]
pub mod api;
#[cfg(feature = "ssr")]
mod store;

#[cfg(feature = "ssr")]
pub use api::{ProjectApiState, project_router};
#[cfg(feature = "ssr")]
pub use store::ProjectStore;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const MAX_TITLE_LENGTH: usize = 80;
pub const MAX_CANVAS_SIZE: u32 = 8192;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProjectError {
    #[error("Project title cannot be empty")]
    EmptyTitle,

    #[error("Project title must be at most 80 characters")]
    TitleTooLong,

    #[error("Canvas size must be between 1 and 8192 pixels")]
    InvalidDimensions,
}

/// A saved editing project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    pub fn editor_href(&self) -> String {
        format!("/editor/{}", self.id)
    }

    pub fn aspect_ratio(&self) -> f64 {
        if self.height == 0 {
            return 1.0;
        }
        self.width as f64 / self.height as f64
    }
}

/// Request body for creating a project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProject {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl NewProject {
    pub fn new(title: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            title: title.into(),
            width,
            height,
        }
    }

    pub fn validate(&self) -> Result<(), ProjectError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ProjectError::EmptyTitle);
        }
        if title.chars().count() > MAX_TITLE_LENGTH {
            return Err(ProjectError::TitleTooLong);
        }

        let in_range = |v: u32| (1..=MAX_CANVAS_SIZE).contains(&v);
        if !in_range(self.width) || !in_range(self.height) {
            return Err(ProjectError::InvalidDimensions);
        }

        Ok(())
    }
}

/// Canvas size presets offered by the new project dialog
pub const CANVAS_PRESETS: &[(&str, u32, u32)] = &[
    ("Instagram Post", 1080, 1080),
    ("Story", 1080, 1920),
    ("Full HD", 1920, 1080),
    ("4K", 3840, 2160),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_project_validation() {
        assert_eq!(NewProject::new("Beach", 1920, 1080).validate(), Ok(()));
        assert_eq!(
            NewProject::new("  ", 1920, 1080).validate(),
            Err(ProjectError::EmptyTitle)
        );
        assert_eq!(
            NewProject::new("x".repeat(81), 10, 10).validate(),
            Err(ProjectError::TitleTooLong)
        );
        assert_eq!(
            NewProject::new("Beach", 0, 1080).validate(),
            Err(ProjectError::InvalidDimensions)
        );
        assert_eq!(
            NewProject::new("Beach", 1920, MAX_CANVAS_SIZE + 1).validate(),
            Err(ProjectError::InvalidDimensions)
        );
    }

    #[test]
    fn test_presets_are_valid() {
        for (name, w, h) in CANVAS_PRESETS {
            assert_eq!(NewProject::new(*name, *w, *h).validate(), Ok(()));
        }
    }

    #[test]
    fn test_editor_href_and_ratio() {
        let now = Utc::now();
        let project = Project {
            id: Uuid::nil(),
            title: "Portrait".to_string(),
            width: 1080,
            height: 1920,
            created_at: now,
            updated_at: now,
        };
        assert_eq!(
            project.editor_href(),
            "/editor/00000000-0000-0000-0000-000000000000"
        );
        assert!((project.aspect_ratio() - 0.5625).abs() < 1e-9);
    }
}
