use std::sync::Arc;

use chrono::Utc;
use dashmap::DashMap;
use uuid::Uuid;

use super::{NewProject, Project, ProjectError};

/// In-memory project storage, cheap to clone and share between handlers
#[derive(Clone, Default)]
pub struct ProjectStore {
    projects: Arc<DashMap<Uuid, Project>>,
}

impl ProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&self, request: NewProject) -> Result<Project, ProjectError> {
        request.validate()?;

        let now = Utc::now();
        let project = Project {
            id: Uuid::new_v4(),
            title: request.title.trim().to_string(),
            width: request.width,
            height: request.height,
            created_at: now,
            updated_at: now,
        };

        self.projects.insert(project.id, project.clone());
        Ok(project)
    }

    pub fn get(&self, id: &Uuid) -> Option<Project> {
        self.projects.get(id).map(|entry| entry.value().clone())
    }

    /// All projects, most recently updated first
    pub fn list(&self) -> Vec<Project> {
        let mut projects: Vec<Project> = self
            .projects
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        projects.sort_by(|a, b| {
            b.updated_at
                .cmp(&a.updated_at)
                .then_with(|| a.title.cmp(&b.title))
        });
        projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_create_and_get() {
        let store = ProjectStore::new();
        let project = store
            .create(NewProject::new("  Sunset  ", 1920, 1080))
            .unwrap();

        assert_eq!(project.title, "Sunset");
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&project.id), Some(project));
        assert_eq!(store.get(&Uuid::new_v4()), None);
    }

    #[test]
    fn test_create_rejects_invalid() {
        let store = ProjectStore::new();
        let err = store.create(NewProject::new("", 10, 10)).unwrap_err();
        assert_eq!(err, ProjectError::EmptyTitle);
        assert!(store.is_empty());
    }

    #[test]
    fn test_list_newest_first() {
        let store = ProjectStore::new();
        let older = store.create(NewProject::new("Older", 10, 10)).unwrap();
        let newer = store.create(NewProject::new("Newer", 10, 10)).unwrap();

        // Pin timestamps so ordering does not depend on clock resolution
        store.projects.alter(&older.id, |_, mut p| {
            p.updated_at = newer.updated_at - Duration::seconds(60);
            p
        });

        let titles: Vec<String> = store.list().into_iter().map(|p| p.title).collect();
        assert_eq!(titles, vec!["Newer".to_string(), "Older".to_string()]);
    }

    #[test]
    fn test_clones_share_storage() {
        let store = ProjectStore::new();
        let handle = store.clone();
        handle.create(NewProject::new("Shared", 100, 100)).unwrap();
        assert_eq!(store.len(), 1);
    }
}
