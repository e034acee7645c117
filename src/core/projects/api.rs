//! Project API endpoints
//!
//! Provides REST API endpoints backing the dashboard and editor pages:
//! - GET /api/projects - List projects
//! - POST /api/projects - Create a project
//! - GET /api/projects/{id} - Get project by ID

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use uuid::Uuid;

use super::{NewProject, Project, ProjectError, ProjectStore};
use crate::core::api_error::ApiError;

/// Project API state
#[derive(Clone, Default)]
pub struct ProjectApiState {
    pub store: ProjectStore,
}

impl ProjectApiState {
    pub fn new(store: ProjectStore) -> Self {
        Self { store }
    }
}

/// Project API error types
#[derive(Debug, thiserror::Error)]
pub enum ProjectApiError {
    #[error("Project not found")]
    NotFound,

    #[error("Invalid project ID")]
    InvalidId,

    #[error("{0}")]
    Invalid(#[from] ProjectError),
}

impl IntoResponse for ProjectApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ProjectApiError::NotFound => (StatusCode::NOT_FOUND, "PROJECT_NOT_FOUND"),
            ProjectApiError::InvalidId => (StatusCode::BAD_REQUEST, "INVALID_PROJECT_ID"),
            ProjectApiError::Invalid(_) => (StatusCode::UNPROCESSABLE_ENTITY, "INVALID_PROJECT"),
        };

        let body = ApiError::new(self.to_string(), code);

        (status, Json(body)).into_response()
    }
}

/// GET /api/projects
pub async fn list_projects(State(state): State<ProjectApiState>) -> Json<Vec<Project>> {
    Json(state.store.list())
}

/// POST /api/projects
pub async fn create_project(
    State(state): State<ProjectApiState>,
    Json(payload): Json<NewProject>,
) -> Result<(StatusCode, Json<Project>), ProjectApiError> {
    let project = state.store.create(payload)?;

    tracing::info!(
        project_id = %project.id,
        width = project.width,
        height = project.height,
        "Project created"
    );

    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /api/projects/{id}
pub async fn get_project(
    State(state): State<ProjectApiState>,
    Path(id): Path<String>,
) -> Result<Json<Project>, ProjectApiError> {
    let id = Uuid::parse_str(&id).map_err(|_| ProjectApiError::InvalidId)?;

    state
        .store
        .get(&id)
        .map(Json)
        .ok_or(ProjectApiError::NotFound)
}

/// Build the project API router
pub fn project_router(state: ProjectApiState) -> Router {
    Router::new()
        .route("/api/projects", get(list_projects).post(create_project))
        .route("/api/projects/{id}", get(get_project))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_then_fetch() {
        let state = ProjectApiState::default();

        let (status, Json(created)) = create_project(
            State(state.clone()),
            Json(NewProject::new("Mountains", 3840, 2160)),
        )
        .await
        .expect("project should be created");
        assert_eq!(status, StatusCode::CREATED);

        let Json(fetched) = get_project(State(state.clone()), Path(created.id.to_string()))
            .await
            .expect("project should exist");
        assert_eq!(fetched, created);

        let Json(all) = list_projects(State(state)).await;
        assert_eq!(all.len(), 1);
    }

    #[tokio::test]
    async fn test_get_unknown_and_malformed_ids() {
        let state = ProjectApiState::default();

        let err = get_project(State(state.clone()), Path(Uuid::new_v4().to_string()))
            .await
            .unwrap_err();
        assert!(matches!(err, ProjectApiError::NotFound));
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);

        let err = get_project(State(state), Path("not-a-uuid".to_string()))
            .await
            .unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_invalid_project() {
        let err = create_project(
            State(ProjectApiState::default()),
            Json(NewProject::new("", 100, 100)),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, ProjectApiError::Invalid(ProjectError::EmptyTitle)));
        assert_eq!(
            err.into_response().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[tokio::test]
    async fn test_router_lists_created_projects() {
        use axum::body::{Body, to_bytes};
        use axum::http::Request;
        use tower::ServiceExt;

        let state = ProjectApiState::default();
        state
            .store
            .create(NewProject::new("Portrait", 1080, 1350))
            .expect("valid project");

        let response = project_router(state)
            .oneshot(
                Request::builder()
                    .uri("/api/projects")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let projects: Vec<Project> = serde_json::from_slice(&body).unwrap();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].title, "Portrait");
    }
}
