//! Browser-side calls to the REST API
//!
//! Every helper returns a user-facing message on failure; nothing here panics.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use crate::core::{ApiError, ContactMessage, NewProject, Project, SiteSettings};

/// Message carried by an error response
async fn error_message(response: Response) -> String {
    let status = response.status();
    match response.json::<ApiError>().await {
        Ok(api_error) => api_error.error,
        Err(_) => format!("Request failed with status {status}"),
    }
}

/// Read a JSON body, or turn an error response into its message
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    if !response.ok() {
        return Err(error_message(response).await);
    }
    response
        .json::<T>()
        .await
        .map_err(|e| format!("Unexpected response: {e}"))
}

pub async fn fetch_site_settings() -> Result<SiteSettings, String> {
    let response = Request::get("/api/site")
        .send()
        .await
        .map_err(|_| "Network error. Please try again.".to_string())?;
    read_json(response).await
}

pub async fn fetch_projects() -> Result<Vec<Project>, String> {
    let response = Request::get("/api/projects")
        .send()
        .await
        .map_err(|_| "Network error. Please try again.".to_string())?;
    read_json(response).await
}

pub async fn fetch_project(id: &str) -> Result<Project, String> {
    let response = Request::get(&format!("/api/projects/{}", id))
        .send()
        .await
        .map_err(|_| "Network error. Please try again.".to_string())?;
    read_json(response).await
}

pub async fn create_project(request: &NewProject) -> Result<Project, String> {
    let response = Request::post("/api/projects")
        .header("Content-Type", "application/json")
        .json(request)
        .map_err(|_| "Failed to send request".to_string())?
        .send()
        .await
        .map_err(|_| "Network error. Please try again.".to_string())?;
    read_json(response).await
}

pub async fn submit_contact(message: &ContactMessage) -> Result<(), String> {
    let response = Request::post("/api/contact")
        .header("Content-Type", "application/json")
        .json(message)
        .map_err(|_| "Failed to send request".to_string())?
        .send()
        .await
        .map_err(|_| "Network error. Please try again.".to_string())?;

    if response.ok() {
        Ok(())
    } else {
        Err(error_message(response).await)
    }
}
