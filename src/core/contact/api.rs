//! Contact API endpoint
//!
//! - POST /api/contact - Submit a contact form message

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use serde::{Deserialize, Serialize};

use super::{ContactError, ContactMessage};
use crate::core::api_error::ApiError;

/// Contact API state
#[derive(Clone, Debug, Default)]
pub struct ContactApiState {
    /// Address messages are forwarded to, when configured
    pub inbox: Option<String>,
}

impl ContactApiState {
    pub fn new(inbox: Option<String>) -> Self {
        Self { inbox }
    }
}

/// Contact API error types
#[derive(Debug, thiserror::Error)]
pub enum ContactApiError {
    #[error("{0}")]
    Invalid(#[from] ContactError),
}

impl IntoResponse for ContactApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ContactApiError::Invalid(_) => (StatusCode::UNPROCESSABLE_ENTITY, "INVALID_CONTACT"),
        };

        let body = ApiError::new(self.to_string(), code);

        (status, Json(body)).into_response()
    }
}

/// Acknowledgement returned for an accepted message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactReceipt {
    pub received: bool,
}

/// POST /api/contact
pub async fn submit_contact(
    State(state): State<ContactApiState>,
    Json(payload): Json<ContactMessage>,
) -> Result<(StatusCode, Json<ContactReceipt>), ContactApiError> {
    let message = payload.trimmed();

    if let Err(e) = message.validate() {
        tracing::debug!("Rejected contact message: {}", e);
        return Err(e.into());
    }

    tracing::debug!(name = %message.name, email = %message.email, "Contact sender");
    tracing::info!(
        domain = message.sender_domain(),
        length = message.message.chars().count(),
        inbox = state.inbox.as_deref().unwrap_or("<unset>"),
        "Contact message received"
    );

    Ok((StatusCode::ACCEPTED, Json(ContactReceipt { received: true })))
}

/// Build the contact API router
pub fn contact_router(state: ContactApiState) -> Router {
    Router::new()
        .route("/api/contact", post(submit_contact))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_accepts_valid_message() {
        let state = ContactApiState::new(Some("hello@visionary.studio".to_string()));
        let payload = ContactMessage::new(" Ada ", "ada@example.com", "Please add RAW support!");

        let (status, Json(receipt)) = submit_contact(State(state), Json(payload))
            .await
            .expect("valid message should be accepted");

        assert_eq!(status, StatusCode::ACCEPTED);
        assert!(receipt.received);
    }

    #[tokio::test]
    async fn test_rejects_invalid_email() {
        let payload = ContactMessage::new("Ada", "not-an-email", "Please add RAW support!");

        let err = submit_contact(State(ContactApiState::default()), Json(payload))
            .await
            .expect_err("invalid email should be rejected");

        assert!(matches!(
            err,
            ContactApiError::Invalid(ContactError::InvalidEmail)
        ));
        assert_eq!(
            err.into_response().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }
}
