//! Contact form messages
//!
//! Validation is shared by the browser form and the `/api/contact` endpoint.

#[cfg(feature = "ssr")]
pub mod api;

#[cfg(feature = "ssr")]
pub use api::contact_router;

use serde::{Deserialize, Serialize};

pub const MAX_NAME_LENGTH: usize = 100;
pub const MIN_MESSAGE_LENGTH: usize = 10;
pub const MAX_MESSAGE_LENGTH: usize = 2000;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error("Please tell us your name")]
    MissingName,

    #[error("Name must be at most 100 characters")]
    NameTooLong,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Message must be at least 10 characters")]
    MessageTooShort,

    #[error("Message must be at most 2000 characters")]
    MessageTooLong,
}

/// Message submitted through the landing page contact form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Copy with surrounding whitespace removed from every field
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }

    /// Check all fields, reporting the first problem found
    pub fn validate(&self) -> Result<(), ContactError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ContactError::MissingName);
        }
        if name.chars().count() > MAX_NAME_LENGTH {
            return Err(ContactError::NameTooLong);
        }

        if !is_valid_email(self.email.trim()) {
            return Err(ContactError::InvalidEmail);
        }

        let length = self.message.trim().chars().count();
        if length < MIN_MESSAGE_LENGTH {
            return Err(ContactError::MessageTooShort);
        }
        if length > MAX_MESSAGE_LENGTH {
            return Err(ContactError::MessageTooLong);
        }

        Ok(())
    }

    /// Domain part of the sender address, the only sender detail that is logged
    pub fn sender_domain(&self) -> &str {
        self.email
            .trim()
            .rsplit_once('@')
            .map(|(_, domain)| domain)
            .unwrap_or("")
    }
}

/// Loose structural check: `local@domain.tld`, no whitespace
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> ContactMessage {
        ContactMessage::new("Ada", "ada@example.com", "I love the upscaler!")
    }

    #[test]
    fn test_valid_message() {
        assert_eq!(valid().validate(), Ok(()));
    }

    #[test]
    fn test_missing_name() {
        let msg = ContactMessage {
            name: "   ".to_string(),
            ..valid()
        };
        assert_eq!(msg.validate(), Err(ContactError::MissingName));
    }

    #[test]
    fn test_long_name() {
        let msg = ContactMessage {
            name: "a".repeat(MAX_NAME_LENGTH + 1),
            ..valid()
        };
        assert_eq!(msg.validate(), Err(ContactError::NameTooLong));
    }

    #[test]
    fn test_email_rules() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@mail.example.org"));
        assert!(!is_valid_email("plainaddress"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("a@localhost"));
        assert!(!is_valid_email("a@b..com"));
        assert!(!is_valid_email("a@b@c.com"));
        assert!(!is_valid_email("a b@c.com"));
    }

    #[test]
    fn test_message_length_bounds() {
        let short = ContactMessage {
            message: "too short".to_string(),
            ..valid()
        };
        assert_eq!(short.validate(), Err(ContactError::MessageTooShort));

        let long = ContactMessage {
            message: "x".repeat(MAX_MESSAGE_LENGTH + 1),
            ..valid()
        };
        assert_eq!(long.validate(), Err(ContactError::MessageTooLong));
    }

    #[test]
    fn test_sender_domain_hides_local_part() {
        let msg = ContactMessage::new("Ada", " ada.lovelace@example.com ", "Hello there team");
        assert_eq!(msg.sender_domain(), "example.com");
        assert!(!msg.sender_domain().contains("ada"));
        assert_eq!(ContactMessage::new("Ada", "nobody", "Hello").sender_domain(), "");
    }

    #[test]
    fn test_trimmed() {
        let msg = ContactMessage::new("  Ada ", " ada@example.com\n", "\tHello there team ");
        let trimmed = msg.trimmed();
        assert_eq!(trimmed.name, "Ada");
        assert_eq!(trimmed.email, "ada@example.com");
        assert_eq!(trimmed.message, "Hello there team");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ContactError::MessageTooShort.to_string(),
            "Message must be at least 10 characters"
        );
    }
}
