use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateContactMessageRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 6, max = 20))]
    pub phone: String,

    #[validate(length(min = 1, max = 200))]
    pub subject: String,

    #[validate(length(min = 10, max = 5000))]
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateMessageStatusRequest {
    /// "pending" | "reviewed" | "resolved"
    #[validate(length(min = 1, max = 20))]
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_body_minimum_length() {
        let req = CreateContactMessageRequest {
            name: "Karim".to_string(),
            email: "karim@example.com".to_string(),
            phone: "+213770000000".to_string(),
            subject: "Rates".to_string(),
            message: "Too short".to_string(),
        };
        assert!(req.validate().is_err());
    }
}
