//! Endpoint paths and wire types.

use serde::Serialize;

// ============================================================================
// Endpoint Paths
// ============================================================================

/// POST /api/auth/signin
pub const SIGNIN: &[&str] = &["api", "auth", "signin"];

/// POST /api/auth/signup
pub const SIGNUP: &[&str] = &["api", "auth", "signup"];

/// POST /api/auth/logout
pub const LOGOUT: &[&str] = &["api", "auth", "logout"];

/// GET /api/users
pub const USERS: &[&str] = &["api", "users"];

/// GET /api/questions/feed
pub const QUESTIONS_FEED: &[&str] = &["api", "questions", "feed"];

/// POST /api/questions/send
pub const QUESTIONS_SEND: &[&str] = &["api", "questions", "send"];

/// Prefix of every questions endpoint.
pub const QUESTIONS: &[&str] = &["api", "questions"];

// ============================================================================
// Request Bodies
// ============================================================================

/// Request body for signin.
#[derive(Serialize)]
pub struct SigninRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Request body for signup.
#[derive(Serialize)]
pub struct SignupRequest<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

/// Request body for logout.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoutRequest<'a> {
    pub refresh_token: &'a str,
}

/// Request body for sending a question.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendQuestionRequest<'a> {
    pub to_user_id: &'a str,
    pub question: &'a str,
    pub is_anonymous: bool,
}

/// Request body for answering a question.
#[derive(Debug, Serialize)]
pub struct AnswerRequest<'a> {
    pub answer: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn logout_body_uses_camel_case() {
        let body = serde_json::to_value(LogoutRequest {
            refresh_token: "RT1",
        })
        .unwrap();
        assert_eq!(body, json!({"refreshToken": "RT1"}));
    }

    #[test]
    fn send_question_body_uses_camel_case() {
        let body = serde_json::to_value(SendQuestionRequest {
            to_user_id: "u2",
            question: "Tabs or spaces?",
            is_anonymous: true,
        })
        .unwrap();
        assert_eq!(
            body,
            json!({"toUserId": "u2", "question": "Tabs or spaces?", "isAnonymous": true})
        );
    }
}
