//! Users and questions endpoints.

use reqwest::Method;
use tracing::{debug, instrument};

use askbox_core::{Result, Storage};

use crate::endpoints::{
    AnswerRequest, QUESTIONS, QUESTIONS_FEED, QUESTIONS_SEND, SendQuestionRequest, USERS,
};
use crate::models::{Question, User};
use crate::session::SessionClient;

/// Question and user operations over a [`SessionClient`].
///
/// Every call except [`feed`](Self::feed) goes through
/// [`SessionClient::authorized_fetch`] and carries the stored access token
/// when there is one. Write operations return the server's JSON reply as-is.
#[derive(Debug)]
pub struct QuestionsApi<'a, S> {
    session: &'a SessionClient<S>,
}

impl<'a, S: Storage> QuestionsApi<'a, S> {
    pub fn new(session: &'a SessionClient<S>) -> Self {
        Self { session }
    }

    /// Lists all registered users.
    #[instrument(skip(self))]
    pub async fn list_users(&self) -> Result<Vec<User>> {
        debug!("Listing users");
        let builder = self.session.http().request(Method::GET, USERS);
        self.session.fetch_json(builder).await
    }

    /// Questions addressed to a user.
    #[instrument(skip(self))]
    pub async fn received_questions(&self, user_id: &str) -> Result<Vec<Question>> {
        debug!("Listing received questions");
        let builder = self
            .session
            .http()
            .request(Method::GET, &questions_path(&["user", user_id]));
        self.session.fetch_json(builder).await
    }

    /// Questions a user has asked.
    #[instrument(skip(self))]
    pub async fn asked_questions(&self, user_id: &str) -> Result<Vec<Question>> {
        debug!("Listing asked questions");
        let builder = self
            .session
            .http()
            .request(Method::GET, &questions_path(&["asked", user_id]));
        self.session.fetch_json(builder).await
    }

    /// Sends a question to another user, optionally without revealing the
    /// sender.
    #[instrument(skip(self, question))]
    pub async fn send_question(
        &self,
        to_user_id: &str,
        question: &str,
        is_anonymous: bool,
    ) -> Result<serde_json::Value> {
        debug!("Sending question");
        let body = SendQuestionRequest {
            to_user_id,
            question,
            is_anonymous,
        };
        let builder = self
            .session
            .http()
            .request(Method::POST, QUESTIONS_SEND)
            .json(&body);
        self.session.fetch_json(builder).await
    }

    #[instrument(skip(self, answer))]
    pub async fn answer_question(
        &self,
        question_id: &str,
        answer: &str,
    ) -> Result<serde_json::Value> {
        debug!("Answering question");
        let builder = self
            .session
            .http()
            .request(Method::POST, &questions_path(&[question_id, "answer"]))
            .json(&AnswerRequest { answer });
        self.session.fetch_json(builder).await
    }

    #[instrument(skip(self))]
    pub async fn ignore_question(&self, question_id: &str) -> Result<serde_json::Value> {
        debug!("Ignoring question");
        let builder = self
            .session
            .http()
            .request(Method::POST, &questions_path(&[question_id, "ignore"]));
        self.session.fetch_json(builder).await
    }

    /// Public feed of answered questions. Sent without credentials.
    #[instrument(skip(self))]
    pub async fn feed(&self) -> Result<Vec<Question>> {
        debug!("Fetching feed");
        let http = self.session.http();
        http.send_json(http.request(Method::GET, QUESTIONS_FEED)).await
    }
}

fn questions_path<'s>(tail: &[&'s str]) -> Vec<&'s str> {
    let mut path: Vec<&'s str> = QUESTIONS.to_vec();
    path.extend_from_slice(tail);
    path
}
