//! Typed API client
//!
//! Ties the resource modules, the transport, and the session context
//! together. Every call is a fresh network round trip; mutations rely on
//! the caller re-fetching afterwards.

use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::http::{HttpResponse, HttpTransport};
use crate::models::{
    Envelope, Joke, JokePayload, OverviewSnapshot, Page, Quiz, QuizCategory, QuizCategoryPayload,
    Range, RankedUser, SubscriptionPlan, UserProfile,
};
use crate::request::RequestSpec;
use crate::resources;
use crate::session::Session;

/// Client for the JokeHub admin backend
pub struct ApiClient {
    transport: Arc<dyn HttpTransport>,
    session: Arc<dyn Session>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient").finish()
    }
}

impl ApiClient {
    pub fn new(transport: Arc<dyn HttpTransport>, session: Arc<dyn Session>) -> Self {
        Self { transport, session }
    }

    /// Execute a spec and apply the error taxonomy. A 401 terminates the
    /// session before the error is propagated; callers treat it as fatal
    /// to this request only.
    async fn send(&self, spec: &RequestSpec) -> crate::Result<HttpResponse> {
        let response = self.transport.execute(spec).await?;
        match response.into_result() {
            Err(crate::ApiError::Auth) => {
                tracing::warn!("401 from {} {}, terminating session", spec.method.as_str(), spec.path);
                self.session.terminate();
                Err(crate::ApiError::Auth)
            }
            other => other,
        }
    }

    async fn send_json<T: DeserializeOwned>(&self, spec: &RequestSpec) -> crate::Result<T> {
        let response = self.send(spec).await?;
        Ok(serde_json::from_str(&response.body)?)
    }

    // Jokes

    pub async fn list_jokes(&self, page: u32, limit: u32) -> crate::Result<Page<Joke>> {
        let envelope: Envelope<Page<Joke>> =
            self.send_json(&resources::jokes::list(page, limit)).await?;
        Ok(envelope.data)
    }

    pub async fn create_joke(&self, payload: &JokePayload) -> crate::Result<()> {
        self.send(&resources::jokes::create(payload)).await?;
        Ok(())
    }

    pub async fn update_joke(&self, id: &str, payload: &JokePayload) -> crate::Result<()> {
        self.send(&resources::jokes::update(id, payload)).await?;
        Ok(())
    }

    pub async fn delete_joke(&self, id: &str) -> crate::Result<()> {
        self.send(&resources::jokes::delete(id)).await?;
        Ok(())
    }

    // Quizzes

    pub async fn list_quizzes(&self, page: u32) -> crate::Result<Page<Quiz>> {
        let envelope: Envelope<Page<Quiz>> =
            self.send_json(&resources::quizzes::list(page)).await?;
        Ok(envelope.data)
    }

    pub async fn get_quiz(&self, id: &str) -> crate::Result<Quiz> {
        let envelope: Envelope<Quiz> = self.send_json(&resources::quizzes::get_by_id(id)).await?;
        Ok(envelope.data)
    }

    pub async fn create_quiz(&self, payload: serde_json::Value) -> crate::Result<()> {
        self.send(&resources::quizzes::create(payload)).await?;
        Ok(())
    }

    pub async fn update_quiz(&self, id: &str, payload: serde_json::Value) -> crate::Result<()> {
        self.send(&resources::quizzes::update(id, payload)).await?;
        Ok(())
    }

    pub async fn delete_quiz(&self, id: &str) -> crate::Result<()> {
        self.send(&resources::quizzes::delete(id)).await?;
        Ok(())
    }

    // Quiz categories

    pub async fn list_quiz_categories(&self, page: u32) -> crate::Result<Page<QuizCategory>> {
        let envelope: Envelope<Page<QuizCategory>> =
            self.send_json(&resources::quiz_categories::list(page)).await?;
        Ok(envelope.data)
    }

    pub async fn create_quiz_category(
        &self,
        payload: &QuizCategoryPayload,
    ) -> crate::Result<()> {
        self.send(&resources::quiz_categories::create(payload)).await?;
        Ok(())
    }

    pub async fn update_quiz_category(
        &self,
        id: &str,
        payload: &QuizCategoryPayload,
    ) -> crate::Result<()> {
        self.send(&resources::quiz_categories::update(id, payload)).await?;
        Ok(())
    }

    pub async fn delete_quiz_category(&self, id: &str) -> crate::Result<()> {
        self.send(&resources::quiz_categories::delete(id)).await?;
        Ok(())
    }

    // Subscription plans

    pub async fn list_subscription_plans(&self) -> crate::Result<Vec<SubscriptionPlan>> {
        let envelope: Envelope<Vec<SubscriptionPlan>> =
            self.send_json(&resources::subscription_plans::get_all()).await?;
        Ok(envelope.data)
    }

    pub async fn get_subscription_plan(&self, id: &str) -> crate::Result<SubscriptionPlan> {
        let envelope: Envelope<SubscriptionPlan> = self
            .send_json(&resources::subscription_plans::get_by_id(id))
            .await?;
        Ok(envelope.data)
    }

    pub async fn create_subscription_plan(&self, payload: serde_json::Value) -> crate::Result<()> {
        self.send(&resources::subscription_plans::create(payload)).await?;
        Ok(())
    }

    pub async fn update_subscription_plan(
        &self,
        id: &str,
        payload: serde_json::Value,
    ) -> crate::Result<()> {
        self.send(&resources::subscription_plans::update(id, payload)).await?;
        Ok(())
    }

    pub async fn delete_subscription_plan(&self, id: &str) -> crate::Result<()> {
        self.send(&resources::subscription_plans::delete(id)).await?;
        Ok(())
    }

    // Users

    pub async fn user_profile(&self, id: &str) -> crate::Result<UserProfile> {
        let envelope: Envelope<UserProfile> =
            self.send_json(&resources::users::profile(id)).await?;
        Ok(envelope.data)
    }

    pub async fn update_user_profile(&self, payload: serde_json::Value) -> crate::Result<()> {
        self.send(&resources::users::update_profile(payload)).await?;
        Ok(())
    }

    // Dashboard

    pub async fn dashboard_overview(&self, range: Range) -> crate::Result<OverviewSnapshot> {
        let envelope: Envelope<OverviewSnapshot> =
            self.send_json(&resources::dashboard::overview(range)).await?;
        Ok(envelope.data)
    }

    pub async fn dashboard_user_list(
        &self,
        page: u32,
        limit: u32,
    ) -> crate::Result<Page<UserProfile>> {
        let envelope: Envelope<Page<UserProfile>> = self
            .send_json(&resources::dashboard::user_list(page, limit))
            .await?;
        Ok(envelope.data)
    }

    pub async fn dashboard_ranking(
        &self,
        page: u32,
        limit: u32,
    ) -> crate::Result<Page<RankedUser>> {
        let envelope: Envelope<Page<RankedUser>> = self
            .send_json(&resources::dashboard::ranking(page, limit))
            .await?;
        Ok(envelope.data)
    }
}
