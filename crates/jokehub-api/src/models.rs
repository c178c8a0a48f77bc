//! Typed models mirroring the backend JSON
//!
//! Records are owned by the backend; the client only ever holds a
//! transient, possibly-stale copy. Optional counters default to zero so a
//! sparse snapshot still renders.

use serde::{Deserialize, Serialize};

use crate::request::{Attachment, Body, Part};

/// A joke record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Joke {
    #[serde(rename = "_id")]
    pub id: String,
    pub text: String,
    pub joke_answer: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Form payload for creating or updating a joke
#[derive(Debug, Clone, Default)]
pub struct JokePayload {
    pub text: String,
    pub joke_answer: String,
    pub image_url: Option<String>,
    pub image: Option<Attachment>,
}

impl JokePayload {
    /// JSON body normally; multipart exactly when the payload carries
    /// binary attachment data.
    pub fn to_body(&self) -> Body {
        match &self.image {
            Some(attachment) => {
                let mut parts = vec![
                    Part::Text {
                        name: "text".to_string(),
                        value: self.text.clone(),
                    },
                    Part::Text {
                        name: "jokeAnswer".to_string(),
                        value: self.joke_answer.clone(),
                    },
                ];
                parts.push(Part::File {
                    name: "image".to_string(),
                    attachment: attachment.clone(),
                });
                Body::Multipart(parts)
            }
            None => Body::Json(serde_json::json!({
                "text": self.text,
                "jokeAnswer": self.joke_answer,
                "imageUrl": self.image_url,
            })),
        }
    }
}

/// Pagination metadata as reported by the server. The client never
/// recomputes these values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_page")]
    pub total_pages: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            total_pages: 1,
        }
    }
}

fn default_page() -> u32 {
    1
}

/// One page of a resource collection. Different resources name the item
/// array after themselves; the aliases cover the collections this client
/// manages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    #[serde(
        default = "Vec::new",
        alias = "jokes",
        alias = "quizzes",
        alias = "categories",
        alias = "users",
        alias = "ranking"
    )]
    pub items: Vec<T>,
    #[serde(default)]
    pub pagination: Pagination,
}

/// Standard `{ "data": ... }` response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

/// A quiz record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    #[serde(rename = "_id")]
    pub id: String,
    pub question: String,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub correct_answer: Option<String>,
    #[serde(default)]
    pub category_id: Option<String>,
}

/// A quiz category record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizCategory {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Form payload for creating or updating a quiz category
#[derive(Debug, Clone, Default)]
pub struct QuizCategoryPayload {
    pub name: String,
    pub image: Option<Attachment>,
}

impl QuizCategoryPayload {
    pub fn to_body(&self) -> Body {
        match &self.image {
            Some(attachment) => Body::Multipart(vec![
                Part::Text {
                    name: "name".to_string(),
                    value: self.name.clone(),
                },
                Part::File {
                    name: "image".to_string(),
                    attachment: attachment.clone(),
                },
            ]),
            None => Body::Json(serde_json::json!({ "name": self.name })),
        }
    }
}

/// A subscription plan record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionPlan {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub duration_days: u32,
}

/// A user profile record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// A ranked user row from the dashboard ranking endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedUser {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub score: u64,
}

/// Time-bucketing selector for the overview aggregate query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Range {
    Daily,
    Week,
    Month,
    Year,
}

impl Range {
    pub const ALL: [Range; 4] = [Range::Daily, Range::Week, Range::Month, Range::Year];

    /// Query-string form of the selector
    pub fn as_str(&self) -> &'static str {
        match self {
            Range::Daily => "daily",
            Range::Week => "week",
            Range::Month => "month",
            Range::Year => "year",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Range::Daily => "Daily",
            Range::Week => "Week",
            Range::Month => "Month",
            Range::Year => "Year",
        }
    }
}

/// One labeled bucket of a count series
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledCount {
    pub label: String,
    #[serde(default)]
    pub count: u64,
}

/// Scalar counters shown as numeric cards
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewCards {
    #[serde(default)]
    pub total_users: u64,
    #[serde(default)]
    pub total_quizzes: u64,
    #[serde(default)]
    pub active_subscriptions: u64,
    #[serde(default)]
    pub total_revenue_estimate_monthly: u64,
}

/// Weekday-bucketed quiz attendance series
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizAttendance {
    #[serde(default)]
    pub by_weekday: Vec<LabeledCount>,
}

/// Free vs premium subscription split
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveySubscription {
    #[serde(default)]
    pub free_users: u64,
    #[serde(default)]
    pub premium_users: u64,
}

/// Month-bucketed user joining series
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserJoiningOverview {
    #[serde(default)]
    pub by_month: Vec<LabeledCount>,
}

/// Read-only aggregate snapshot keyed by a range selector. The server is
/// the sole source of truth; missing fields render as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewSnapshot {
    #[serde(default)]
    pub cards: OverviewCards,
    #[serde(default)]
    pub quiz_attendance: QuizAttendance,
    #[serde(default)]
    pub survey_subscription: SurveySubscription,
    #[serde(default)]
    pub user_joining_overview: UserJoiningOverview,
}
