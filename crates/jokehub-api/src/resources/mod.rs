//! Resource API modules
//!
//! One module per backend resource. Each function is a pure mapping from
//! resource parameters to a [`crate::request::RequestSpec`]; no retry, no
//! caching, no translation of transport failures.

pub mod dashboard;
pub mod jokes;
pub mod quiz_categories;
pub mod quizzes;
pub mod subscription_plans;
pub mod users;
