//! Quiz category endpoints

use crate::models::QuizCategoryPayload;
use crate::request::RequestSpec;

pub fn list(page: u32) -> RequestSpec {
    RequestSpec::get(format!("/quiz-categories?page={}", page))
}

pub fn create(payload: &QuizCategoryPayload) -> RequestSpec {
    RequestSpec::post("/quiz-categories", payload.to_body())
}

pub fn update(id: &str, payload: &QuizCategoryPayload) -> RequestSpec {
    RequestSpec::put(format!("/quiz-categories/{}", id), payload.to_body())
}

pub fn delete(id: &str) -> RequestSpec {
    RequestSpec::delete(format!("/quiz-categories/{}", id))
}
