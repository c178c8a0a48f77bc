//! Subscription plan endpoints

use crate::request::{Body, RequestSpec};

pub fn get_all() -> RequestSpec {
    RequestSpec::get("/subscription-plan")
}

pub fn get_by_id(id: &str) -> RequestSpec {
    RequestSpec::get(format!("/subscription-plan/{}", id))
}

pub fn create(payload: serde_json::Value) -> RequestSpec {
    RequestSpec::post("/subscription-plan", Body::Json(payload))
}

pub fn update(id: &str, payload: serde_json::Value) -> RequestSpec {
    RequestSpec::put(format!("/subscription-plan/{}", id), Body::Json(payload))
}

pub fn delete(id: &str) -> RequestSpec {
    RequestSpec::delete(format!("/subscription-plan/{}", id))
}
