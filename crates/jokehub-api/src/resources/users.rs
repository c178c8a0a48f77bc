//! User profile endpoints

use crate::request::{Body, RequestSpec};

pub fn profile(id: &str) -> RequestSpec {
    RequestSpec::get(format!("/user/{}", id))
}

pub fn update_profile(payload: serde_json::Value) -> RequestSpec {
    RequestSpec::put("/user/profile", Body::Json(payload))
}
