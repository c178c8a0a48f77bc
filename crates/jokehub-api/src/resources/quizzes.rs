//! Quiz endpoints

use crate::request::{Body, RequestSpec};

pub fn list(page: u32) -> RequestSpec {
    RequestSpec::get(format!("/quiz?page={}", page))
}

pub fn get_by_id(id: &str) -> RequestSpec {
    RequestSpec::get(format!("/quiz/{}", id))
}

pub fn create(payload: serde_json::Value) -> RequestSpec {
    RequestSpec::post("/quiz", Body::Json(payload))
}

pub fn update(id: &str, payload: serde_json::Value) -> RequestSpec {
    RequestSpec::put(format!("/quiz/{}", id), Body::Json(payload))
}

pub fn delete(id: &str) -> RequestSpec {
    RequestSpec::delete(format!("/quiz/{}", id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::Method;

    #[test]
    fn list_is_paged_get() {
        let spec = list(2);
        assert_eq!(spec.method, Method::Get);
        assert_eq!(spec.path, "/quiz?page=2");
    }

    #[test]
    fn crud_paths_target_identifier() {
        assert_eq!(get_by_id("q1").path, "/quiz/q1");
        assert_eq!(update("q1", serde_json::json!({})).path, "/quiz/q1");
        assert_eq!(delete("q1").method, Method::Delete);
    }
}
