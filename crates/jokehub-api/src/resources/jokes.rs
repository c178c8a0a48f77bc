//! Joke catalog endpoints

use crate::models::JokePayload;
use crate::request::RequestSpec;

pub fn list(page: u32, limit: u32) -> RequestSpec {
    RequestSpec::get(format!("/joke?page={}&limit={}", page, limit))
}

pub fn create(payload: &JokePayload) -> RequestSpec {
    RequestSpec::post("/joke", payload.to_body())
}

pub fn update(id: &str, payload: &JokePayload) -> RequestSpec {
    RequestSpec::put(format!("/joke/{}", id), payload.to_body())
}

pub fn delete(id: &str) -> RequestSpec {
    RequestSpec::delete(format!("/joke/{}", id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::{Attachment, Method};

    #[test]
    fn list_builds_paged_get() {
        let spec = list(3, 12);
        assert_eq!(spec.method, Method::Get);
        assert_eq!(spec.path, "/joke?page=3&limit=12");
    }

    #[test]
    fn create_without_image_is_json_post() {
        let payload = JokePayload {
            text: "setup".to_string(),
            joke_answer: "punchline".to_string(),
            ..Default::default()
        };
        let spec = create(&payload);
        assert_eq!(spec.method, Method::Post);
        assert_eq!(spec.path, "/joke");
        assert!(!spec.body.is_multipart());
    }

    #[test]
    fn update_with_image_is_multipart_put() {
        let payload = JokePayload {
            text: "setup".to_string(),
            joke_answer: "punchline".to_string(),
            image: Some(Attachment {
                filename: "img.jpg".to_string(),
                mime: "image/jpeg".to_string(),
                bytes: vec![0xff, 0xd8],
            }),
            ..Default::default()
        };
        let spec = update("j42", &payload);
        assert_eq!(spec.method, Method::Put);
        assert_eq!(spec.path, "/joke/j42");
        assert!(spec.body.is_multipart());
    }

    #[test]
    fn delete_targets_identifier() {
        let spec = delete("abc");
        assert_eq!(spec.method, Method::Delete);
        assert_eq!(spec.path, "/joke/abc");
    }
}
