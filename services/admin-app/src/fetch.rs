//! Browser-side request execution
//!
//! Executes the request specs built by the resource modules. In hydrate/CSR
//! mode this goes through the browser fetch API, attaching the bearer
//! credential from the installed session; in SSR mode it returns an empty
//! payload (the client re-fetches after hydration).

use jokehub_api::models::{Envelope, Joke, JokePayload, OverviewSnapshot, Page, Range};
use jokehub_api::{resources, ApiError, HttpResponse, Session};

use crate::session;

/// Page size for the jokes grid
pub const PAGE_LIMIT: u32 = 12;

pub async fn fetch_jokes_page(page: u32) -> Result<(Vec<Joke>, u32), ApiError> {
    let response = execute(&resources::jokes::list(page, PAGE_LIMIT)).await?;
    let envelope: Envelope<Page<Joke>> = serde_json::from_str(&response.body)?;
    Ok((envelope.data.items, envelope.data.pagination.total_pages))
}

pub async fn create_joke(payload: &JokePayload) -> Result<(), ApiError> {
    execute(&resources::jokes::create(payload)).await?;
    Ok(())
}

pub async fn update_joke(id: &str, payload: &JokePayload) -> Result<(), ApiError> {
    execute(&resources::jokes::update(id, payload)).await?;
    Ok(())
}

pub async fn delete_joke(id: &str) -> Result<(), ApiError> {
    execute(&resources::jokes::delete(id)).await?;
    Ok(())
}

pub async fn fetch_overview(range: Range) -> Result<OverviewSnapshot, ApiError> {
    let response = execute(&resources::dashboard::overview(range)).await?;
    let envelope: Envelope<OverviewSnapshot> = serde_json::from_str(&response.body)?;
    Ok(envelope.data)
}

/// Apply the status taxonomy, plus the 401 side effect: an Auth failure
/// terminates the session before the error propagates.
fn settle(response: HttpResponse, session: &dyn Session) -> Result<HttpResponse, ApiError> {
    let result = response.into_result();
    if matches!(result, Err(ApiError::Auth)) {
        session.terminate();
    }
    result
}

#[cfg(all(feature = "hydrate", target_arch = "wasm32"))]
async fn execute(spec: &jokehub_api::request::RequestSpec) -> Result<HttpResponse, ApiError> {
    use jokehub_api::request::{Body, Method, Part};

    let url = format!("{}{}", base_url()?, spec.path);
    let session = session::active();

    let mut builder = match spec.method {
        Method::Get => gloo_net::http::Request::get(&url),
        Method::Post => gloo_net::http::Request::post(&url),
        Method::Put => gloo_net::http::Request::put(&url),
        Method::Patch => gloo_net::http::Request::patch(&url),
        Method::Delete => gloo_net::http::Request::delete(&url),
    };

    if let Some(token) = session.access_token() {
        builder = builder.header("Authorization", &format!("Bearer {}", token));
    }

    let request = match &spec.body {
        Body::Empty => builder.build(),
        Body::Json(value) => builder.json(value),
        Body::Multipart(parts) => builder.body(form_data(parts)?),
    }
    .map_err(|e| ApiError::Network(format!("{}", e)))?;

    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(format!("{}", e)))?;
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Network(format!("{}", e)))?;

    settle(HttpResponse { status, body }, session.as_ref())
}

#[cfg(all(feature = "hydrate", target_arch = "wasm32"))]
fn base_url() -> Result<String, ApiError> {
    // Compile-time override, otherwise the page's own origin.
    if let Some(url) = option_env!("JOKEHUB_BASE_URL") {
        return Ok(url.to_string());
    }
    let window = web_sys::window().ok_or_else(|| ApiError::Config("no window".to_string()))?;
    let origin = window
        .location()
        .origin()
        .map_err(|e| ApiError::Config(format!("{:?}", e)))?;
    Ok(format!("{}/api/v1", origin))
}

#[cfg(all(feature = "hydrate", target_arch = "wasm32"))]
fn form_data(
    parts: &[jokehub_api::request::Part],
) -> Result<web_sys::FormData, ApiError> {
    use jokehub_api::request::Part;

    let form = web_sys::FormData::new()
        .map_err(|e| ApiError::Network(format!("FormData: {:?}", e)))?;
    for part in parts {
        match part {
            Part::Text { name, value } => form
                .append_with_str(name, value)
                .map_err(|e| ApiError::Network(format!("FormData field: {:?}", e)))?,
            Part::File { name, attachment } => {
                let bytes = js_sys::Array::new();
                bytes.push(&js_sys::Uint8Array::from(attachment.bytes.as_slice()).into());
                let blob = web_sys::Blob::new_with_u8_array_sequence(&bytes)
                    .map_err(|e| ApiError::Network(format!("Blob: {:?}", e)))?;
                form.append_with_blob_and_filename(name, &blob, &attachment.filename)
                    .map_err(|e| ApiError::Network(format!("FormData file: {:?}", e)))?;
            }
        }
    }
    Ok(form)
}

#[cfg(not(all(feature = "hydrate", target_arch = "wasm32")))]
async fn execute(_spec: &jokehub_api::request::RequestSpec) -> Result<HttpResponse, ApiError> {
    let stub = HttpResponse {
        status: 200,
        body: r#"{"data": {}}"#.to_string(),
    };
    settle(stub, session::active().as_ref())
}
