//! JokeHub admin API client
//!
//! Typed HTTP client for the admin backend: a transport wrapper that
//! attaches the bearer credential and centralizes 401 handling, plus one
//! module per backend resource mapping operations to request specs.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod models;
pub mod request;
pub mod resources;
pub mod session;

pub use client::ApiClient;
pub use config::{load_config, Config};
pub use error::{ApiError, Result};
pub use http::{HttpResponse, HttpTransport, ReqwestTransport};
pub use session::{MemorySession, Session};
