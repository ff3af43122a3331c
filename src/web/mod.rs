pub mod handlers;
pub mod pages;

use crate::domain::ports::Classifier;
use actix_web::error::InternalError;
use actix_web::http::header::ContentType;
use actix_web::{web, HttpResponse};
use std::sync::Arc;

/// Shared handler state, built once before the server accepts
/// requests and read-only afterwards. `model` is `None` when the
/// startup load failed; the process serves anyway.
pub struct AppState {
    pub model: Option<Arc<dyn Classifier>>,
}

impl AppState {
    pub fn new(model: Option<Arc<dyn Classifier>>) -> Self {
        Self { model }
    }
}

/// Form-decode failures (missing field, undecodable body) become
/// plain-text 400s instead of the framework default.
pub fn form_config() -> web::FormConfig {
    web::FormConfig::default().error_handler(|err, _req| {
        let message = format!("Error making prediction: {}", err);
        InternalError::from_response(
            err,
            HttpResponse::BadRequest()
                .content_type(ContentType::plaintext())
                .body(message),
        )
        .into()
    })
}
