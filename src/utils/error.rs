use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Model artifact error: {message}")]
    ModelFormat { message: String },

    #[error("Model not loaded. Please check server logs.")]
    ModelNotLoaded,

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Error making prediction: {message}")]
    Prediction { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },
}

pub type Result<T> = std::result::Result<T, ServeError>;

// One place maps error kinds to HTTP statuses; handlers just use `?`.
impl actix_web::ResponseError for ServeError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServeError::ModelNotLoaded => StatusCode::INTERNAL_SERVER_ERROR,
            ServeError::InvalidInput { .. } | ServeError::Prediction { .. } => {
                StatusCode::BAD_REQUEST
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .content_type(ContentType::plaintext())
            .body(self.to_string())
    }
}
