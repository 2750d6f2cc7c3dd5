use actix_web::{HttpResponse, ResponseError};

pub type Result<T> = std::result::Result<T, AccessError>;

#[derive(Debug, thiserror::Error)]
pub enum AccessError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("User already exists")]
    Conflict,

    #[error("Database error: {0}")]
    Database(String),

    #[error("Password hashing error: {0}")]
    Hash(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<sqlx::Error> for AccessError {
    fn from(err: sqlx::Error) -> Self {
        AccessError::Database(err.to_string())
    }
}

impl ResponseError for AccessError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AccessError::Validation(msg) => HttpResponse::BadRequest().json(serde_json::json!({
                "error": "validation_error",
                "error_description": msg
            })),
            AccessError::Conflict => HttpResponse::Conflict().json(serde_json::json!({
                "error": "user_exists",
                "error_description": "User already exists"
            })),
            AccessError::Database(_) | AccessError::Hash(_) | AccessError::Config(_) => {
                HttpResponse::InternalServerError().json(serde_json::json!({
                    "error": "internal_error",
                    "error_description": "Internal server error"
                }))
            }
        }
    }
}
