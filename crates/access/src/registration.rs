//! User registration: validation, duplicate check, password hashing, and
//! record creation, folded into a single structured outcome per request.

use crate::{
    error::{AccessError, Result},
    user::{NewUser, PasswordHasher, User, UserRepository},
    validation,
};
use actix_web::{http::StatusCode, post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

// ============================================================================
// Request / Response Types
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    /// Plaintext password; hashed before it reaches the store, never echoed
    /// back.
    #[serde(default)]
    pub password: String,
    /// Free-form subscription tier, passed through to the store unvalidated.
    pub tier: Option<String>,
}

/// Public view of a created user. Deliberately has no hash field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub tier: Option<String>,
}

impl From<User> for RegisteredUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            tier: user.tier,
        }
    }
}

/// Terminal result of one registration attempt. Serializes with a `status`
/// tag of `"success"` or `"error"` alongside the HTTP-style code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum RegistrationOutcome {
    Success {
        code: u16,
        message: String,
        user: RegisteredUser,
    },
    Error {
        code: u16,
        message: String,
    },
}

impl RegistrationOutcome {
    pub fn code(&self) -> u16 {
        match self {
            RegistrationOutcome::Success { code, .. } | RegistrationOutcome::Error { code, .. } => {
                *code
            }
        }
    }

    fn error(code: u16, message: &str) -> Self {
        RegistrationOutcome::Error {
            code,
            message: message.to_string(),
        }
    }
}

// ============================================================================
// Registration Service
// ============================================================================

/// Orchestrates a single registration attempt against the user store.
///
/// Holds no per-request state; every call runs the same sequence and each
/// failure is terminal for that request.
pub struct RegistrationService {
    repository: Arc<dyn UserRepository>,
    hasher: Arc<PasswordHasher>,
}

impl RegistrationService {
    pub fn new(repository: Arc<dyn UserRepository>, hasher: Arc<PasswordHasher>) -> Self {
        Self { repository, hasher }
    }

    /// Register a new user.
    ///
    /// Validation failures map to 400, a duplicate email to 409, anything
    /// else (store or hashing failure) is logged and surfaces as a generic
    /// 500 without internal detail.
    pub async fn register(&self, request: RegisterRequest) -> RegistrationOutcome {
        match self.try_register(request).await {
            Ok(user) => {
                tracing::info!(user_id = %user.id, email = %user.email, "user registered");
                RegistrationOutcome::Success {
                    code: 201,
                    message: "User created successfully".to_string(),
                    user: user.into(),
                }
            }
            Err(AccessError::Validation(message)) => RegistrationOutcome::Error {
                code: 400,
                message,
            },
            Err(AccessError::Conflict) => RegistrationOutcome::error(409, "User already exists"),
            Err(err) => {
                tracing::error!(error = %err, "registration failed");
                RegistrationOutcome::error(500, "Internal server error")
            }
        }
    }

    async fn try_register(&self, request: RegisterRequest) -> Result<User> {
        validation::validate_presence(&request.name, &request.email, &request.password)?;
        validation::validate_email(&request.email)?;

        if self
            .repository
            .find_by_email(&request.email)
            .await?
            .is_some()
        {
            return Err(AccessError::Conflict);
        }

        let password_hash = self.hasher.hash_password(&request.password)?;

        self.repository
            .create(NewUser {
                name: request.name,
                email: request.email,
                password_hash,
                tier: request.tier,
            })
            .await
    }
}

// ============================================================================
// HTTP Handler
// ============================================================================

/// Handler state shared across registration requests
pub struct RegistrationState {
    pub service: Arc<RegistrationService>,
}

#[post("/api/v1/auth/register")]
pub async fn register(
    req: web::Json<RegisterRequest>,
    state: web::Data<RegistrationState>,
) -> impl Responder {
    let outcome = state.service.register(req.into_inner()).await;
    let status =
        StatusCode::from_u16(outcome.code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    HttpResponse::build(status).json(outcome)
}
