//! HTTP-level tests for the registration endpoint over an in-memory store.

use access_service::{
    config::HasherConfig,
    error::{AccessError, Result},
    registration::{register, RegistrationService, RegistrationState},
    user::{NewUser, PasswordHasher, User, UserRepository},
};
use actix_web::{http::StatusCode, test, web, App};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

struct MemoryUserRepository {
    users: Mutex<Vec<User>>,
    fail_create: bool,
}

impl MemoryUserRepository {
    fn new() -> Self {
        Self {
            users: Mutex::new(Vec::new()),
            fail_create: false,
        }
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn create(&self, user: NewUser) -> Result<User> {
        if self.fail_create {
            return Err(AccessError::Database("insert failed".to_string()));
        }
        let now = Utc::now();
        let created = User {
            id: Uuid::new_v4(),
            name: user.name,
            email: user.email,
            password_hash: user.password_hash,
            tier: user.tier,
            created_at: now,
            updated_at: now,
        };
        self.users.lock().unwrap().push(created.clone());
        Ok(created)
    }
}

fn state(repository: Arc<MemoryUserRepository>) -> web::Data<RegistrationState> {
    let hasher = PasswordHasher::new(&HasherConfig::new(1).unwrap()).unwrap();
    web::Data::new(RegistrationState {
        service: Arc::new(RegistrationService::new(repository, Arc::new(hasher))),
    })
}

#[actix_web::test]
async fn test_register_created() {
    let app = test::init_service(
        App::new()
            .app_data(state(Arc::new(MemoryUserRepository::new())))
            .service(register),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/register")
        .set_json(serde_json::json!({
            "name": "Ann",
            "email": "ann@example.com",
            "password": "secret123"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "success");
    assert_eq!(body["code"], 201);
    assert_eq!(body["message"], "User created successfully");
    assert_eq!(body["user"]["email"], "ann@example.com");
    assert_eq!(body["user"]["name"], "Ann");

    let user = body["user"].as_object().unwrap();
    assert!(!user.contains_key("password"));
    assert!(!user.contains_key("password_hash"));
}

#[actix_web::test]
async fn test_register_duplicate_conflict() {
    let app = test::init_service(
        App::new()
            .app_data(state(Arc::new(MemoryUserRepository::new())))
            .service(register),
    )
    .await;

    let payload = serde_json::json!({
        "name": "Ann",
        "email": "ann@example.com",
        "password": "secret123"
    });

    let first = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/auth/register")
            .set_json(&payload)
            .to_request(),
    )
    .await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/auth/register")
            .set_json(&payload)
            .to_request(),
    )
    .await;
    assert_eq!(second.status(), StatusCode::CONFLICT);

    let body: serde_json::Value = test::read_body_json(second).await;
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "User already exists");
}

#[actix_web::test]
async fn test_register_missing_fields() {
    let app = test::init_service(
        App::new()
            .app_data(state(Arc::new(MemoryUserRepository::new())))
            .service(register),
    )
    .await;

    // Empty name; a field absent from the body behaves the same way.
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/register")
        .set_json(serde_json::json!({
            "name": "",
            "email": "a@b.com",
            "password": "x"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Name, email, and password are required");

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/register")
        .set_json(serde_json::json!({
            "email": "a@b.com",
            "password": "x"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_register_malformed_email() {
    let app = test::init_service(
        App::new()
            .app_data(state(Arc::new(MemoryUserRepository::new())))
            .service(register),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/register")
        .set_json(serde_json::json!({
            "name": "A",
            "email": "not-an-email",
            "password": "x"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Invalid email format");
}

#[actix_web::test]
async fn test_register_store_failure_is_opaque() {
    let repo = Arc::new(MemoryUserRepository {
        users: Mutex::new(Vec::new()),
        fail_create: true,
    });
    let app = test::init_service(App::new().app_data(state(repo)).service(register)).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/register")
        .set_json(serde_json::json!({
            "name": "Ann",
            "email": "ann@example.com",
            "password": "secret123"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "Internal server error");
    // The repository's own error text must not leak.
    assert!(!body.to_string().contains("insert failed"));
}

#[actix_web::test]
async fn test_tier_round_trips() {
    let app = test::init_service(
        App::new()
            .app_data(state(Arc::new(MemoryUserRepository::new())))
            .service(register),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/register")
        .set_json(serde_json::json!({
            "name": "Ann",
            "email": "ann@example.com",
            "password": "secret123",
            "tier": "premium"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["user"]["tier"], "premium");
}
