pub mod config;
pub mod error;
pub mod registration;
pub mod server;
pub mod user;
pub mod validation;

pub use config::{DatabaseConfig, HasherConfig, ServiceConfig, DEFAULT_HASH_COST};
pub use error::{AccessError, Result};
pub use registration::{
    register, RegisterRequest, RegisteredUser, RegistrationOutcome, RegistrationService,
    RegistrationState,
};
pub use server::start_server;
pub use user::{NewUser, PasswordHasher, PostgresUserRepository, User, UserRepository};
