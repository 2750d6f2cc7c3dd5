pub mod password;
pub mod repository;

pub use password::PasswordHasher;
pub use repository::{NewUser, PostgresUserRepository, User, UserRepository};
