use crate::config::HasherConfig;
use crate::error::{AccessError, Result};
use argon2::{
    password_hash::{
        rand_core::OsRng, PasswordHash, PasswordHasher as Argon2PasswordHasher, PasswordVerifier,
        SaltString,
    },
    Algorithm, Argon2, ParamsBuilder, Version,
};

/// Password hasher using Argon2id
///
/// Each hash carries a fresh random salt, and the output PHC string embeds
/// the algorithm, parameters, and salt, so verification needs nothing
/// beyond the stored hash itself.
pub struct PasswordHasher {
    argon2: Argon2<'static>,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(&HasherConfig::default()).expect("Failed to build Argon2 parameters")
    }
}

impl PasswordHasher {
    /// Create a password hasher from configuration
    ///
    /// Memory: 19456 KiB (19 MiB), parallelism 1. The iteration count is
    /// the configured cost factor.
    pub fn new(config: &HasherConfig) -> Result<Self> {
        let params = ParamsBuilder::new()
            .m_cost(19456) // 19 MiB
            .t_cost(config.cost)
            .p_cost(1) // 1 thread
            .build()
            .map_err(|e| AccessError::Config(format!("Invalid Argon2 parameters: {}", e)))?;

        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

        Ok(Self { argon2 })
    }

    /// Hash a password using Argon2id with a random per-record salt
    pub fn hash_password(&self, password: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);

        let password_hash = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AccessError::Hash(format!("Password hashing failed: {}", e)))?;

        Ok(password_hash.to_string())
    }

    /// Verify a password against a stored hash
    pub fn verify_password(&self, password: &str, hash: &str) -> Result<bool> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| AccessError::Hash(format!("Invalid password hash: {}", e)))?;

        match self
            .argon2
            .verify_password(password.as_bytes(), &parsed_hash)
        {
            Ok(_) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AccessError::Hash(format!(
                "Password verification failed: {}",
                e
            ))),
        }
    }
}
