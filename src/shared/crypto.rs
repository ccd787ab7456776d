//! Password hashing and opaque single-use tokens.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};
use sha2::{Digest, Sha256};

/// Length in bytes of generated opaque tokens (hex-encoded to twice that).
pub const TOKEN_BYTES: usize = 32;

/// Argon2id password hasher.
#[derive(Clone)]
pub struct Passwords {
    params: Params,
}

impl Passwords {
    /// Hasher with the argon2 crate's recommended parameters.
    pub fn new() -> Self {
        Self {
            params: Params::DEFAULT,
        }
    }

    /// Hasher with explicit cost parameters (memory in KiB, iterations, lanes).
    pub fn with_params(m_cost: u32, t_cost: u32, p_cost: u32) -> Result<Self, String> {
        Params::new(m_cost, t_cost, p_cost, None)
            .map(|params| Self { params })
            .map_err(|e| format!("Invalid argon2 params: {e}"))
    }

    /// Hash a password using Argon2id
    pub fn hash(&self, password: &str) -> Result<String, String> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone());

        argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| format!("Password hashing failed: {e}"))
    }

    /// Verify a password against its hash. Parameters are read from the hash.
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, String> {
        let parsed = PasswordHash::new(hash).map_err(|e| format!("Invalid password hash: {e}"))?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }
}

impl Default for Passwords {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate a random opaque token, hex-encoded.
pub fn generate_token() -> String {
    let bytes: [u8; TOKEN_BYTES] = rand::random();
    to_hex(&bytes)
}

/// SHA-256 of a token, hex-encoded. Only this form is persisted.
pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}

fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}
