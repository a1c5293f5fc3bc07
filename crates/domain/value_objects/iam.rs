use anyhow::{Result, anyhow};
use argon2::{
    Argon2,
    password_hash::{PasswordHasher, SaltString},
};
use rand::rngs::OsRng;

pub const MIN_PASSWORD_LENGTH: usize = 8;

pub fn hash_password(raw_password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = Argon2::default()
        .hash_password(raw_password.as_bytes(), &salt)
        .map_err(|err| anyhow!("failed to hash password: {err}"))?;

    Ok(hash.to_string())
}
