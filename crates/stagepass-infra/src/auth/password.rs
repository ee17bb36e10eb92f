//! Argon2 password hashing implementation.

use argon2::{
    Argon2,
    password_hash::{
        Error as HashError, PasswordHash, PasswordHasher, PasswordVerifier, SaltString,
        rand_core::OsRng,
    },
};

use stagepass_core::ports::{AuthError, PasswordService};

/// Argon2-based password service. Salts are drawn from the OS RNG, so two
/// hashes of the same password never match.
pub struct Argon2PasswordService {
    argon2: Argon2<'static>,
}

impl Argon2PasswordService {
    pub fn new() -> Self {
        Self {
            argon2: Argon2::default(),
        }
    }
}

impl Default for Argon2PasswordService {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordService for Argon2PasswordService {
    fn hash(&self, password: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|h| h.to_string())
            .map_err(|e| AuthError::Internal(e.to_string()))
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError> {
        let parsed_hash =
            PasswordHash::new(hash).map_err(|e| AuthError::Internal(e.to_string()))?;

        // A mismatch is a negative answer; any other failure means the stored
        // hash itself is bad and must not read as "wrong password".
        match self
            .argon2
            .verify_password(password.as_bytes(), &parsed_hash)
        {
            Ok(()) => Ok(true),
            Err(HashError::Password) => Ok(false),
            Err(e) => Err(AuthError::Internal(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify() {
        let service = Argon2PasswordService::new();

        let hash = service.hash("correct horse battery staple").unwrap();

        assert!(service.verify("correct horse battery staple", &hash).unwrap());
        assert!(!service.verify("wrong password", &hash).unwrap());
    }

    #[test]
    fn hashes_are_salted() {
        let service = Argon2PasswordService::new();

        let first = service.hash("pw").unwrap();
        let second = service.hash("pw").unwrap();

        assert_ne!(first, second);
        assert!(service.verify("pw", &first).unwrap());
        assert!(service.verify("pw", &second).unwrap());
    }

    #[test]
    fn unparseable_hash_is_an_internal_error() {
        let service = Argon2PasswordService::new();

        let result = service.verify("pw", "not-a-phc-string");

        assert!(matches!(result, Err(AuthError::Internal(_))));
    }

    #[test]
    fn foreign_algorithm_does_not_read_as_wrong_password() {
        let service = Argon2PasswordService::new();
        let hash = service.hash("pw").unwrap();

        // Same PHC layout, different KDF; verification must fault rather
        // than answer "wrong password".
        let foreign = hash.replacen("argon2id", "scrypt", 1);

        let result = service.verify("pw", &foreign);

        assert!(matches!(result, Err(AuthError::Internal(_))));
    }
}
