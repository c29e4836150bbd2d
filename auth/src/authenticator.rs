use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Authentication coordinator combining password verification and token
/// generation.
///
/// Holds a placeholder hash computed at startup so credential checks perform
/// a real Argon2 comparison even when no account matched the login attempt.
/// Callers therefore take the same time whether an email is registered or
/// not, which keeps account existence unobservable through latency.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    jwt_handler: JwtHandler,
    placeholder_hash: String,
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `jwt_secret` - Secret key for token signing
    ///
    /// # Errors
    /// * `PasswordError` - Computing the placeholder hash failed
    pub fn new(jwt_secret: &[u8]) -> Result<Self, PasswordError> {
        let password_hasher = PasswordHasher::new();
        let placeholder_hash = password_hasher.hash("placeholder-never-matches")?;

        Ok(Self {
            password_hasher,
            jwt_handler: JwtHandler::new(jwt_secret),
            placeholder_hash,
        })
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify a password against an account's stored hash.
    ///
    /// When `stored_hash` is `None` (no such account) the comparison runs
    /// against the placeholder hash and the result is always `false`. Both
    /// outcomes cost one Argon2 verification.
    ///
    /// # Arguments
    /// * `password` - Plaintext password from the login attempt
    /// * `stored_hash` - The account's stored hash, if the account exists
    pub fn verify_credentials(&self, password: &str, stored_hash: Option<&str>) -> bool {
        match stored_hash {
            Some(hash) => self.password_hasher.verify(password, hash),
            None => {
                let _ = self.password_hasher.verify(password, &self.placeholder_hash);
                false
            }
        }
    }

    /// Generate a signed session token for the given claims.
    ///
    /// # Errors
    /// * `JwtError` - Token generation failed
    pub fn generate_token(&self, claims: &Claims) -> Result<String, JwtError> {
        self.jwt_handler.encode(claims)
    }

    /// Validate and decode a session token.
    ///
    /// # Errors
    /// * `JwtError` - Signature invalid, token malformed, or expired
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        self.jwt_handler.decode(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn authenticator() -> Authenticator {
        Authenticator::new(b"test_secret_key_at_least_32_bytes!").expect("Failed to create")
    }

    #[test]
    fn test_verify_credentials_success() {
        let auth = authenticator();

        let hash = auth.hash_password("my_password").expect("Failed to hash");

        assert!(auth.verify_credentials("my_password", Some(&hash)));
        assert!(!auth.verify_credentials("wrong_password", Some(&hash)));
    }

    #[test]
    fn test_verify_credentials_missing_account_is_always_false() {
        let auth = authenticator();

        assert!(!auth.verify_credentials("any_password", None));
        assert!(!auth.verify_credentials("placeholder-never-matches", None));
    }

    #[test]
    fn test_generate_and_validate_token() {
        let auth = authenticator();

        let claims = Claims::for_subject("user123", "admin", 3600);
        let token = auth.generate_token(&claims).expect("Failed to generate");

        let decoded = auth.validate_token(&token).expect("Failed to validate");
        assert_eq!(decoded.sub, "user123");
        assert_eq!(decoded.role, "admin");
    }

    #[test]
    fn test_validate_invalid_token() {
        let auth = authenticator();

        let result = auth.validate_token("invalid.token.here");
        assert!(result.is_err());
    }
}
