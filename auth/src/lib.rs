//! Authentication infrastructure library
//!
//! Provides the building blocks the account service authenticates with:
//! - Password hashing (Argon2id)
//! - Signed session tokens (JWT, HS256) with duration-string lifetimes
//! - An authentication coordinator with enumeration-resistant verification
//!
//! The service defines its own domain traits and adapts these implementations,
//! keeping credential handling out of the domain layer.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! ```
//!
//! ## Session Tokens
//! ```
//! use auth::{Claims, JwtHandler};
//!
//! let handler = JwtHandler::new(b"secret_key_at_least_32_bytes_long!");
//! let claims = Claims::for_subject("user123", "user", 3600);
//! let token = handler.encode(&claims).unwrap();
//! let decoded = handler.decode(&token).unwrap();
//! assert_eq!(decoded.sub, "user123");
//! ```
//!
//! ## Credential Verification
//! ```
//! use auth::{Authenticator, Claims};
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!").unwrap();
//!
//! // Register: hash the password for storage
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify against the stored hash, then mint a token
//! assert!(auth.verify_credentials("password123", Some(&hash)));
//! let claims = Claims::for_subject("user123", "user", 3600);
//! let token = auth.generate_token(&claims).unwrap();
//!
//! // The comparison still runs when no account matched
//! assert!(!auth.verify_credentials("password123", None));
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::Authenticator;
pub use jwt::parse_ttl;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use jwt::DEFAULT_TTL_SECS;
pub use password::PasswordError;
pub use password::PasswordHasher;
