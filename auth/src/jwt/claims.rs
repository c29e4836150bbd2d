use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Session token claims.
///
/// The self-contained payload of a signed bearer token: who the subject is,
/// which role they hold, and the issuance/expiry window. Never persisted
/// server-side; the signature is the only thing that makes it trustworthy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (account identifier)
    pub sub: String,

    /// Role held by the subject at issuance time
    pub role: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims for a subject with an expiry relative to now.
    ///
    /// # Arguments
    /// * `subject` - Unique account identifier
    /// * `role` - Role string carried in the token
    /// * `ttl_secs` - Seconds until the token expires
    pub fn for_subject(subject: impl ToString, role: impl Into<String>, ttl_secs: u64) -> Self {
        let now = Utc::now().timestamp();

        Self {
            sub: subject.to_string(),
            role: role.into(),
            iat: now,
            exp: now + ttl_secs as i64,
        }
    }

    /// Check if the claims are expired at the given timestamp.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_subject() {
        let claims = Claims::for_subject("user123", "admin", 3600);

        assert_eq!(claims.sub, "user123");
        assert_eq!(claims.role, "admin");
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_is_expired() {
        let claims = Claims {
            sub: "user123".to_string(),
            role: "user".to_string(),
            iat: 0,
            exp: 1000,
        };

        assert!(!claims.is_expired(999));
        assert!(!claims.is_expired(1000)); // exactly at expiration
        assert!(claims.is_expired(1001));
    }
}
