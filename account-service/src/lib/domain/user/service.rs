use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;
use auth::Claims;
use chrono::Utc;

use crate::domain::user::models::IssuedToken;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::Role;
use crate::domain::user::models::UpdateProfileCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::ports::AccountService;
use crate::user::ports::UserRepository;

/// Domain service implementation for account operations.
///
/// Orchestrates registration and login: validates state, delegates hashing
/// and token issuance, and keeps failure results uniform. Concrete
/// implementation of AccountService with dependency injection.
pub struct UserService<R>
where
    R: UserRepository,
{
    repository: Arc<R>,
    authenticator: Arc<Authenticator>,
    token_ttl_secs: u64,
}

impl<R> UserService<R>
where
    R: UserRepository,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `authenticator` - Credential verification and token signing
    /// * `token_ttl_secs` - Lifetime of issued session tokens
    pub fn new(repository: Arc<R>, authenticator: Arc<Authenticator>, token_ttl_secs: u64) -> Self {
        Self {
            repository,
            authenticator,
            token_ttl_secs,
        }
    }

    /// Hash a password off the async runtime.
    ///
    /// Argon2 is CPU-bound; running it inline would stall the worker thread
    /// for every concurrent request on it.
    async fn hash_password(&self, password: String) -> Result<String, UserError> {
        let authenticator = Arc::clone(&self.authenticator);

        tokio::task::spawn_blocking(move || authenticator.hash_password(&password))
            .await
            .map_err(|e| UserError::Unknown(format!("Hashing task failed: {e}")))?
            .map_err(UserError::from)
    }

    /// Verify a password off the async runtime.
    ///
    /// `stored_hash` is `None` when no account matched; the comparison still
    /// runs (against a placeholder) so latency does not reveal existence.
    async fn verify_password(
        &self,
        password: String,
        stored_hash: Option<String>,
    ) -> Result<bool, UserError> {
        let authenticator = Arc::clone(&self.authenticator);

        tokio::task::spawn_blocking(move || {
            authenticator.verify_credentials(&password, stored_hash.as_deref())
        })
        .await
        .map_err(|e| UserError::Unknown(format!("Verification task failed: {e}")))
    }

    fn issue_token(&self, user: &User) -> Result<IssuedToken, UserError> {
        let claims = Claims::for_subject(user.id, user.role.as_str(), self.token_ttl_secs);

        let token = self
            .authenticator
            .generate_token(&claims)
            .map_err(|e| UserError::Unknown(format!("Token generation failed: {e}")))?;

        Ok(IssuedToken {
            token,
            expires_in: self.token_ttl_secs,
        })
    }
}

#[async_trait]
impl<R> AccountService for UserService<R>
where
    R: UserRepository,
{
    async fn register(
        &self,
        command: RegisterUserCommand,
    ) -> Result<(User, IssuedToken), UserError> {
        if self
            .repository
            .find_by_email(command.email.as_str())
            .await?
            .is_some()
        {
            return Err(UserError::EmailAlreadyExists);
        }

        let password_hash = self.hash_password(command.password).await?;

        let now = Utc::now();
        let user = User {
            id: UserId::new(),
            name: command.name,
            email: command.email,
            password_hash,
            role: Role::default(),
            created_at: now,
            updated_at: now,
        };

        // The existence check and the insert are not transactional; the
        // store's unique index on email settles concurrent duplicates and
        // the repository surfaces the violation as EmailAlreadyExists.
        let user = self.repository.insert(user).await?;

        let token = self.issue_token(&user)?;

        tracing::info!(user_id = %user.id, "Account registered");

        Ok((user, token))
    }

    async fn login(
        &self,
        email: &str,
        password: &str,
    ) -> Result<(User, IssuedToken), UserError> {
        let user = self.repository.find_by_email(email).await?;

        // Verify unconditionally; an absent account costs the same Argon2
        // comparison as a present one.
        let stored_hash = user.as_ref().map(|u| u.password_hash.clone());
        let is_valid = self.verify_password(password.to_string(), stored_hash).await?;

        match user {
            Some(user) if is_valid => {
                let token = self.issue_token(&user)?;
                tracing::info!(user_id = %user.id, "Login succeeded");
                Ok((user, token))
            }
            _ => Err(UserError::InvalidCredentials),
        }
    }

    async fn get_user(&self, id: &UserId) -> Result<User, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound)
    }

    async fn update_profile(
        &self,
        id: &UserId,
        command: UpdateProfileCommand,
    ) -> Result<User, UserError> {
        let mut user = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound)?;

        if let Some(new_name) = command.name {
            user.name = new_name;
        }

        if let Some(new_email) = command.email {
            user.email = new_email;
        }

        user.updated_at = Utc::now();

        self.repository.update(user).await
    }

    async fn change_password(
        &self,
        id: &UserId,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), UserError> {
        let mut user = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound)?;

        let is_valid = self
            .verify_password(
                current_password.to_string(),
                Some(user.password_hash.clone()),
            )
            .await?;

        if !is_valid {
            return Err(UserError::IncorrectPassword);
        }

        user.password_hash = self.hash_password(new_password.to_string()).await?;
        user.updated_at = Utc::now();

        self.repository.update(user).await?;

        tracing::info!(user_id = %id, "Password changed");

        Ok(())
    }

    async fn delete_user(&self, id: &UserId) -> Result<(), UserError> {
        self.repository.delete(id).await?;

        tracing::info!(user_id = %id, "Account deleted");

        Ok(())
    }

    async fn list_users(&self) -> Result<Vec<User>, UserError> {
        self.repository.list_all().await
    }
}
