use async_trait::async_trait;

use crate::domain::user::models::IssuedToken;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::UpdateProfileCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;

/// Port for account operations exposed to the inbound layer.
#[async_trait]
pub trait AccountService: Send + Sync + 'static {
    /// Register a new account and issue its first session token.
    ///
    /// # Arguments
    /// * `command` - Validated command containing name, email, and password
    ///
    /// # Returns
    /// Created user entity and issued token
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - An account with this email exists
    /// * `DatabaseError` - Store operation failed
    async fn register(&self, command: RegisterUserCommand)
        -> Result<(User, IssuedToken), UserError>;

    /// Verify credentials and issue a session token.
    ///
    /// Fails with `InvalidCredentials` whether the account does not exist or
    /// the password does not match; callers get no way to tell the cases
    /// apart.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password
    /// * `DatabaseError` - Store operation failed
    async fn login(&self, email: &str, password: &str)
        -> Result<(User, IssuedToken), UserError>;

    /// Retrieve an account by unique identifier.
    ///
    /// # Errors
    /// * `NotFound` - Account does not exist
    /// * `DatabaseError` - Store operation failed
    async fn get_user(&self, id: &UserId) -> Result<User, UserError>;

    /// Update an account's profile fields.
    ///
    /// The role is never touched here; only name and email are updatable.
    ///
    /// # Errors
    /// * `NotFound` - Account does not exist
    /// * `EmailAlreadyExists` - New email is already registered
    /// * `DatabaseError` - Store operation failed
    async fn update_profile(
        &self,
        id: &UserId,
        command: UpdateProfileCommand,
    ) -> Result<User, UserError>;

    /// Replace an account's password after verifying the current one.
    ///
    /// # Errors
    /// * `NotFound` - Account does not exist
    /// * `IncorrectPassword` - Current password does not match
    /// * `DatabaseError` - Store operation failed
    async fn change_password(
        &self,
        id: &UserId,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), UserError>;

    /// Delete an account.
    ///
    /// # Errors
    /// * `NotFound` - Account does not exist
    /// * `DatabaseError` - Store operation failed
    async fn delete_user(&self, id: &UserId) -> Result<(), UserError>;

    /// Retrieve all accounts (admin listing).
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn list_users(&self) -> Result<Vec<User>, UserError>;
}

/// Persistence operations for the user aggregate.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist a new user.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - The store's unique constraint on email was
    ///   violated; a concurrent insert between existence check and insert
    ///   must surface as this error, not a generic fault
    /// * `DatabaseError` - Store operation failed
    async fn insert(&self, user: User) -> Result<User, UserError>;

    /// Retrieve a user by identifier, `None` when absent.
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;

    /// Retrieve a user by email address, `None` when absent.
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;

    /// Retrieve all users.
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn list_all(&self) -> Result<Vec<User>, UserError>;

    /// Update an existing user.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `EmailAlreadyExists` - New email is already registered
    /// * `DatabaseError` - Store operation failed
    async fn update(&self, user: User) -> Result<User, UserError>;

    /// Remove a user.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Store operation failed
    async fn delete(&self, id: &UserId) -> Result<(), UserError>;
}
