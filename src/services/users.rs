//! Registration, login and profile management

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use validator::Validate;

use super::input::present;
use crate::{
    config::AuthConfig,
    error::{AppError, AppResult},
    models::{
        enums::UserRole,
        user::{LoginUser, NewUser, ProfileChanges, RegisterUser, UpdateProfile, User, UserClaims},
    },
    repository::Repository,
};

const INVALID_CREDENTIALS: &str = "Invalid email or password";

#[derive(Clone)]
pub struct UsersService {
    repository: Repository,
    config: AuthConfig,
}

impl UsersService {
    pub fn new(repository: Repository, config: AuthConfig) -> Self {
        Self { repository, config }
    }

    /// Register a regular user account and return a session token.
    /// The role is always `user`; admins are provisioned by the seed binary.
    pub async fn register(&self, data: RegisterUser) -> AppResult<(String, User)> {
        let (Some(name), Some(email), Some(password), Some(phone_number)) = (
            present(&data.name),
            present(&data.email),
            data.password.clone().filter(|p| !p.is_empty()),
            present(&data.phone_number),
        ) else {
            return Err(AppError::Validation("All fields are required".to_string()));
        };
        data.validate()?;

        let email = email.to_lowercase();
        if self.repository.users.email_exists(&email).await? {
            return Err(AppError::Conflict("Email already in use".to_string()));
        }

        let user = self
            .repository
            .users
            .create(&NewUser {
                name,
                email,
                password_hash: hash_password(&password)?,
                phone_number,
                role: UserRole::User,
            })
            .await?;

        tracing::info!(user_id = %user.id, "User registered");
        let token = self.issue_token(&user)?;
        Ok((token, user))
    }

    /// Authenticate by email and password and return a session token
    pub async fn login(&self, data: LoginUser) -> AppResult<(String, User)> {
        let (Some(email), Some(password)) = (present(&data.email), data.password.filter(|p| !p.is_empty()))
        else {
            return Err(AppError::Validation("Email and password are required".to_string()));
        };

        let user = self
            .repository
            .users
            .get_by_email(&email.to_lowercase())
            .await?
            .ok_or_else(|| AppError::Authentication(INVALID_CREDENTIALS.to_string()))?;

        if !verify_password(&user, &password)? {
            tracing::warn!(user_id = %user.id, "Failed login attempt");
            return Err(AppError::Authentication(INVALID_CREDENTIALS.to_string()));
        }

        let token = self.issue_token(&user)?;
        Ok((token, user))
    }

    pub async fn get_by_id(&self, id: uuid::Uuid) -> AppResult<User> {
        self.repository.users.get_by_id(id).await
    }

    /// Update own profile and, when both passwords are given, the password.
    /// Returns `None` when the request changes nothing.
    pub async fn update_profile(&self, user_id: uuid::Uuid, data: UpdateProfile) -> AppResult<Option<User>> {
        let user = self.repository.users.get_by_id(user_id).await?;
        let changes = profile_changes(&user, &data)?;

        if changes.is_empty() {
            return Ok(None);
        }

        let user = self.repository.users.update_profile(user_id, &changes).await?;
        Ok(Some(user))
    }

    /// Create or refresh the configured administrator (seed binary)
    pub async fn ensure_admin(&self, name: &str, email: &str, password: &str, phone_number: &str) -> AppResult<User> {
        if password.len() < 8 {
            return Err(AppError::Validation(
                "Admin password must be at least 8 characters".to_string(),
            ));
        }
        self.repository
            .users
            .upsert_admin(&NewUser {
                name: name.to_string(),
                email: email.trim().to_lowercase(),
                password_hash: hash_password(password)?,
                phone_number: phone_number.to_string(),
                role: UserRole::Admin,
            })
            .await
    }

    fn issue_token(&self, user: &User) -> AppResult<String> {
        UserClaims::new(user.id, user.role, self.config.jwt_expiration_hours)
            .create_token(&self.config.jwt_secret)
            .map_err(|e| AppError::Internal(format!("Failed to create token: {}", e)))
    }
}

/// Columns that differ from the stored user; validates a password change
fn profile_changes(user: &User, data: &UpdateProfile) -> AppResult<ProfileChanges> {
    let mut changes = ProfileChanges {
        name: present(&data.name).filter(|n| *n != user.name),
        phone_number: present(&data.phone_number).filter(|p| *p != user.phone_number),
        address: data
            .address
            .as_deref()
            .map(|a| a.trim().to_string())
            .filter(|a| a != user.address.as_deref().unwrap_or_default()),
        password_hash: None,
    };

    match (present(&data.current_password), present(&data.new_password)) {
        (None, None) => {}
        (Some(current), Some(new)) => {
            data.validate()?;
            if !verify_password(user, &current)? {
                return Err(AppError::Authentication("Current password is incorrect.".to_string()));
            }
            if current == new {
                return Err(AppError::Validation(
                    "New password must be different from the current password.".to_string(),
                ));
            }
            changes.password_hash = Some(hash_password(&new)?);
        }
        _ => {
            return Err(AppError::Validation(
                "Both current and new password are required to change password.".to_string(),
            ))
        }
    }

    Ok(changes)
}

/// Verify a password against the stored argon2 hash
fn verify_password(user: &User, password: &str) -> AppResult<bool> {
    let parsed_hash = PasswordHash::new(&user.password)
        .map_err(|_| AppError::Internal("Invalid password hash".to_string()))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

/// Hash a password using Argon2
pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?;
    Ok(hash.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn user_with_password(password: &str) -> User {
        let now = Utc::now();
        User {
            id: uuid::Uuid::new_v4(),
            name: "Jane".into(),
            email: "jane@example.com".into(),
            password: hash_password(password).unwrap(),
            phone_number: "0712345678".into(),
            address: None,
            role: UserRole::User,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_hash_and_verify() {
        let user = user_with_password("correct horse");
        assert!(verify_password(&user, "correct horse").unwrap());
        assert!(!verify_password(&user, "wrong horse").unwrap());
    }

    #[test]
    fn test_profile_changes_skips_unchanged_fields() {
        let user = user_with_password("password123");
        let data = UpdateProfile {
            name: Some("Jane".into()),
            phone_number: Some(" 0799999999 ".into()),
            ..Default::default()
        };
        let changes = profile_changes(&user, &data).unwrap();
        assert_eq!(changes.name, None);
        assert_eq!(changes.phone_number.as_deref(), Some("0799999999"));
        assert!(!changes.is_empty());

        let unchanged = profile_changes(&user, &UpdateProfile::default()).unwrap();
        assert!(unchanged.is_empty());
    }

    #[test]
    fn test_password_change_rules() {
        let user = user_with_password("password123");

        let only_new = UpdateProfile {
            new_password: Some("newpassword".into()),
            ..Default::default()
        };
        assert!(matches!(profile_changes(&user, &only_new), Err(AppError::Validation(_))));

        let wrong_current = UpdateProfile {
            current_password: Some("nope-nope".into()),
            new_password: Some("newpassword".into()),
            ..Default::default()
        };
        assert!(matches!(
            profile_changes(&user, &wrong_current),
            Err(AppError::Authentication(_))
        ));

        let too_short = UpdateProfile {
            current_password: Some("password123".into()),
            new_password: Some("short".into()),
            ..Default::default()
        };
        assert!(matches!(profile_changes(&user, &too_short), Err(AppError::Validation(_))));

        let same = UpdateProfile {
            current_password: Some("password123".into()),
            new_password: Some("password123".into()),
            ..Default::default()
        };
        assert!(matches!(profile_changes(&user, &same), Err(AppError::Validation(_))));

        let ok = UpdateProfile {
            current_password: Some("password123".into()),
            new_password: Some("newpassword".into()),
            ..Default::default()
        };
        assert!(profile_changes(&user, &ok).unwrap().password_hash.is_some());
    }

    #[test]
    fn test_hashes_are_salted() {
        assert_ne!(hash_password("same").unwrap(), hash_password("same").unwrap());
    }
}
