use std::sync::Arc;

use crate::models::user::User;
use crate::services::errors::auth_service_errors::AuthServiceError;
use crate::services::errors::user_service_errors::UserServiceError;
use crate::services::user_service::UserService;

pub struct AuthService {
    user_service: Arc<UserService>,
}

impl AuthService {
    pub fn new(user_service: Arc<UserService>) -> Self {
        AuthService { user_service }
    }

    /// Check a username/password pair. Unknown users and wrong passwords are
    /// indistinguishable to the caller.
    pub async fn authenticate_user(
        &self,
        username: &str,
        password: &str,
    ) -> Result<User, AuthServiceError> {
        if username.is_empty() || password.is_empty() {
            return Err(AuthServiceError::InvalidCredentials);
        }

        let user = match self.user_service.get_user_by_username(username).await {
            Ok(user) => user,
            Err(UserServiceError::UserNotFound) => {
                return Err(AuthServiceError::InvalidCredentials)
            }
            Err(err) => return Err(AuthServiceError::UserServiceError(err)),
        };

        let matches = bcrypt::verify(password, &user.password_hash)
            .map_err(|e| AuthServiceError::HashingError(e.to_string()))?;
        if matches {
            Ok(user)
        } else {
            Err(AuthServiceError::InvalidCredentials)
        }
    }
}
