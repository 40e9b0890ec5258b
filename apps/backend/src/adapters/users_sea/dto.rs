//! DTOs for users_sea adapter.

use crate::entities::UserRole;

/// DTO for creating a new user. `password_hash` is stored as given.
#[derive(Debug, Clone)]
pub struct UserCreate {
    pub email: String,
    pub password_hash: String,
    pub fullname: String,
    pub role: UserRole,
}

impl UserCreate {
    pub fn new(
        email: impl Into<String>,
        password_hash: impl Into<String>,
        fullname: impl Into<String>,
        role: UserRole,
    ) -> Self {
        Self {
            email: email.into(),
            password_hash: password_hash.into(),
            fullname: fullname.into(),
            role,
        }
    }
}

/// DTO for updating an existing user.
#[derive(Debug, Clone, Default)]
pub struct UserUpdate {
    pub id: i64,
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub fullname: Option<String>,
    pub role: Option<UserRole>,
}

impl UserUpdate {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_password_hash(mut self, password_hash: impl Into<String>) -> Self {
        self.password_hash = Some(password_hash.into());
        self
    }

    pub fn with_fullname(mut self, fullname: impl Into<String>) -> Self {
        self.fullname = Some(fullname.into());
        self
    }

    pub fn with_role(mut self, role: UserRole) -> Self {
        self.role = Some(role);
        self
    }
}
