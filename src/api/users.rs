use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use utoipa::ToSchema;

use crate::errors::{ClassifiedError, ErrorField};

/// A stored user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub age: i32,
    pub is_active: bool,
}

/// Request body for creating a user
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewUser {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub age: i32,
}

impl NewUser {
    /// Field problems in request order; empty when the body is acceptable
    pub fn check(&self) -> Vec<ErrorField> {
        let mut problems = Vec::new();
        if self.name.trim().is_empty() {
            problems.push(ErrorField::new("name", "name is required"));
        }
        if !self.email.contains('@') {
            problems.push(ErrorField::new("email", "email format is invalid"));
        }
        if self.age <= 0 {
            problems.push(ErrorField::new("age", "age must be positive"));
        }
        problems
    }
}

/// In-memory user store backing the demo endpoints
#[derive(Debug, Default)]
pub struct UserStore {
    users: RwLock<Vec<User>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with a couple of users
    pub fn seeded() -> Self {
        Self {
            users: RwLock::new(vec![
                User {
                    id: 1,
                    name: "John Doe".to_string(),
                    email: "john@example.com".to_string(),
                    age: 30,
                    is_active: true,
                },
                User {
                    id: 2,
                    name: "Jane Smith".to_string(),
                    email: "jane@example.com".to_string(),
                    age: 25,
                    is_active: true,
                },
            ]),
        }
    }

    pub async fn list(&self) -> Vec<User> {
        self.users.read().await.clone()
    }

    pub async fn get(&self, id: u64) -> Result<User, ClassifiedError> {
        self.users
            .read()
            .await
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or_else(|| ClassifiedError::not_found(format!("User not found: {}", id)))
    }

    pub async fn create(&self, new_user: NewUser) -> Result<User, ClassifiedError> {
        let problems = new_user.check();
        if !problems.is_empty() {
            return Err(ClassifiedError::unprocessable("validation failed").with_fields(problems));
        }

        let mut users = self.users.write().await;
        if users.iter().any(|u| u.email.eq_ignore_ascii_case(&new_user.email)) {
            return Err(ClassifiedError::conflict("email is already registered")
                .with_field("email", "email is already registered"));
        }

        let user = User {
            id: users.iter().map(|u| u.id).max().unwrap_or(0) + 1,
            name: new_user.name,
            email: new_user.email,
            age: new_user.age,
            is_active: true,
        };
        users.push(user.clone());
        Ok(user)
    }
}
