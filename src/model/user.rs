use serde::{Deserialize, Serialize};

/// A user returned by the single-value endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
}

impl User {
    /// Create a user record.
    pub fn new(id: i32, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }

    /// One-line description used by the summary endpoint.
    pub fn summary(&self) -> String {
        format!("User: {} ({})", self.name, self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_shape() {
        let user = User::new(1, "John Doe", "john@example.com");
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 1, "name": "John Doe", "email": "john@example.com"})
        );
    }

    #[test]
    fn test_summary() {
        let user = User::new(3, "Jane Smith", "jane@example.com");
        assert_eq!(user.summary(), "User: Jane Smith (jane@example.com)");
    }
}
