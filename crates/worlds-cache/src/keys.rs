//! Key builders for all Redis entries.
//!
//! Centralising key construction prevents typos and makes it easy to find
//! every key the application uses.

use uuid::Uuid;

/// Key holding the world a user is currently in.
pub fn user_current_world(user_id: Uuid) -> String {
    format!("user:{user_id}:world")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_world_key() {
        let id = Uuid::nil();
        assert_eq!(
            user_current_world(id),
            "user:00000000-0000-0000-0000-000000000000:world"
        );
    }
}
