use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_register_request_requires_all_fields() {
        let ok = json!({"username": "alice", "email": "a@example.com", "password": "pw"});
        assert!(serde_json::from_value::<RegisterRequest>(ok).is_ok());

        let missing = json!({"username": "alice", "password": "pw"});
        let err = serde_json::from_value::<RegisterRequest>(missing).unwrap_err();
        assert!(err.to_string().contains("missing field `email`"));
    }

    #[test]
    fn test_login_request_ignores_extra_fields() {
        let body = json!({"username": "alice", "password": "pw", "email": "a@example.com"});
        let request: LoginRequest = serde_json::from_value(body).unwrap();
        assert_eq!(request.username, "alice");
        assert_eq!(request.password, "pw");
    }
}
