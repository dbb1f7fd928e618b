use serde::{Deserialize, Serialize};
use std::fmt;

/// Usuario y contraseña leídos del formulario para un envío
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

// La contraseña nunca sale en los logs
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"********")
            .finish()
    }
}

/// Resultado explícito que algunos backends devuelven en lugar de redirigir
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(default)]
    pub redirect: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_hides_password() {
        let credentials = Credentials::new("alice", "secret");
        let printed = format!("{:?}", credentials);
        assert!(printed.contains("alice"));
        assert!(!printed.contains("secret"));
    }

    #[test]
    fn login_response_optional_fields_default_to_none() {
        let response: LoginResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(response.success);
        assert_eq!(response.redirect, None);
        assert_eq!(response.error, None);
    }
}
