use wasm_bindgen::JsValue;

/// Errores al enganchar o enviar el login
#[derive(Debug, Clone, PartialEq)]
pub enum LoginError {
    /// fetch rechazado: offline, DNS, CORS
    Network(String),
    RequestBuild(String),
    MissingForm(String),
    /// Una llamada al DOM lanzó excepción
    Browser(String),
}

impl std::fmt::Display for LoginError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoginError::Network(msg) => write!(f, "Network error: {}", msg),
            LoginError::RequestBuild(msg) => write!(f, "Request build error: {}", msg),
            LoginError::MissingForm(id) => write!(f, "Form not found: #{}", id),
            LoginError::Browser(msg) => write!(f, "Browser error: {}", msg),
        }
    }
}

impl std::error::Error for LoginError {}

impl From<serde_json::Error> for LoginError {
    fn from(e: serde_json::Error) -> Self {
        LoginError::RequestBuild(e.to_string())
    }
}

impl From<LoginError> for JsValue {
    fn from(e: LoginError) -> Self {
        JsValue::from_str(&e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_failing_form() {
        let err = LoginError::MissingForm("login-form".to_string());
        assert_eq!(err.to_string(), "Form not found: #login-form");
    }
}
