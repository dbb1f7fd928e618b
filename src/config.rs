use serde::{Deserialize, Serialize};

/// Cómo viajan las credenciales en el cuerpo. Un submitter usa solo una.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyEncoding {
    /// `multipart/form-data` con todos los campos de texto del formulario
    Multipart,
    /// `{"username": .., "password": ..}` enviado como `application/json`
    Json,
}

impl BodyEncoding {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "multipart" | "form" | "form-data" => Some(Self::Multipart),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Cómo se interpreta el cuerpo de un 2xx sin redirección.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuccessPolicy {
    /// Busca las subcadenas `error` / `dashboard` en el texto.
    /// Cualquier cuerpo con "error" se trata como credenciales inválidas.
    Content,
    /// Lee `{"success": bool, "redirect": .., "error": ..}` del cuerpo.
    Structured,
}

impl SuccessPolicy {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "content" | "sniff" => Some(Self::Content),
            "structured" | "json" => Some(Self::Structured),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub form_id: String,
    pub csrf_cookie_name: String,
    pub csrf_header_name: String,
    pub dashboard_path: String,
    pub login_path: String,
    pub body_encoding: BodyEncoding,
    pub success_policy: SuccessPolicy,
    pub enable_logging: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            form_id: "login-form".to_string(),
            csrf_cookie_name: "csrftoken".to_string(),
            csrf_header_name: "X-CSRFToken".to_string(),
            dashboard_path: "/dashboard/".to_string(),
            login_path: "/accounts/login/".to_string(),
            body_encoding: BodyEncoding::Multipart,
            success_policy: SuccessPolicy::Content,
            enable_logging: true,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            form_id: option_env!("LOGIN_FORM_ID")
                .map(str::to_string)
                .unwrap_or(defaults.form_id),
            csrf_cookie_name: option_env!("CSRF_COOKIE_NAME")
                .map(str::to_string)
                .unwrap_or(defaults.csrf_cookie_name),
            csrf_header_name: option_env!("CSRF_HEADER_NAME")
                .map(str::to_string)
                .unwrap_or(defaults.csrf_header_name),
            dashboard_path: option_env!("DASHBOARD_PATH")
                .map(str::to_string)
                .unwrap_or(defaults.dashboard_path),
            login_path: option_env!("LOGIN_PATH")
                .map(str::to_string)
                .unwrap_or(defaults.login_path),
            body_encoding: option_env!("LOGIN_BODY_ENCODING")
                .and_then(BodyEncoding::parse)
                .unwrap_or(defaults.body_encoding),
            success_policy: option_env!("LOGIN_SUCCESS_POLICY")
                .and_then(SuccessPolicy::parse)
                .unwrap_or(defaults.success_policy),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true")
                .parse()
                .unwrap_or(true),
        }
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_django_backend() {
        let config = AppConfig::default();
        assert_eq!(config.csrf_cookie_name, "csrftoken");
        assert_eq!(config.csrf_header_name, "X-CSRFToken");
        assert_eq!(config.dashboard_path, "/dashboard/");
        assert_eq!(config.body_encoding, BodyEncoding::Multipart);
        assert_eq!(config.success_policy, SuccessPolicy::Content);
    }

    #[test]
    fn encoding_and_policy_parse_case_insensitively() {
        assert_eq!(BodyEncoding::parse(" JSON "), Some(BodyEncoding::Json));
        assert_eq!(BodyEncoding::parse("form-data"), Some(BodyEncoding::Multipart));
        assert_eq!(BodyEncoding::parse("xml"), None);
        assert_eq!(SuccessPolicy::parse("Structured"), Some(SuccessPolicy::Structured));
        assert_eq!(SuccessPolicy::parse("nope"), None);
    }
}
