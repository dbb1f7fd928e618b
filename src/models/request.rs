use serde::Serialize;

use super::Credentials;

/// Cuerpo de la petición en la codificación configurada
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// Campos de texto del formulario, en orden de documento
    Multipart(Vec<(String, String)>),
    /// JSON serializado, enviado con `Content-Type: application/json`
    Json(String),
}

impl RequestBody {
    pub fn json(credentials: &Credentials) -> Result<Self, serde_json::Error> {
        #[derive(Serialize)]
        struct JsonLogin<'a> {
            username: &'a str,
            password: &'a str,
        }

        serde_json::to_string(&JsonLogin {
            username: &credentials.username,
            password: &credentials.password,
        })
        .map(Self::Json)
    }

    pub fn content_type(&self) -> Option<&'static str> {
        match self {
            // El navegador pone el boundary del multipart
            Self::Multipart(_) => None,
            Self::Json(_) => Some("application/json"),
        }
    }
}

/// Todo lo necesario para el POST de login
#[derive(Debug, Clone, PartialEq)]
pub struct LoginRequest {
    pub url: String,
    /// `(cabecera, token)`; `None` si falta la cookie CSRF
    pub csrf: Option<(String, String)>,
    pub body: RequestBody,
}

impl LoginRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        match &self.csrf {
            Some((header, value)) if header.eq_ignore_ascii_case(name) => Some(value),
            _ => None,
        }
    }
}

/// Respuesta del transporte cuando resuelve el fetch
#[derive(Debug, Clone, PartialEq)]
pub struct TransportResponse {
    pub status: u16,
    pub status_text: String,
    /// true si el navegador siguió una redirección
    pub redirected: bool,
    /// URL final tras las redirecciones
    pub url: String,
    pub body: String,
}

impl TransportResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_body_carries_both_fields_and_content_type() {
        let body = RequestBody::json(&Credentials::new("alice", "secret")).unwrap();
        assert_eq!(body.content_type(), Some("application/json"));
        match body {
            RequestBody::Json(text) => {
                let value: serde_json::Value = serde_json::from_str(&text).unwrap();
                assert_eq!(value["username"], "alice");
                assert_eq!(value["password"], "secret");
            }
            other => panic!("expected JSON body, got {:?}", other),
        }
    }

    #[test]
    fn multipart_leaves_content_type_to_the_browser() {
        let body = RequestBody::Multipart(vec![("username".into(), "alice".into())]);
        assert_eq!(body.content_type(), None);
    }

    #[test]
    fn header_lookup_ignores_case() {
        let request = LoginRequest {
            url: "/login/".into(),
            csrf: Some(("X-CSRFToken".into(), "abc123".into())),
            body: RequestBody::Multipart(Vec::new()),
        };
        assert_eq!(request.header("x-csrftoken"), Some("abc123"));
        assert_eq!(request.header("Authorization"), None);
    }

    #[test]
    fn only_2xx_is_ok() {
        let mut response = TransportResponse {
            status: 204,
            status_text: String::new(),
            redirected: false,
            url: "/login/".into(),
            body: String::new(),
        };
        assert!(response.ok());
        response.status = 302;
        assert!(!response.ok());
        response.status = 403;
        assert!(!response.ok());
    }
}
