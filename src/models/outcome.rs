// ============================================================================
// SUBMISSION OUTCOME - Resultado transitorio de un envío
// ============================================================================

use super::TransportResponse;

pub const INVALID_CREDENTIALS_MESSAGE: &str = "Login failed: Invalid credentials";
pub const NETWORK_ERROR_MESSAGE: &str = "Login failed: Network error";

/// Resultado de una petición de login; solo decide la siguiente acción
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    Redirected { location: String },
    Success { body: String },
    HttpError { status: u16, status_text: String },
    NetworkError { message: String },
}

impl From<TransportResponse> for SubmissionOutcome {
    fn from(response: TransportResponse) -> Self {
        if !response.ok() {
            return Self::HttpError {
                status: response.status,
                status_text: response.status_text,
            };
        }
        if response.redirected {
            Self::Redirected {
                location: response.url,
            }
        } else {
            Self::Success {
                body: response.body,
            }
        }
    }
}

/// Lo que hace la página una vez conocido el resultado
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginAction {
    Navigate(String),
    Alert(String),
}

/// Texto de alerta para una respuesta no 2xx
pub fn http_failure_message(status: u16, status_text: &str) -> String {
    // HTTP/2 no envía reason phrase
    if status_text.trim().is_empty() {
        format!("Login failed: {}", status)
    } else {
        format!("Login failed: {}", status_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, redirected: bool, url: &str, body: &str) -> TransportResponse {
        TransportResponse {
            status,
            status_text: "Forbidden".to_string(),
            redirected,
            url: url.to_string(),
            body: body.to_string(),
        }
    }

    #[test]
    fn redirected_response_keeps_final_url() {
        let outcome = SubmissionOutcome::from(response(200, true, "/dashboard/?welcome=1", ""));
        assert_eq!(
            outcome,
            SubmissionOutcome::Redirected {
                location: "/dashboard/?welcome=1".to_string()
            }
        );
    }

    #[test]
    fn non_2xx_wins_over_redirect_flag() {
        let outcome = SubmissionOutcome::from(response(403, true, "/accounts/login/", ""));
        assert_eq!(
            outcome,
            SubmissionOutcome::HttpError {
                status: 403,
                status_text: "Forbidden".to_string()
            }
        );
    }

    #[test]
    fn plain_2xx_carries_body() {
        let outcome = SubmissionOutcome::from(response(200, false, "/login/", "<html>hi</html>"));
        assert_eq!(
            outcome,
            SubmissionOutcome::Success {
                body: "<html>hi</html>".to_string()
            }
        );
    }

    #[test]
    fn failure_message_falls_back_to_status_code() {
        assert_eq!(http_failure_message(403, "Forbidden"), "Login failed: Forbidden");
        assert_eq!(http_failure_message(500, ""), "Login failed: 500");
    }
}
