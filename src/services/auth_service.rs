// ============================================================================
// AUTH SERVICE - Envío del formulario de login con token CSRF
// ============================================================================
// Un envío = una petición POST. Sin reintentos, sin timeout, sin cancelación.
// ============================================================================

use crate::browser::{CookieSource, FormHandle, LoginTransport, UserAgent};
use crate::config::{AppConfig, BodyEncoding, SuccessPolicy};
use crate::models::outcome::{
    http_failure_message, INVALID_CREDENTIALS_MESSAGE, NETWORK_ERROR_MESSAGE,
};
use crate::models::{
    Credentials, LoginAction, LoginError, LoginRequest, LoginResponse, RequestBody,
    SubmissionOutcome,
};

/// Envía el formulario de login de forma asíncrona y decide a dónde va la página.
///
/// Todas las capacidades del navegador se inyectan: en tests se usan fakes en
/// memoria, en el navegador `document`/`fetch`/`window` (ver [`crate::browser`]).
pub struct LoginSubmitter<C, T, U> {
    cookies: C,
    transport: T,
    agent: U,
    config: AppConfig,
}

impl<C, T, U> LoginSubmitter<C, T, U>
where
    C: CookieSource,
    T: LoginTransport,
    U: UserAgent,
{
    pub fn new(cookies: C, transport: T, agent: U, config: AppConfig) -> Self {
        Self {
            cookies,
            transport,
            agent,
            config,
        }
    }

    /// Token CSRF de la cookie configurada, si existe
    pub fn read_csrf_token(&self) -> Option<String> {
        let token = self.cookies.cookie(&self.config.csrf_cookie_name);
        if token.is_none() {
            // La petición sale igual; el backend la rechazará
            log::warn!(
                "⚠️ Cookie '{}' no encontrada, enviando login sin token CSRF",
                self.config.csrf_cookie_name
            );
        }
        token
    }

    /// Construir el POST para `form` con la codificación configurada
    pub fn build_request<F: FormHandle>(
        &self,
        form: &F,
        csrf_token: Option<String>,
    ) -> Result<LoginRequest, LoginError> {
        let action = form.action();
        let url = if action.trim().is_empty() {
            self.config.login_path.clone()
        } else {
            action
        };

        let body = match self.config.body_encoding {
            BodyEncoding::Multipart => RequestBody::Multipart(form.fields()),
            BodyEncoding::Json => RequestBody::json(&credentials_from(form))?,
        };

        Ok(LoginRequest {
            url,
            csrf: csrf_token.map(|token| (self.config.csrf_header_name.clone(), token)),
            body,
        })
    }

    /// Enviar una única petición y clasificar la respuesta
    pub async fn submit<F: FormHandle>(&self, form: &F) -> SubmissionOutcome {
        let csrf_token = self.read_csrf_token();
        let request = match self.build_request(form, csrf_token) {
            Ok(request) => request,
            Err(e) => {
                return SubmissionOutcome::NetworkError {
                    message: e.to_string(),
                }
            }
        };

        log::info!(
            "🔐 Enviando login a {} ({:?})",
            request.url,
            self.config.body_encoding
        );

        match self.transport.send(&request).await {
            Ok(response) => {
                log::info!("📨 Respuesta de login: HTTP {}", response.status);
                SubmissionOutcome::from(response)
            }
            Err(e) => SubmissionOutcome::NetworkError {
                message: e.to_string(),
            },
        }
    }

    /// Traducir el resultado a navegación o alerta
    pub fn resolve(&self, outcome: &SubmissionOutcome) -> LoginAction {
        match outcome {
            SubmissionOutcome::Redirected { location } => LoginAction::Navigate(location.clone()),
            SubmissionOutcome::Success { body } => match self.config.success_policy {
                SuccessPolicy::Content => self.sniff_body(body),
                SuccessPolicy::Structured => self.read_structured_body(body),
            },
            SubmissionOutcome::HttpError {
                status,
                status_text,
            } => LoginAction::Alert(http_failure_message(*status, status_text)),
            SubmissionOutcome::NetworkError { .. } => {
                LoginAction::Alert(NETWORK_ERROR_MESSAGE.to_string())
            }
        }
    }

    pub fn apply(&self, action: &LoginAction) {
        match action {
            LoginAction::Navigate(url) => {
                log::info!("✅ Login correcto, navegando a {}", url);
                self.agent.navigate(url);
            }
            LoginAction::Alert(message) => {
                // El fallo de red ya dejó su única entrada en consola
                if message != NETWORK_ERROR_MESSAGE {
                    log::warn!("❌ {}", message);
                }
                self.agent.alert(message);
            }
        }
    }

    /// Enviar, resolver y actuar. El formulario sigue disponible para reintentar.
    pub async fn handle<F: FormHandle>(&self, form: &F) -> LoginAction {
        let outcome = self.submit(form).await;
        if let SubmissionOutcome::NetworkError { message } = &outcome {
            self.agent.console_error(&format!("Login error: {}", message));
        }
        let action = self.resolve(&outcome);
        self.apply(&action);
        action
    }

    // Búsqueda de subcadenas en el cuerpo. Cualquier página que contenga "error"
    // se trata como credenciales inválidas, aunque el login haya ido bien.
    // Con "dashboard" o sin ninguna marca se navega al dashboard.
    fn sniff_body(&self, body: &str) -> LoginAction {
        if body.contains("error") {
            LoginAction::Alert(INVALID_CREDENTIALS_MESSAGE.to_string())
        } else {
            LoginAction::Navigate(self.config.dashboard_path.clone())
        }
    }

    fn read_structured_body(&self, body: &str) -> LoginAction {
        match serde_json::from_str::<LoginResponse>(body) {
            Ok(LoginResponse {
                success: true,
                redirect,
                ..
            }) => LoginAction::Navigate(
                redirect
                    .filter(|target| !target.trim().is_empty())
                    .unwrap_or_else(|| self.config.dashboard_path.clone()),
            ),
            Ok(LoginResponse { error, .. }) => LoginAction::Alert(
                error
                    .map(|e| format!("Login failed: {}", e))
                    .unwrap_or_else(|| INVALID_CREDENTIALS_MESSAGE.to_string()),
            ),
            // 2xx sin cuerpo legible: manda el código de estado
            Err(_) => LoginAction::Navigate(self.config.dashboard_path.clone()),
        }
    }
}

fn credentials_from<F: FormHandle>(form: &F) -> Credentials {
    Credentials::new(
        form.field("username").unwrap_or_default(),
        form.field("password").unwrap_or_default(),
    )
}
