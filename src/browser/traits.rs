use crate::models::{LoginError, LoginRequest, TransportResponse};

/// Acceso de solo lectura a las cookies
pub trait CookieSource {
    fn cookie(&self, name: &str) -> Option<String>;
}

/// Formulario de login que se envía
pub trait FormHandle {
    /// URL del atributo `action`; vacía si no está declarado
    fn action(&self) -> String;

    /// Campos de texto en orden de documento, como los recoge `FormData`
    fn fields(&self) -> Vec<(String, String)>;

    fn field(&self, name: &str) -> Option<String> {
        self.fields()
            .into_iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }
}

/// Envía el POST de login. Una llamada, sin reintentos ni timeout.
#[allow(async_fn_in_trait)]
pub trait LoginTransport {
    async fn send(&self, request: &LoginRequest) -> Result<TransportResponse, LoginError>;
}

/// Efectos sobre la página
pub trait UserAgent {
    /// Navegación de página completa
    fn navigate(&self, url: &str);
    /// Diálogo `alert()` bloqueante
    fn alert(&self, message: &str);
    /// Una entrada en la consola del navegador
    fn console_error(&self, message: &str);
}
