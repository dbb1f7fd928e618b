// ============================================================================
// WEB - Implementaciones sobre el navegador (document, fetch, window)
// ============================================================================

use gloo_net::http::Request;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{FormData, HtmlDocument, HtmlFormElement};

use super::{CookieSource, FormHandle, LoginTransport, UserAgent};
use crate::models::{LoginError, LoginRequest, RequestBody, TransportResponse};
use crate::utils::find_cookie;

fn js_error(e: JsValue) -> LoginError {
    LoginError::Browser(format!("{:?}", e))
}

/// Cookies de `document.cookie`
#[derive(Clone, Copy, Default)]
pub struct DocumentCookies;

impl CookieSource for DocumentCookies {
    fn cookie(&self, name: &str) -> Option<String> {
        let document = web_sys::window()?
            .document()?
            .dyn_into::<HtmlDocument>()
            .ok()?;
        let cookies = document.cookie().ok()?;
        find_cookie(&cookies, name)
    }
}

/// Elemento `<form>` de la página
#[derive(Clone)]
pub struct HtmlForm {
    form: HtmlFormElement,
}

impl HtmlForm {
    pub fn new(form: HtmlFormElement) -> Self {
        Self { form }
    }
}

impl FormHandle for HtmlForm {
    fn action(&self) -> String {
        // form.action() devuelve la URL de la página si falta el atributo
        match self.form.get_attribute("action") {
            Some(raw) if !raw.trim().is_empty() => self.form.action(),
            _ => String::new(),
        }
    }

    fn fields(&self) -> Vec<(String, String)> {
        let data = match FormData::new_with_form(&self.form) {
            Ok(data) => data,
            Err(e) => {
                log::error!("❌ No se pudo leer el formulario: {:?}", e);
                return Vec::new();
            }
        };

        let entries = match js_sys::try_iter(data.as_ref()) {
            Ok(Some(entries)) => entries,
            _ => return Vec::new(),
        };

        entries
            .filter_map(Result::ok)
            .filter_map(|entry| {
                let pair = entry.dyn_into::<js_sys::Array>().ok()?;
                let name = pair.get(0).as_string()?;
                // Los inputs de tipo file no son texto
                let value = pair.get(1).as_string()?;
                Some((name, value))
            })
            .collect()
    }
}

/// fetch() vía gloo-net
#[derive(Clone, Copy, Default)]
pub struct FetchTransport;

impl LoginTransport for FetchTransport {
    async fn send(&self, request: &LoginRequest) -> Result<TransportResponse, LoginError> {
        let mut builder = Request::post(&request.url);
        if let Some((header, token)) = &request.csrf {
            builder = builder.header(header, token);
        }
        if let Some(content_type) = request.body.content_type() {
            builder = builder.header("Content-Type", content_type);
        }

        let outgoing = match &request.body {
            RequestBody::Multipart(fields) => {
                let data = FormData::new().map_err(js_error)?;
                for (name, value) in fields {
                    data.append_with_str(name, value).map_err(js_error)?;
                }
                builder.body(data)
            }
            RequestBody::Json(text) => builder.body(text.as_str()),
        }
        .map_err(|e| LoginError::RequestBuild(e.to_string()))?;

        let response = outgoing
            .send()
            .await
            .map_err(|e| LoginError::Network(e.to_string()))?;

        // Solo se lee el cuerpo de un 2xx sin redirección
        let body = if response.ok() && !response.redirected() {
            response
                .text()
                .await
                .map_err(|e| LoginError::Network(e.to_string()))?
        } else {
            String::new()
        };

        Ok(TransportResponse {
            status: response.status(),
            status_text: response.status_text(),
            redirected: response.redirected(),
            url: response.url(),
            body,
        })
    }
}

/// window.location / window.alert / consola
#[derive(Clone, Copy, Default)]
pub struct BrowserAgent;

impl UserAgent for BrowserAgent {
    fn navigate(&self, url: &str) {
        let Some(window) = web_sys::window() else {
            log::warn!("⚠️ Sin window, no se puede navegar a {}", url);
            return;
        };
        if let Err(e) = window.location().set_href(url) {
            log::error!("❌ Error navegando a {}: {:?}", url, e);
        }
    }

    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            window.alert_with_message(message).ok();
        }
    }

    fn console_error(&self, message: &str) {
        web_sys::console::error_1(&JsValue::from_str(message));
    }
}
