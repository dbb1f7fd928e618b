// ============================================================================
// LOGIN SUBMITTER - Envío asíncrono del formulario de login (RUST + WASM)
// ============================================================================
// - browser:  capacidades del navegador (cookies, form, fetch, window)
// - services: LoginSubmitter, la lógica del envío
// - models:   petición, respuesta y resultado
// - dom:      enganche del listener `submit`
// ============================================================================

pub mod browser;
pub mod config;
pub mod models;
pub mod services;
pub mod utils;

#[cfg(target_arch = "wasm32")]
pub mod dom;

pub use config::{AppConfig, BodyEncoding, SuccessPolicy, CONFIG};
pub use models::{LoginAction, LoginError, SubmissionOutcome};
pub use services::LoginSubmitter;

#[cfg(target_arch = "wasm32")]
mod entry {
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;

    use crate::browser::web::{BrowserAgent, DocumentCookies, FetchTransport, HtmlForm};
    use crate::config::CONFIG;
    use crate::dom;
    use crate::models::LoginError;
    use crate::services::LoginSubmitter;

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();

        if CONFIG.is_logging_enabled() {
            wasm_logger::init(wasm_logger::Config::default());
        }
        log::info!("🚀 Login submitter cargado");

        match attach(&CONFIG.form_id) {
            Ok(()) => Ok(()),
            // Páginas sin formulario: solo se carga el módulo
            Err(LoginError::MissingForm(id)) => {
                log::warn!("⚠️ Formulario #{} no encontrado en la página", id);
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Enganchar el login a un formulario añadido después de cargar el módulo
    #[wasm_bindgen]
    pub fn attach_login_form(form_id: &str) -> Result<(), JsValue> {
        attach(form_id).map_err(JsValue::from)
    }

    fn attach(form_id: &str) -> Result<(), LoginError> {
        let form = dom::get_form_by_id(form_id)?;
        let submitter = Rc::new(LoginSubmitter::new(
            DocumentCookies,
            FetchTransport,
            BrowserAgent,
            (*CONFIG).clone(),
        ));
        let handle = HtmlForm::new(form.clone());

        dom::on_submit(&form, move |_event| {
            let submitter = submitter.clone();
            let handle = handle.clone();
            wasm_bindgen_futures::spawn_local(async move {
                submitter.handle(&handle).await;
            });
        })
        .map_err(|e| LoginError::Browser(format!("{:?}", e)))?;

        log::info!("🔐 Login enganchado a #{}", form_id);
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use entry::attach_login_form;
