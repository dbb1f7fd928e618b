// ============================================================================
// ELEMENT HELPERS - Funciones básicas para acceder al DOM
// ============================================================================

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlFormElement, Window};

use crate::models::LoginError;

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    window()?.document()
}

pub fn get_element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// Obtener `<form>` por ID
pub fn get_form_by_id(id: &str) -> Result<HtmlFormElement, LoginError> {
    get_element_by_id(id)
        .ok_or_else(|| LoginError::MissingForm(id.to_string()))?
        .dyn_into::<HtmlFormElement>()
        .map_err(|_| LoginError::Browser(format!("#{} is not a <form>", id)))
}
