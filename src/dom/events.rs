// ============================================================================
// EVENT HANDLING - Listeners del DOM
// ============================================================================
// closure.forget() mantiene vivo el closure; el navegador limpia el listener
// cuando el elemento se destruye.
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Element, Event};

/// Registrar listener `submit`. Se cancela el envío nativo del navegador
/// antes de llamar a `handler`.
pub fn on_submit<F>(element: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(move |event: Event| {
        event.prevent_default();
        handler(event);
    }) as Box<dyn FnMut(Event)>);
    element.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
