// Capacidades del navegador que usa el login, inyectables para tests

#[cfg(target_arch = "wasm32")]
pub mod web;

pub mod traits;

pub use traits::*;
