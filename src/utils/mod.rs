// Utils compartidos

pub mod cookies;

pub use cookies::*;
