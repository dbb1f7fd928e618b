pub mod auth;
pub mod error;
pub mod outcome;
pub mod request;

pub use auth::{Credentials, LoginResponse};
pub use error::LoginError;
pub use outcome::{LoginAction, SubmissionOutcome};
pub use request::{LoginRequest, RequestBody, TransportResponse};
