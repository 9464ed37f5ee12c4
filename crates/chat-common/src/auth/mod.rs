//! Authentication utilities

mod credential;

pub use credential::Credential;
