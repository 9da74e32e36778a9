//! Page components routed by the application shell.

pub mod admin_login;
pub mod dashboard;
pub mod login;
