//! Reusable UI components.

pub mod login_form;
pub mod route_guard;
