//! Session layer: durable credential storage and the login/logout/verify
//! lifecycle built on top of it.

pub mod lifecycle;
pub mod storage;
pub mod token_store;
