//! Domain façades over the management API.
//!
//! DESIGN
//! ======
//! Each module is a catalog of named endpoint bindings for one business
//! domain: method, path, and authentication, nothing else. No validation,
//! no transformation, no retries, no caching — adding a domain means
//! adding a catalog, never touching the client or the token store.


pub mod dental_assets;
pub mod dental_contracts;
pub mod facilities;
pub mod purchasing;
pub mod reports;
pub mod staff;
pub mod suppliers;
pub mod transactions;
pub mod warehouse;
