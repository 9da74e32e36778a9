//! Networking core: transport seam, error taxonomy, wire types, and the
//! API client every façade goes through.

pub mod client;
pub mod error;
pub mod transport;
pub mod types;
