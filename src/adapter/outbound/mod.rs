//! Outbound adapters implementing the driven ports.

pub mod postgrest;
