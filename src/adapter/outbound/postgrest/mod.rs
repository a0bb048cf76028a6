//! PostgREST listing store.
//!
//! Talks to the REST surface of a hosted backend-as-a-service
//! (`{url}/rest/v1/{table}`), authenticating with the project's public
//! anon key.

pub mod client;
pub mod dto;
pub mod request;
pub mod settings;

pub use client::PostgrestClient;
pub use settings::PostgrestConfig;
