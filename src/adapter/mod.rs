//! Adapters connecting ports to the outside world.
//!
//! - [`outbound`] - driven side: the PostgREST listing store
//! - [`inbound`] - driving side: the command-line front-end

pub mod inbound;
pub mod outbound;
