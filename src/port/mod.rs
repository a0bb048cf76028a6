//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports define the extension points in the hexagonal architecture.
//! They are traits that adapters implement to integrate with external
//! systems.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │      Application        │
//!     ┌──────────────┤  Domain + Port          │
//!     │              └─────────────────────────┘
//!     ▼
//! ┌───────────┐
//! │ PostgREST │
//! │  Adapter  │
//! └───────────┘
//! ```

pub mod outbound;

pub use outbound::store::ListingStore;
