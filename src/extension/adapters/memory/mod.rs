//! In-memory adapters for extension registration.

mod org;

pub use org::{GatewayCall, InMemoryOrg};
