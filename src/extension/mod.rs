//! Extension point registration for Commerce orgs.
//!
//! Registers an Apex class as the implementation behind a named extension
//! point by creating a `RegisteredExternalService` record in the remote org.
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
