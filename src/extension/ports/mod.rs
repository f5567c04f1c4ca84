//! Port contracts for extension registration.
//!
//! Ports define infrastructure-agnostic interfaces used by the registration
//! services: the remote data gateway and the message catalog.

pub mod gateway;
pub mod messages;

#[cfg(test)]
pub use gateway::MockRemoteDataGateway;
pub use gateway::{GatewayError, GatewayResult, QueryResult, RemoteDataGateway, RemoteRecord};
pub use messages::{MessageError, MessageKey, MessageResolver};
