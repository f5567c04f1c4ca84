//! Commerce extension registration.
//!
//! This crate registers Apex classes as implementations of Commerce
//! extension points in a remote org, validating the extension point name,
//! resolving the class, creating the `RegisteredExternalService` record, and
//! returning a projection of what was created.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure values and records with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for the remote store and messages
//! - **Adapters**: Concrete implementations of ports (in-memory org, `sf` CLI)
//!
//! # Modules
//!
//! - [`extension`]: Extension point registration

pub mod extension;
