//! Adapter implementations for extension registration ports.

pub mod memory;
pub mod sf_cli;

mod messages;

pub use messages::TemplateMessageCatalog;
