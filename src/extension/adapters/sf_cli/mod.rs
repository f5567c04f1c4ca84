//! Gateway adapter driving the Salesforce `sf` CLI.
//!
//! Queries run through `sf data query --json` and creates through
//! `sf data create record --json`; the CLI's JSON envelope is decoded into
//! the gateway port's typed results.

mod config;
mod envelope;
mod gateway;

pub use config::{API_VERSION_ENV, PROGRAM_ENV, SfCliConfig};
pub use envelope::{decode_create_output, decode_query_output, values_argument};
pub use gateway::SfCliGateway;
