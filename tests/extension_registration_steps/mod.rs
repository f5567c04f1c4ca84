//! Step definitions for extension registration behaviour tests.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
