//! Unit tests for the extension registration context.
