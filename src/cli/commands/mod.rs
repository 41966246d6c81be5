//! Subcommand implementations.

/// API key management handlers.
pub mod key;

/// Translation command handler.
pub mod translate;
