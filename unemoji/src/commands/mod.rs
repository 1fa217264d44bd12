//! Command implementations for the `unemoji` CLI.

pub mod clean;
