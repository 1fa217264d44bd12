// unemoji/src/lib.rs
//! # unemoji CLI Application
//!
//! Terminal front end for `unemoji-core`: argument parsing, logging setup and
//! the per-file console report.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
