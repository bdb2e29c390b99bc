//! Command-line tooling for the Proof Cellars content store.

pub mod cli;
pub mod commands;
/// Filesystem and config helpers shared by the commands.
pub mod utils;
