//! Command-Line Interface
//!
//! One module per subcommand. Commands own the orchestration the core
//! stays free of: loading config, constructing clients, and deciding
//! what to do with collaborator failures.

pub mod commands;
