//! Settings models shared by the client and the CLI.

pub mod config;
