//! Command-line harness support for the `algokit` binary.

pub mod commands;
