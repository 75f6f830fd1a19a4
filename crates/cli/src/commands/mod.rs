//! CLI subcommands

pub mod breakdown;
pub mod list;
pub mod variations;
