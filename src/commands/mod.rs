//! CLI subcommands

pub mod add;
pub mod clean;
pub mod generate;
pub mod list;
