//! Helper functions shared by the loader and commands

mod date;

pub use date::*;
