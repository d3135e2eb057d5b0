// crates/cli/src/lib.rs

pub mod args;
pub mod error;
pub mod presentation;
