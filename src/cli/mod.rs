pub mod commands;

pub use commands::{Cli, Commands, describe_lookup, run};
