pub mod builtin;
pub mod config;
pub mod error;
pub mod event;
pub mod execute;
pub mod expand;
pub mod jobs;
pub mod parse;
pub mod prelude;
pub mod prompt;
pub mod shellenv;
pub mod signal;
pub mod utils;
