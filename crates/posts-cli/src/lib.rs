//! CLI library components for the posts preprocessor.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
pub mod types;
