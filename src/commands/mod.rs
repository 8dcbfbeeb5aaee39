pub mod completions;
pub mod config;
pub mod rewrite;
pub mod sets;
