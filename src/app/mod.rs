pub mod api;
pub mod cli;
pub mod commands;
pub mod console;
mod context;

pub use context::AppContext;
