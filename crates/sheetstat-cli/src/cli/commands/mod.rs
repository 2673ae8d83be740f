//! CLI command handlers. Each command is in its own file for clarity.

mod completions;
mod fetch;
mod status;

pub use completions::run_completions;
pub use fetch::run_fetch;
pub use status::run_status;
