pub mod commands;
pub mod output;
pub mod prompts;

pub use commands::Cli;
pub use output::Output;
pub use prompts::Prompt;
