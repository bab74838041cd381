//! Flag-driven mode.

mod context;
mod flags;
mod parse;
pub mod prompts;
pub mod quiet;

pub use context::{Context, Done, copy_to_clipboard};
pub use flags::{CliFlags, CommandMode};
pub use parse::{ParseError, parse};

/// Exit status 2 for bad arguments, 1 when output failed.
pub fn run(args: Vec<String>) {
    let status = match Context::new(args) {
        Err(e) => {
            prompts::error(&e.to_string());
            prompts::error("see --help for usage");
            2
        }
        Ok(mut ctx) => match ctx.run() {
            Err(Done::Failed) => 1,
            _ => 0,
        },
    };
    if status != 0 {
        std::process::exit(status);
    }
}
