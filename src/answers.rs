//! The 8 ball commands: ask, list, add and remove answers.

mod commands;
mod format;
mod handlers;

pub use commands::answer_commands;
