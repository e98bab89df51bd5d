//! PromptMaster CLI library: one-shot commands, the interactive client and text rendering.
//!
//! The `promptmaster` binary wires these to clap subcommands; `serve` runs the API in-process.

pub mod commands;
pub mod render;
pub mod repl;

pub use commands::CommandError;
pub use repl::{apply, parse_command, run_client, CopyTarget, ReplCommand, TerminalClipboard};
