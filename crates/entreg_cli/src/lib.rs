//! Console front end for the entreg registry.
//! Parsing and the read-eval-print loop live here so integration tests can
//! drive full sessions over in-memory buffers.

pub mod command;
pub mod repl;

pub use command::{Command, CommandParseError};
pub use repl::{run, ReplError, ReplResult};
