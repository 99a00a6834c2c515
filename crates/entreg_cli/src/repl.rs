//! Read-eval-print loop over the entity service.
//!
//! # Responsibility
//! - Drive the blocking prompt/read/dispatch cycle until exit or EOF.
//! - Print the fixed response strings for every command outcome.
//!
//! # Invariants
//! - A prompt line precedes every read, including after malformed input.
//! - Malformed input never terminates the loop; storage and I/O failures do.
//! - Logged events carry keyword/outcome metadata only, never names.

use crate::command::Command;
use entreg_core::{EntityRepository, EntityService, RepoError};
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::{BufRead, Write};

/// Prompt line printed before every read.
pub const PROMPT: &str =
    "Enter command (find-all, find <id>, add <name>, update <id> <name>, delete <id>, exit):";

const NOT_FOUND: &str = "Entity not found.";

pub type ReplResult<T> = Result<T, ReplError>;

/// Loop-terminating failure: console I/O or storage transport.
///
/// Malformed input is not represented here; it is reported inline through
/// `CommandParseError` and the loop continues.
#[derive(Debug)]
pub enum ReplError {
    Io(std::io::Error),
    Repo(RepoError),
}

impl Display for ReplError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "console i/o failed: {err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ReplError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ReplError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<RepoError> for ReplError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Runs the command loop until `exit`, end of input, or a fatal failure.
///
/// Reads one line per iteration from `input`, writes the prompt and every
/// response to `output`, and dispatches parsed commands to `service`.
/// The output is flushed after each prompt and each response so piped
/// sessions interleave correctly.
///
/// # Errors
/// Returns the first I/O or repository failure unchanged; not-found
/// lookups and malformed input are reported inline and never end the loop.
pub fn run<I, O, R>(mut input: I, mut output: O, service: &EntityService<R>) -> ReplResult<()>
where
    I: BufRead,
    O: Write,
    R: EntityRepository,
{
    info!("event=repl_start module=cli status=ok");

    let mut line = String::new();
    loop {
        writeln!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            info!("event=repl_exit module=cli status=ok reason=eof");
            return Ok(());
        }

        match Command::parse(&line) {
            Ok(Command::Exit) => {
                info!("event=repl_exit module=cli status=ok reason=exit_command");
                return Ok(());
            }
            Ok(Command::FindAll) => {
                let entities = service.find_all()?;
                debug!(
                    "event=command module=cli status=ok keyword=find-all count={}",
                    entities.len()
                );
                for entity in &entities {
                    writeln!(output, "{entity}")?;
                }
            }
            Ok(Command::Find(id)) => match service.find_by_id(id)? {
                Some(entity) => {
                    debug!("event=command module=cli status=ok keyword=find outcome=hit id={id}");
                    writeln!(output, "{entity}")?;
                }
                None => {
                    debug!("event=command module=cli status=ok keyword=find outcome=miss id={id}");
                    writeln!(output, "{NOT_FOUND}")?;
                }
            },
            Ok(Command::Add(name)) => {
                let entity = service.add_entity(name)?;
                debug!(
                    "event=command module=cli status=ok keyword=add outcome=created id={}",
                    entity.id.unwrap_or_default()
                );
                writeln!(output, "Added: {entity}")?;
            }
            Ok(Command::Update(id, name)) => match service.update_entity(id, name)? {
                Some(entity) => {
                    debug!(
                        "event=command module=cli status=ok keyword=update outcome=updated id={id}"
                    );
                    writeln!(output, "Updated: {entity}")?;
                }
                None => {
                    debug!(
                        "event=command module=cli status=ok keyword=update outcome=miss id={id}"
                    );
                    writeln!(output, "{NOT_FOUND}")?;
                }
            },
            Ok(Command::Delete(id)) => {
                if service.delete_entity(id)? {
                    debug!(
                        "event=command module=cli status=ok keyword=delete outcome=deleted id={id}"
                    );
                    writeln!(output, "Entity deleted.")?;
                } else {
                    debug!(
                        "event=command module=cli status=ok keyword=delete outcome=miss id={id}"
                    );
                    writeln!(output, "{NOT_FOUND}")?;
                }
            }
            Err(err) => {
                debug!(
                    "event=command module=cli status=rejected reason={}",
                    err.reason()
                );
                writeln!(output, "{err}")?;
            }
        }

        output.flush()?;
    }
}
