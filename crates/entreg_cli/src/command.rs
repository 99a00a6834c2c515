//! Console command grammar and tokenizer.
//!
//! # Responsibility
//! - Turn one input line into a typed `Command`.
//! - Own the exact usage/error strings printed for malformed input.
//!
//! # Invariants
//! - Keywords match exactly and case-insensitively; no prefix matching.
//! - Arity is checked before the id token is parsed.
//! - Name arguments keep interior whitespace verbatim.

use entreg_core::EntityId;
use std::error::Error;
use std::fmt::{Display, Formatter};

const FIND_USAGE: &str = "find <id>";
const ADD_USAGE: &str = "add <name>";
const UPDATE_USAGE: &str = "update <id> <name>";
const DELETE_USAGE: &str = "delete <id>";

/// One fully parsed console command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Terminates the read loop.
    Exit,
    /// Prints every persisted entity.
    FindAll,
    /// Prints one entity by id.
    Find(EntityId),
    /// Creates an entity with the given name.
    Add(String),
    /// Renames the entity with the given id.
    Update(EntityId, String),
    /// Deletes the entity with the given id.
    Delete(EntityId),
}

/// Parse failure for one input line.
///
/// `Display` renders the exact console string, so the loop prints parse
/// failures without extra mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandParseError {
    /// Recognized keyword with the wrong argument shape.
    Usage { usage: &'static str },
    /// The `<id>` token is not a valid integer.
    InvalidId { token: String },
    /// No recognized keyword.
    Unknown,
}

impl Display for CommandParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Usage { usage } => write!(f, "Invalid command. Usage: {usage}"),
            Self::InvalidId { token } => write!(f, "Invalid id: '{token}'."),
            Self::Unknown => write!(f, "Unknown command."),
        }
    }
}

impl Error for CommandParseError {}

impl CommandParseError {
    /// Stable reason label for logging; never carries user input.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::Usage { .. } => "usage",
            Self::InvalidId { .. } => "invalid_id",
            Self::Unknown => "unknown",
        }
    }
}

impl Command {
    /// Parses one input line into a command.
    ///
    /// The line is trimmed, the first whitespace-delimited token is the
    /// keyword, and the remainder carries the arguments. `exit` and
    /// `find-all` accept no arguments; trailing tokens after them make
    /// the line an unknown command.
    ///
    /// # Errors
    /// - `Usage` when a recognized keyword has the wrong argument shape.
    /// - `InvalidId` when the `<id>` token is not a valid integer.
    /// - `Unknown` when no keyword matches (including the empty line).
    pub fn parse(line: &str) -> Result<Self, CommandParseError> {
        let trimmed = line.trim();
        let (keyword, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim_start()),
            None => (trimmed, ""),
        };

        match keyword.to_ascii_lowercase().as_str() {
            "exit" if rest.is_empty() => Ok(Self::Exit),
            "find-all" if rest.is_empty() => Ok(Self::FindAll),
            "find" => parse_sole_id(rest, FIND_USAGE).map(Self::Find),
            "add" => parse_add(rest),
            "update" => parse_update(rest),
            "delete" => parse_sole_id(rest, DELETE_USAGE).map(Self::Delete),
            _ => Err(CommandParseError::Unknown),
        }
    }
}

fn parse_sole_id(rest: &str, usage: &'static str) -> Result<EntityId, CommandParseError> {
    let mut tokens = rest.split_whitespace();
    match (tokens.next(), tokens.next()) {
        (Some(token), None) => parse_id(token),
        _ => Err(CommandParseError::Usage { usage }),
    }
}

fn parse_add(rest: &str) -> Result<Command, CommandParseError> {
    if rest.is_empty() {
        return Err(CommandParseError::Usage { usage: ADD_USAGE });
    }

    Ok(Command::Add(rest.to_string()))
}

fn parse_update(rest: &str) -> Result<Command, CommandParseError> {
    let (id_token, name) = match rest.split_once(char::is_whitespace) {
        Some((id_token, name)) => (id_token, name.trim_start()),
        None => {
            return Err(CommandParseError::Usage {
                usage: UPDATE_USAGE,
            })
        }
    };

    if name.is_empty() {
        return Err(CommandParseError::Usage {
            usage: UPDATE_USAGE,
        });
    }

    Ok(Command::Update(parse_id(id_token)?, name.to_string()))
}

fn parse_id(token: &str) -> Result<EntityId, CommandParseError> {
    token
        .parse::<EntityId>()
        .map_err(|_| CommandParseError::InvalidId {
            token: token.to_string(),
        })
}
