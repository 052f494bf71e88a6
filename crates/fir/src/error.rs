use std::process;

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A malformed invocation, or a request for help.
///
/// Help is reported through the error path so that parsing stops at the
/// point where `--help` was seen; [`Error::is_help`] tells the two apart.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{msg}")]
pub struct Error {
    pub(crate) msg: String,
    pub(crate) help: bool,
}

impl Error {
    pub fn is_help(&self) -> bool {
        self.help
    }

    /// Prints help to stdout and exits with 0, otherwise prints the error
    /// to stderr and exits with 2.
    pub fn exit(self) -> ! {
        if self.help {
            println!("{self}");
            process::exit(0)
        }
        eprintln!("{self}");
        process::exit(2)
    }
}

/// The registry describes something the grammar can't express.
///
/// Raised by [`ParserCompiler::compile`](crate::ParserCompiler::compile)
/// before any user input is looked at.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("command name can't be empty (group `{group}`)")]
    EmptyName { group: String },

    #[error("invalid token `{token}` in group `{group}`: {reason}")]
    InvalidName { group: String, token: String, reason: &'static str },

    #[error("`{token}` is claimed by both `{first}` and `{second}` in group `{group}`")]
    DuplicateCommand { group: String, token: String, first: String, second: String },

    #[error("command `{command}` binds `{name}` more than once")]
    DuplicateArgument { command: String, name: String },

    #[error("command `{command}` uses alias `{alias}` more than once")]
    DuplicateAlias { command: String, alias: String },

    #[error("invalid argument `{name}` of command `{command}`: {reason}")]
    InvalidArgument { command: String, name: String, reason: String },

    #[error("positional `{name}` of command `{command}` follows a variadic positional")]
    VariadicNotLast { command: String, name: String },
}

/// Tokens that parsed fine but name nothing registered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown command: `{}`. Use `--help` for more information", joined(.primary, .secondary))]
pub struct ResolutionMiss {
    pub primary: String,
    pub secondary: Option<String>,
}

impl ResolutionMiss {
    pub(crate) fn new(primary: &str, secondary: Option<&str>) -> ResolutionMiss {
        ResolutionMiss {
            primary: primary.to_string(),
            secondary: secondary.map(str::to_string),
        }
    }
}

fn joined(primary: &str, secondary: &Option<String>) -> String {
    match secondary {
        Some(secondary) => format!("{primary} {secondary}"),
        None => primary.to_string(),
    }
}

/// A business-level failure reported by a handler, e.g. "Task not found".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct HandlerError {
    message: String,
}

impl HandlerError {
    pub fn new(message: impl Into<String>) -> HandlerError {
        HandlerError { message: message.into() }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<String> for HandlerError {
    fn from(message: String) -> HandlerError {
        HandlerError { message }
    }
}

impl From<&str> for HandlerError {
    fn from(message: &str) -> HandlerError {
        HandlerError::new(message)
    }
}

/// Everything that can stop a token list from becoming an invocation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvocationError {
    #[error(transparent)]
    Parse(#[from] Error),
    #[error(transparent)]
    NotFound(#[from] ResolutionMiss),
}
