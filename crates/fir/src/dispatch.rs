use std::{ffi::OsString, process};

use tracing::{debug, info};

use crate::{
    CommandGroup, ConfigurationError, Error, Grammar, HandlerError, Invocation, InvocationError,
    ParserCompiler, ResolutionMiss,
};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
pub const EXIT_USAGE: i32 = 2;
pub const EXIT_SOFTWARE: i32 = 70;
pub const EXIT_NOT_FOUND: i32 = 127;

/// Parses invocations against a compiled grammar and runs their handlers.
///
/// The dispatcher borrows the registry, so no group can change while it is
/// alive.
pub struct Dispatcher<'a, C> {
    grammar: Grammar<'a, C>,
}

impl<'a, C> Dispatcher<'a, C> {
    pub fn new(groups: &'a [CommandGroup<C>]) -> Result<Dispatcher<'a, C>, ConfigurationError> {
        ParserCompiler::new(groups).compile().map(Dispatcher::from_grammar)
    }

    pub fn from_grammar(grammar: Grammar<'a, C>) -> Dispatcher<'a, C> {
        Dispatcher { grammar }
    }

    pub fn grammar(&self) -> &Grammar<'a, C> {
        &self.grammar
    }

    pub fn parse(&self, args: Vec<OsString>) -> Result<Invocation<'a, C>, InvocationError> {
        self.grammar.parse(args)
    }

    pub fn parse_env(&self) -> Result<Invocation<'a, C>, InvocationError> {
        self.grammar.parse_env()
    }

    /// Parses `args` and, if they name a command, runs it against `ctx`.
    pub fn dispatch(&self, ctx: &mut C, args: Vec<OsString>) -> Outcome {
        match self.parse(args) {
            Ok(invocation) => self.invoke(ctx, invocation),
            Err(err) => err.into(),
        }
    }

    pub fn invoke(&self, ctx: &mut C, invocation: Invocation<'_, C>) -> Outcome {
        let command = invocation.command;
        info!(command = command.name(), "running command");
        match (command.handler())(ctx, &invocation.arguments) {
            Ok(()) => Outcome::Completed,
            Err(err) => {
                debug!(command = command.name(), %err, "handler failed");
                Outcome::Failed(err)
            }
        }
    }
}

/// How a single run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    /// Help text was requested instead of a command.
    Help(String),
    Parse(Error),
    NotFound(ResolutionMiss),
    Failed(HandlerError),
    /// The registry never compiled.
    Misconfigured(ConfigurationError),
}

impl Outcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Completed | Outcome::Help(_) => EXIT_SUCCESS,
            Outcome::Failed(_) => EXIT_FAILURE,
            Outcome::Parse(_) => EXIT_USAGE,
            Outcome::Misconfigured(_) => EXIT_SOFTWARE,
            Outcome::NotFound(_) => EXIT_NOT_FOUND,
        }
    }

    /// Prints help to stdout and any error to stderr.
    pub fn report(&self) {
        match self {
            Outcome::Completed => (),
            Outcome::Help(help) => println!("{help}"),
            Outcome::Parse(err) => eprintln!("{err}"),
            Outcome::NotFound(miss) => eprintln!("{miss}"),
            Outcome::Failed(err) => eprintln!("error: {err}"),
            Outcome::Misconfigured(err) => eprintln!("invalid command registry: {err}"),
        }
    }

    pub fn exit(self) -> ! {
        self.report();
        process::exit(self.exit_code())
    }
}

impl From<Error> for Outcome {
    fn from(err: Error) -> Outcome {
        if err.is_help() {
            Outcome::Help(err.msg)
        } else {
            Outcome::Parse(err)
        }
    }
}

impl From<InvocationError> for Outcome {
    fn from(err: InvocationError) -> Outcome {
        match err {
            InvocationError::Parse(err) => err.into(),
            InvocationError::NotFound(miss) => Outcome::NotFound(miss),
        }
    }
}

impl From<ConfigurationError> for Outcome {
    fn from(err: ConfigurationError) -> Outcome {
        Outcome::Misconfigured(err)
    }
}
