//! Declarative command registration and routing for the `fir` task tracker.
//!
//! Feature modules register commands into [`CommandGroup`]s, each command
//! with its parameters and a handler. A [`ParserCompiler`] validates the
//! groups and compiles them into a two-tier [`Grammar`]:
//!
//! ```text
//! fir [global options] <command> [args]
//! fir [global options] <group> <command> [args]
//! ```
//!
//! Commands of anonymous groups sit at the first tier, named groups nest
//! their commands one tier deeper. A [`Dispatcher`] parses an invocation,
//! resolves it to a single command and runs its handler against a context.
//!
//! ```
//! use fir::{ArgumentSpec, Arguments, CommandGroup, Dispatcher, HandlerError, Outcome};
//!
//! fn new_task(tasks: &mut Vec<String>, args: &Arguments) -> Result<(), HandlerError> {
//!     tasks.push(args.joined("task_name", " ").unwrap_or_default());
//!     Ok(())
//! }
//!
//! let mut tasks = CommandGroup::anonymous();
//! tasks
//!     .register("new", new_task, "Create a new task.", &["add"])
//!     .with_positional([ArgumentSpec::new("task_name", "Name of task.")]);
//!
//! let groups = [tasks];
//! let dispatcher = Dispatcher::new(&groups)?;
//!
//! let mut store = Vec::new();
//! let outcome = dispatcher.dispatch(&mut store, vec!["add".into(), "Buy milk".into()]);
//! assert_eq!(outcome, Outcome::Completed);
//! assert_eq!(store, ["Buy milk"]);
//! # Ok::<(), fir::ConfigurationError>(())
//! ```

mod args;
mod compile;
mod dispatch;
mod error;
mod globals;
mod group;
mod help;
mod parse;
mod rt;
mod spec;

pub mod config;
pub mod logging;

pub use crate::{
    args::{Arguments, Value},
    compile::{CommandDescription, Grammar, GrammarDescription, GroupDescription, ParserCompiler},
    config::{ConfigError, Settings},
    dispatch::{
        Dispatcher, Outcome, EXIT_FAILURE, EXIT_NOT_FOUND, EXIT_SOFTWARE, EXIT_SUCCESS, EXIT_USAGE,
    },
    error::{ConfigurationError, Error, HandlerError, InvocationError, ResolutionMiss, Result},
    globals::{GlobalOptions, OutputMode},
    group::{CommandBuilder, CommandGroup, CommandId},
    parse::Invocation,
    spec::{ArgumentOverrides, ArgumentSpec, Arity, CommandSpec, Handler},
};
