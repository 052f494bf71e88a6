use std::fmt;

use crate::{Arguments, HandlerError};

/// How many tokens a parameter consumes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arity {
    /// Exactly one token.
    #[default]
    OneValue,
    /// Every token up to the next flag-like token, at least one.
    OneOrMore,
}

/// One parameter of a command: a positional, an optional or a flag.
///
/// Which of the three it is depends on the list it is attached to. Positional
/// specs carry no aliases, optionals and flags carry at least one.
///
/// Parameter definitions are usually written once and shared between many
/// commands. Use [`ArgumentSpec::with_overrides`] to derive a variant for one
/// command without touching the shared definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentSpec {
    name: String,
    description: String,
    arity: Arity,
    aliases: Vec<String>,
}

impl ArgumentSpec {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> ArgumentSpec {
        ArgumentSpec {
            name: name.into(),
            description: description.into(),
            arity: Arity::OneValue,
            aliases: Vec::new(),
        }
    }

    /// Shorthand for an optional or flag spelled as `aliases`.
    pub fn aliased(
        name: impl Into<String>,
        description: impl Into<String>,
        aliases: &[&str],
    ) -> ArgumentSpec {
        ArgumentSpec {
            aliases: aliases.iter().map(|it| it.to_string()).collect(),
            ..ArgumentSpec::new(name, description)
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn arity(&self) -> Arity {
        self.arity
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    pub fn is_variadic(&self) -> bool {
        self.arity == Arity::OneOrMore
    }

    pub fn answers_to(&self, token: &str) -> bool {
        self.aliases.iter().any(|it| it == token)
    }

    /// Returns a copy with the provided fields replaced; `self` is left as is.
    pub fn with_overrides(&self, overrides: ArgumentOverrides) -> ArgumentSpec {
        let ArgumentOverrides { name, description, aliases, arity } = overrides;
        ArgumentSpec {
            name: name.unwrap_or_else(|| self.name.clone()),
            description: description.unwrap_or_else(|| self.description.clone()),
            arity: arity.unwrap_or(self.arity),
            aliases: aliases.unwrap_or_else(|| self.aliases.clone()),
        }
    }
}

/// Fields to replace in [`ArgumentSpec::with_overrides`]. `None` keeps the
/// original value.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ArgumentOverrides {
    pub name: Option<String>,
    pub description: Option<String>,
    pub aliases: Option<Vec<String>>,
    pub arity: Option<Arity>,
}

impl ArgumentOverrides {
    pub fn new() -> ArgumentOverrides {
        ArgumentOverrides::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> ArgumentOverrides {
        self.name = Some(name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> ArgumentOverrides {
        self.description = Some(description.into());
        self
    }

    pub fn aliases(mut self, aliases: &[&str]) -> ArgumentOverrides {
        self.aliases = Some(aliases.iter().map(|it| it.to_string()).collect());
        self
    }

    pub fn arity(mut self, arity: Arity) -> ArgumentOverrides {
        self.arity = Some(arity);
        self
    }
}

/// The code run for a resolved command.
///
/// `C` is the execution context the host builds once per run (the loaded
/// profile, output settings and so on); the namespace is already parsed.
pub type Handler<C> = fn(&mut C, &Arguments) -> Result<(), HandlerError>;

/// One invocable command.
pub struct CommandSpec<C> {
    pub(crate) name: String,
    pub(crate) description: String,
    pub(crate) aliases: Vec<String>,
    pub(crate) positionals: Vec<ArgumentSpec>,
    pub(crate) optionals: Vec<ArgumentSpec>,
    pub(crate) flags: Vec<ArgumentSpec>,
    pub(crate) handler: Handler<C>,
}

impl<C> CommandSpec<C> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    pub fn positionals(&self) -> &[ArgumentSpec] {
        &self.positionals
    }

    pub fn optionals(&self) -> &[ArgumentSpec] {
        &self.optionals
    }

    pub fn flags(&self) -> &[ArgumentSpec] {
        &self.flags
    }

    pub fn handler(&self) -> Handler<C> {
        self.handler
    }

    /// The canonical name followed by every alias.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.aliases.iter().map(String::as_str))
    }

    pub fn answers_to(&self, token: &str) -> bool {
        self.tokens().any(|it| it == token)
    }

    pub(crate) fn find_optional(&self, alias: &str) -> Option<usize> {
        self.optionals.iter().position(|it| it.answers_to(alias))
    }

    pub(crate) fn find_flag(&self, alias: &str) -> Option<usize> {
        self.flags.iter().position(|it| it.answers_to(alias))
    }
}

impl<C> fmt::Debug for CommandSpec<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandSpec")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("aliases", &self.aliases)
            .field("positionals", &self.positionals)
            .field("optionals", &self.optionals)
            .field("flags", &self.flags)
            .finish_non_exhaustive()
    }
}
