use std::collections::HashMap;

use tracing::debug;

use crate::{
    rt, ArgumentSpec, CommandGroup, CommandSpec, ConfigurationError, GlobalOptions,
    ResolutionMiss,
};

/// Turns an ordered list of command groups into a [`Grammar`].
///
/// Compilation is a pure function of the groups: it validates them and
/// borrows them for the lifetime of the grammar, which keeps the registry
/// read-only from then on. A different registry needs a new compiler.
pub struct ParserCompiler<'a, C> {
    groups: &'a [CommandGroup<C>],
    program: String,
    about: String,
}

impl<'a, C> ParserCompiler<'a, C> {
    pub fn new(groups: &'a [CommandGroup<C>]) -> ParserCompiler<'a, C> {
        ParserCompiler { groups, program: "fir".to_string(), about: String::new() }
    }

    /// Program name and one-line description used in help output.
    pub fn program(mut self, name: impl Into<String>, about: impl Into<String>) -> Self {
        self.program = name.into();
        self.about = about.into();
        self
    }

    pub fn compile(&self) -> Result<Grammar<'a, C>, ConfigurationError> {
        for group in self.groups {
            validate_group(group)?;
        }
        self.trace_shadowing();
        Ok(Grammar {
            groups: self.groups,
            program: self.program.clone(),
            about: self.about.clone(),
            global_flags: GlobalOptions::flags(),
            global_optionals: GlobalOptions::optionals(),
        })
    }

    /// Maps command tokens to a command, without validating the registry.
    ///
    /// See [`Grammar::resolve`].
    pub fn resolve(
        &self,
        primary: &str,
        secondary: Option<&str>,
    ) -> Result<&'a CommandSpec<C>, ResolutionMiss> {
        resolve(self.groups, primary, secondary)
    }

    fn trace_shadowing(&self) {
        let mut anonymous: HashMap<&str, &str> = HashMap::new();
        for group in self.groups {
            match group.name() {
                Some(name) => {
                    let tokens =
                        std::iter::once(name).chain(group.aliases().iter().map(String::as_str));
                    for token in tokens {
                        if let Some(command) = anonymous.get(token) {
                            debug!(token, command, group = name, "group shadows command");
                        }
                    }
                }
                None => {
                    for command in group.commands() {
                        for token in command.tokens() {
                            if let Some(prev) = anonymous.insert(token, command.name()) {
                                let command = command.name();
                                debug!(token, prev, command, "command shadows command");
                            }
                        }
                    }
                }
            }
        }
    }
}

/// A validated two-tier command-line grammar.
///
/// The root tier carries the global options and one token that selects either
/// a command of an anonymous group or a named group. Named groups add a second
/// tier selecting the command inside the group.
pub struct Grammar<'a, C> {
    pub(crate) groups: &'a [CommandGroup<C>],
    pub(crate) program: String,
    pub(crate) about: String,
    pub(crate) global_flags: Vec<ArgumentSpec>,
    pub(crate) global_optionals: Vec<ArgumentSpec>,
}

impl<'a, C> Grammar<'a, C> {
    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn groups(&self) -> &'a [CommandGroup<C>] {
        self.groups
    }

    /// Maps the command tokens of an invocation to a command.
    ///
    /// A named group answering to `primary` takes precedence and `secondary`
    /// selects the command inside it. Otherwise `primary` is looked up among
    /// the commands of the anonymous groups. When several groups or commands
    /// answer to the same tokens the one registered last wins.
    pub fn resolve(
        &self,
        primary: &str,
        secondary: Option<&str>,
    ) -> Result<&'a CommandSpec<C>, ResolutionMiss> {
        resolve(self.groups, primary, secondary)
    }

    /// The named group `token` addresses, if any.
    pub fn named_group(&self, token: &str) -> Option<&'a CommandGroup<C>> {
        named_group(self.groups, token)
    }

    pub fn description(&self) -> GrammarDescription {
        let mut commands = Vec::new();
        let mut groups = Vec::new();
        for group in self.groups {
            let described = group.commands().iter().map(CommandDescription::new);
            match group.name() {
                Some(name) => groups.push(GroupDescription {
                    name: name.to_string(),
                    aliases: group.aliases().to_vec(),
                    commands: described.collect(),
                }),
                None => commands.extend(described),
            }
        }
        GrammarDescription {
            program: self.program.clone(),
            global_flags: self.global_flags.clone(),
            global_optionals: self.global_optionals.clone(),
            commands,
            groups,
        }
    }
}

/// A structural, handler-free view of a compiled grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrammarDescription {
    pub program: String,
    pub global_flags: Vec<ArgumentSpec>,
    pub global_optionals: Vec<ArgumentSpec>,
    /// Root-tier commands, from anonymous groups.
    pub commands: Vec<CommandDescription>,
    pub groups: Vec<GroupDescription>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupDescription {
    pub name: String,
    pub aliases: Vec<String>,
    pub commands: Vec<CommandDescription>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandDescription {
    pub name: String,
    pub aliases: Vec<String>,
    pub description: String,
    pub positionals: Vec<ArgumentSpec>,
    pub optionals: Vec<ArgumentSpec>,
    pub flags: Vec<ArgumentSpec>,
}

impl CommandDescription {
    fn new<C>(cmd: &CommandSpec<C>) -> CommandDescription {
        CommandDescription {
            name: cmd.name().to_string(),
            aliases: cmd.aliases().to_vec(),
            description: cmd.description().to_string(),
            positionals: cmd.positionals().to_vec(),
            optionals: cmd.optionals().to_vec(),
            flags: cmd.flags().to_vec(),
        }
    }
}

fn named_group<'a, C>(groups: &'a [CommandGroup<C>], token: &str) -> Option<&'a CommandGroup<C>> {
    groups.iter().rev().find(|it| it.answers_to(token))
}

fn resolve<'a, C>(
    groups: &'a [CommandGroup<C>],
    primary: &str,
    secondary: Option<&str>,
) -> Result<&'a CommandSpec<C>, ResolutionMiss> {
    if let Some(group) = named_group(groups, primary) {
        let found = secondary.and_then(|it| group.find(it));
        debug!(
            group = primary,
            command = ?secondary,
            found = found.is_some(),
            "resolved in named group"
        );
        return found.ok_or_else(|| ResolutionMiss::new(primary, secondary));
    }

    let found = groups
        .iter()
        .rev()
        .filter(|it| it.is_anonymous())
        .find_map(|it| it.find(primary));
    debug!(command = primary, found = found.is_some(), "resolved in anonymous groups");
    found.ok_or_else(|| ResolutionMiss::new(primary, None))
}

fn validate_group<C>(group: &CommandGroup<C>) -> Result<(), ConfigurationError> {
    if let Some(name) = group.name() {
        check_token(group, name)?;
        for alias in group.aliases() {
            check_token(group, alias)?;
        }
    }

    let mut claimed: HashMap<&str, &str> = HashMap::new();
    for cmd in group.commands() {
        if cmd.name().is_empty() {
            return Err(ConfigurationError::EmptyName { group: group.label().to_string() });
        }
        for token in cmd.tokens() {
            check_token(group, token)?;
            if let Some(first) = claimed.insert(token, cmd.name()) {
                return Err(ConfigurationError::DuplicateCommand {
                    group: group.label().to_string(),
                    token: token.to_string(),
                    first: first.to_string(),
                    second: cmd.name().to_string(),
                });
            }
        }
        validate_arguments(cmd)?;
    }
    Ok(())
}

fn check_token<C>(group: &CommandGroup<C>, token: &str) -> Result<(), ConfigurationError> {
    let reason = if token.is_empty() {
        "tokens can't be empty"
    } else if token.starts_with('-') {
        "command names can't begin with `-`"
    } else if token.chars().any(char::is_whitespace) {
        "tokens can't contain whitespace"
    } else {
        return Ok(());
    };
    Err(ConfigurationError::InvalidName {
        group: group.label().to_string(),
        token: token.to_string(),
        reason,
    })
}

fn validate_arguments<C>(cmd: &CommandSpec<C>) -> Result<(), ConfigurationError> {
    let invalid = |arg: &ArgumentSpec, reason: String| ConfigurationError::InvalidArgument {
        command: cmd.name().to_string(),
        name: arg.name().to_string(),
        reason,
    };

    let mut after_variadic = false;
    for arg in cmd.positionals() {
        if !arg.aliases().is_empty() {
            return Err(invalid(arg, "positional arguments take no aliases".to_string()));
        }
        if after_variadic {
            return Err(ConfigurationError::VariadicNotLast {
                command: cmd.name().to_string(),
                name: arg.name().to_string(),
            });
        }
        after_variadic |= arg.is_variadic();
    }

    let mut aliases: Vec<&str> = Vec::new();
    for arg in cmd.optionals().iter().chain(cmd.flags()) {
        if arg.aliases().is_empty() {
            return Err(invalid(arg, "options and flags need at least one alias".to_string()));
        }
        for alias in arg.aliases() {
            if !alias.starts_with('-') || alias.len() < 2 {
                return Err(invalid(arg, format!("alias `{alias}` must begin with `-`")));
            }
            if rt::is_help(alias) {
                return Err(invalid(arg, format!("`{alias}` is generated automatically")));
            }
            if aliases.contains(&alias.as_str()) {
                return Err(ConfigurationError::DuplicateAlias {
                    command: cmd.name().to_string(),
                    alias: alias.clone(),
                });
            }
            aliases.push(alias);
        }
    }
    for arg in cmd.flags() {
        if arg.is_variadic() {
            return Err(invalid(arg, "flags take no values".to_string()));
        }
    }

    let mut names: Vec<&str> = Vec::new();
    for arg in cmd.positionals().iter().chain(cmd.optionals()).chain(cmd.flags()) {
        if arg.name().is_empty() {
            return Err(invalid(arg, "argument names can't be empty".to_string()));
        }
        if names.contains(&arg.name()) {
            return Err(ConfigurationError::DuplicateArgument {
                command: cmd.name().to_string(),
                name: arg.name().to_string(),
            });
        }
        names.push(arg.name());
    }
    Ok(())
}
