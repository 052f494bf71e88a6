use crate::{spec::Handler, ArgumentSpec, CommandSpec};

/// Identifies a command inside the group that registered it.
///
/// Returned by [`CommandGroup::register`]; commands are stored by
/// registration order, so ids are stable for the lifetime of the group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommandId(usize);

/// A named or anonymous collection of commands.
///
/// Commands of an anonymous group are addressed by a single token
/// (`fir new ...`), commands of a named group by two (`fir profile set ...`).
///
/// ```
/// use fir::{Arguments, ArgumentSpec, CommandGroup, HandlerError};
///
/// fn set(_: &mut (), _: &Arguments) -> Result<(), HandlerError> {
///     Ok(())
/// }
///
/// let mut profile = CommandGroup::named("profile");
/// profile
///     .register("set", set, "Switch to another profile.", &[])
///     .with_positional([ArgumentSpec::new("profile_name", "Name of the profile.")]);
/// ```
pub struct CommandGroup<C> {
    name: Option<String>,
    aliases: Vec<String>,
    commands: Vec<CommandSpec<C>>,
}

impl<C> CommandGroup<C> {
    pub fn anonymous() -> CommandGroup<C> {
        CommandGroup { name: None, aliases: Vec::new(), commands: Vec::new() }
    }

    pub fn named(name: impl Into<String>) -> CommandGroup<C> {
        CommandGroup { name: Some(name.into()), ..CommandGroup::anonymous() }
    }

    pub fn with_aliases(mut self, aliases: &[&str]) -> CommandGroup<C> {
        self.aliases.extend(aliases.iter().map(|it| it.to_string()));
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    pub fn is_anonymous(&self) -> bool {
        self.name.is_none()
    }

    /// Whether `token` addresses this group. Always false for anonymous groups.
    pub fn answers_to(&self, token: &str) -> bool {
        match &self.name {
            Some(name) => name == token || self.aliases.iter().any(|it| it == token),
            None => false,
        }
    }

    /// Adds a command and returns a builder for attaching its arguments.
    ///
    /// Every call adds a new command, there is no merging with an earlier
    /// registration of the same handler. Register each command in one
    /// statement: `register(..).with_positional(..).with_optional(..)`.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        handler: Handler<C>,
        description: impl Into<String>,
        aliases: &[&str],
    ) -> CommandBuilder<'_, C> {
        let id = CommandId(self.commands.len());
        self.commands.push(CommandSpec {
            name: name.into(),
            description: description.into(),
            aliases: aliases.iter().map(|it| it.to_string()).collect(),
            positionals: Vec::new(),
            optionals: Vec::new(),
            flags: Vec::new(),
            handler,
        });
        CommandBuilder { spec: &mut self.commands[id.0], id }
    }

    pub fn command(&self, id: CommandId) -> Option<&CommandSpec<C>> {
        self.commands.get(id.0)
    }

    /// Commands in registration order.
    pub fn commands(&self) -> &[CommandSpec<C>] {
        &self.commands
    }

    /// The command answering to `token`; the latest registration wins.
    pub fn find(&self, token: &str) -> Option<&CommandSpec<C>> {
        self.commands.iter().rev().find(|it| it.answers_to(token))
    }

    pub(crate) fn label(&self) -> &str {
        self.name.as_deref().unwrap_or("<anonymous>")
    }
}

/// Attaches arguments to a freshly registered command.
///
/// The three lists are independent, each keeps its own call order.
pub struct CommandBuilder<'g, C> {
    spec: &'g mut CommandSpec<C>,
    id: CommandId,
}

impl<'g, C> CommandBuilder<'g, C> {
    pub fn with_positional(self, specs: impl IntoIterator<Item = ArgumentSpec>) -> Self {
        self.spec.positionals.extend(specs);
        self
    }

    pub fn with_optional(self, specs: impl IntoIterator<Item = ArgumentSpec>) -> Self {
        self.spec.optionals.extend(specs);
        self
    }

    pub fn with_flag(self, specs: impl IntoIterator<Item = ArgumentSpec>) -> Self {
        self.spec.flags.extend(specs);
        self
    }

    pub fn id(&self) -> CommandId {
        self.id
    }
}
