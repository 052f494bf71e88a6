use std::ffi::OsString;

use crate::{
    help,
    rt::{self, Parser},
    Arguments, Arity, CommandSpec, GlobalOptions, Grammar, InvocationError, Result, Value,
};

/// A parsed command line, ready to be handed to its handler.
pub struct Invocation<'a, C> {
    pub globals: GlobalOptions,
    pub command: &'a CommandSpec<C>,
    pub arguments: Arguments,
}

impl<'a, C> Grammar<'a, C> {
    pub fn parse(&self, args: Vec<OsString>) -> Result<Invocation<'a, C>, InvocationError> {
        self.parse_(&mut Parser::new(args))
    }

    pub fn parse_env(&self) -> Result<Invocation<'a, C>, InvocationError> {
        self.parse_(&mut Parser::new_from_env())
    }

    fn parse_(&self, p: &mut Parser) -> Result<Invocation<'a, C>, InvocationError> {
        let (globals, primary) = self.parse_globals(p)?;

        let secondary = match self.named_group(&primary) {
            Some(group) => match p.pop_flag() {
                Some(Err(arg)) => Some(p.value("command", arg)?),
                Some(Ok(flag)) if rt::is_help(&flag) => {
                    return Err(p.help(help::group(self, group)).into())
                }
                Some(Ok(flag)) => return Err(p.unexpected_flag(&flag).into()),
                None => return Err(p.subcommand_required(&primary).into()),
            },
            None => None,
        };

        let command = self.resolve(&primary, secondary.as_deref())?;
        tracing::debug!(command = command.name(), "binding arguments");
        let arguments = self.bind(p, command)?;
        Ok(Invocation { globals, command, arguments })
    }

    /// Consumes global options up to and including the command token.
    fn parse_globals(&self, p: &mut Parser) -> Result<(GlobalOptions, String)> {
        let mut args = Arguments::new();
        loop {
            match p.pop_flag() {
                Some(Ok(flag)) => {
                    if rt::is_help(&flag) {
                        return Err(p.help(help::root(self)));
                    }
                    if let Some(spec) = self.global_flags.iter().find(|it| it.answers_to(&flag)) {
                        args.insert(spec.name(), Value::Flag(true));
                    } else if let Some(spec) =
                        self.global_optionals.iter().find(|it| it.answers_to(&flag))
                    {
                        if args.contains(spec.name()) {
                            return Err(p.duplicate(&flag));
                        }
                        let value = p.next_value(&flag)?;
                        args.insert(spec.name(), Value::One(value));
                    } else {
                        return Err(p.unexpected_flag(&flag));
                    }
                }
                Some(Err(arg)) => {
                    let primary = p.value("command", arg)?;
                    return Ok((GlobalOptions::from_arguments(&args), primary));
                }
                None => return Err(p.command_required()),
            }
        }
    }

    /// Binds the remaining tokens to the parameters of `command`.
    fn bind(&self, p: &mut Parser, command: &CommandSpec<C>) -> Result<Arguments> {
        let mut positionals = vec![Vec::new(); command.positionals().len()];
        let mut optionals = vec![None; command.optionals().len()];
        let mut flags = vec![false; command.flags().len()];
        let mut cursor = 0;

        let numeric_alias = command
            .optionals()
            .iter()
            .chain(command.flags())
            .flat_map(|it| it.aliases())
            .any(|it| rt::is_negative_number(it));
        p.negative_numbers_are_flags(numeric_alias);

        while let Some(arg) = p.pop_flag() {
            match arg {
                Ok(flag) => {
                    if rt::is_help(&flag) {
                        return Err(p.help(help::command(self, command)));
                    }
                    // A recognized alias closes a variadic positional.
                    let closes = command.positionals().get(cursor).map_or(false, |it| {
                        it.is_variadic() && !positionals[cursor].is_empty()
                    });
                    if let Some(idx) = command.find_flag(&flag) {
                        flags[idx] = true;
                    } else if let Some(idx) = command.find_optional(&flag) {
                        if optionals[idx].is_some() {
                            return Err(p.duplicate(&flag));
                        }
                        let spec = &command.optionals()[idx];
                        optionals[idx] = Some(take_values(p, &flag, spec.arity())?);
                    } else {
                        return Err(p.unexpected_flag(&flag));
                    }
                    if closes {
                        cursor += 1;
                    }
                }
                Err(arg) => {
                    let spec = match command.positionals().get(cursor) {
                        Some(it) => it,
                        None => return Err(p.unexpected_arg(arg)),
                    };
                    positionals[cursor].push(p.value(spec.name(), arg)?);
                    if spec.arity() == Arity::OneValue {
                        cursor += 1;
                    }
                }
            }
        }

        let mut res = Arguments::new();
        for (spec, values) in command.positionals().iter().zip(positionals) {
            if values.is_empty() {
                return Err(p.required(spec.name()));
            }
            res.insert(spec.name(), to_value(spec.arity(), values));
        }
        for (spec, values) in command.optionals().iter().zip(optionals) {
            if let Some(values) = values {
                res.insert(spec.name(), to_value(spec.arity(), values));
            }
        }
        for (spec, set) in command.flags().iter().zip(flags) {
            res.insert(spec.name(), Value::Flag(set));
        }
        Ok(res)
    }
}

fn take_values(p: &mut Parser, flag: &str, arity: Arity) -> Result<Vec<String>> {
    let mut values = vec![p.next_value(flag)?];
    if arity == Arity::OneOrMore {
        while !p.at_end() && !p.at_flag() {
            values.push(p.next_value(flag)?);
        }
    }
    Ok(values)
}

fn to_value(arity: Arity, mut values: Vec<String>) -> Value {
    match arity {
        Arity::OneValue => Value::One(values.remove(0)),
        Arity::OneOrMore => Value::Many(values),
    }
}
