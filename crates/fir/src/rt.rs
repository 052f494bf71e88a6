use std::ffi::OsString;

use crate::{Error, Result};

macro_rules! format_err {
    ($($tt:tt)*) => {
        Error { msg: format!($($tt)*), help: false }
    };
}

macro_rules! bail {
    ($($tt:tt)*) => {
        return Err(format_err!($($tt)*))
    };
}

/// The raw token stream, consumed front to back.
pub(crate) struct Parser {
    after_double_dash: bool,
    negative_numbers_are_flags: bool,
    rargs: Vec<OsString>,
}

impl Parser {
    pub(crate) fn new(mut args: Vec<OsString>) -> Self {
        args.reverse();
        Self { after_double_dash: false, negative_numbers_are_flags: false, rargs: args }
    }

    pub(crate) fn new_from_env() -> Self {
        let args = std::env::args_os().collect::<Vec<_>>();
        let mut res = Parser::new(args);
        let _progn = res.next();
        res
    }

    /// `Ok` for flag-like tokens, `Err` for everything else.
    pub(crate) fn pop_flag(&mut self) -> Option<Result<String, OsString>> {
        if self.after_double_dash {
            self.next().map(Err)
        } else {
            let arg = self.next()?;
            let arg_str = arg.to_str().unwrap_or_default();
            if self.is_flag(arg_str) {
                if arg_str == "--" {
                    self.after_double_dash = true;
                    return self.next().map(Err);
                }
                Some(arg.into_string())
            } else {
                Some(Err(arg))
            }
        }
    }

    /// Whether the next token would come out of `pop_flag` as a flag.
    pub(crate) fn at_flag(&self) -> bool {
        !self.after_double_dash
            && self.rargs.last().and_then(|it| it.to_str()).map_or(false, |it| self.is_flag(it))
    }

    /// Tokens like `-5` or `-.5` are values unless the command has an alias
    /// that looks like a negative number.
    pub(crate) fn negative_numbers_are_flags(&mut self, yes: bool) {
        self.negative_numbers_are_flags = yes;
    }

    fn is_flag(&self, token: &str) -> bool {
        token.starts_with('-') && (self.negative_numbers_are_flags || !is_negative_number(token))
    }

    pub(crate) fn at_end(&self) -> bool {
        self.rargs.is_empty()
    }

    fn next(&mut self) -> Option<OsString> {
        self.rargs.pop()
    }

    pub(crate) fn next_value(&mut self, flag: &str) -> Result<String> {
        if self.at_flag() {
            bail!("expected a value for `{flag}`")
        }
        let value = self.next().ok_or_else(|| format_err!("expected a value for `{flag}`"))?;
        self.value(flag, value)
    }

    pub(crate) fn value(&self, name: &str, value: OsString) -> Result<String> {
        value.into_string().map_err(|it| format_err!("Can't parse `{name}`, invalid utf8: {it:?}"))
    }

    pub(crate) fn unexpected_flag(&self, flag: &str) -> Error {
        format_err!("Unknown flag: `{flag}`. Use `--help` for more information")
    }

    pub(crate) fn unexpected_arg(&self, arg: OsString) -> Error {
        // `to_string_lossy()` seems appropriate here but OsString's debug implementation actually
        // escapes codes that are not valid utf-8, rather than replace them with `FFFD`
        let dbg = format!("{arg:?}");
        let arg = dbg.trim_matches('"');

        format_err!("Unexpected argument: `{arg}`. Use `--help` for more information")
    }

    pub(crate) fn command_required(&self) -> Error {
        format_err!("A command is required. Use `--help` for more information")
    }

    pub(crate) fn subcommand_required(&self, group: &str) -> Error {
        format_err!("A subcommand is required for `{group}`. Use `--help` for more information")
    }

    pub(crate) fn help(&self, help: String) -> Error {
        Error { msg: help, help: true }
    }

    pub(crate) fn duplicate(&self, flag: &str) -> Error {
        format_err!("Flag specified more than once: `{flag}`")
    }

    pub(crate) fn required(&self, name: &str) -> Error {
        format_err!("Argument is required: `{name}`. Use `--help` for more information")
    }
}

pub(crate) fn is_help(flag: &str) -> bool {
    flag == "--help" || flag == "-h"
}

/// `-5`, `-0.5` or `-.5`.
pub(crate) fn is_negative_number(token: &str) -> bool {
    let Some(number) = token.strip_prefix('-') else { return false };
    let digits = |it: &str| it.bytes().all(|b| b.is_ascii_digit());
    match number.split_once('.') {
        Some((int, frac)) => !frac.is_empty() && digits(int) && digits(frac),
        None => !number.is_empty() && digits(number),
    }
}
