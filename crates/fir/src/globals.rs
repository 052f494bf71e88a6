use crate::{ArgumentSpec, Arguments};

/// How handlers should render structured output.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    #[default]
    Plain,
    Pretty,
}

/// Process-wide options, given before the command token.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GlobalOptions {
    pub verbose: bool,
    pub pretty: bool,
    pub debug: bool,
    pub silent: bool,
    /// Profile to run against instead of the configured one.
    pub scope: Option<String>,
}

impl GlobalOptions {
    pub(crate) fn flags() -> Vec<ArgumentSpec> {
        vec![
            ArgumentSpec::aliased("verbose", "Prints more information.", &["-v", "--verbose"]),
            ArgumentSpec::aliased(
                "pretty",
                "Pretty-prints structured output.",
                &["-p", "--pretty"],
            ),
            ArgumentSpec::aliased("debug", "Prints debugging information.", &["-d", "--debug"]),
            ArgumentSpec::aliased("silent", "Suppresses regular output.", &["--silent"]),
        ]
    }

    pub(crate) fn optionals() -> Vec<ArgumentSpec> {
        vec![ArgumentSpec::aliased(
            "scope",
            "Profile to run the command against.",
            &["-s", "--scope"],
        )]
    }

    pub(crate) fn from_arguments(args: &Arguments) -> GlobalOptions {
        GlobalOptions {
            verbose: args.flag("verbose"),
            pretty: args.flag("pretty"),
            debug: args.flag("debug"),
            silent: args.flag("silent"),
            scope: args.value("scope").map(str::to_string),
        }
    }

    pub fn output_mode(&self) -> OutputMode {
        if self.pretty {
            OutputMode::Pretty
        } else {
            OutputMode::Plain
        }
    }
}
