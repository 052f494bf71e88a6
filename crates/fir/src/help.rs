use std::{fmt::Write, ptr};

use crate::{ArgumentSpec, Arity, CommandGroup, CommandSpec, Grammar};

macro_rules! w {
    ($($tt:tt)*) => {
        drop(write!($($tt)*))
    };
}

type Entry = (String, String);

pub(crate) fn root<C>(grammar: &Grammar<'_, C>) -> String {
    let mut buf = String::new();
    w!(buf, "{}\n", grammar.program);
    if !grammar.about.is_empty() {
        write_lines_indented(&mut buf, &grammar.about, 2);
    }

    let options = options(&grammar.global_optionals, &grammar.global_flags);
    section(&mut buf, "OPTIONS", &options);

    // Shadowed tokens are left out, fully shadowed entries are skipped.
    let commands = grammar
        .groups
        .iter()
        .filter(|it| it.is_anonymous())
        .flat_map(|it| it.commands())
        .filter_map(|cmd| {
            let reachable = cmd
                .tokens()
                .filter(|token| grammar.resolve(token, None).map_or(false, |it| ptr::eq(it, cmd)));
            let label = tokens(reachable);
            (!label.is_empty()).then_some((label, cmd.description().to_string()))
        })
        .collect::<Vec<_>>();
    section(&mut buf, "COMMANDS", &commands);

    let groups = grammar
        .groups
        .iter()
        .filter_map(|group| {
            let name = group.name()?;
            let reachable = std::iter::once(name)
                .chain(group.aliases().iter().map(String::as_str))
                .filter(|token| grammar.named_group(token).map_or(false, |it| ptr::eq(it, group)))
                .collect::<Vec<_>>();
            let first = reachable.first()?;
            let doc = format!("See '{} {first} --help'.", grammar.program);
            Some((reachable.join(", "), doc))
        })
        .collect::<Vec<_>>();
    section(&mut buf, "GROUPS", &groups);

    buf
}

pub(crate) fn group<C>(grammar: &Grammar<'_, C>, group: &CommandGroup<C>) -> String {
    let mut buf = String::new();
    w!(buf, "{} {}\n", grammar.program, group_label(group));

    section(&mut buf, "OPTIONS", &options(&[], &[]));
    let commands = group
        .commands()
        .iter()
        .map(|it| (tokens(it.tokens()), it.description().to_string()))
        .collect::<Vec<_>>();
    section(&mut buf, "COMMANDS", &commands);

    buf
}

pub(crate) fn command<C>(grammar: &Grammar<'_, C>, cmd: &CommandSpec<C>) -> String {
    let mut buf = String::new();
    let owner = grammar
        .groups
        .iter()
        .find(|group| group.commands().iter().any(|it| ptr::eq(it, cmd)))
        .and_then(|group| group.name());
    match owner {
        Some(group) => w!(buf, "{} {group} {}\n", grammar.program, cmd.name()),
        None => w!(buf, "{} {}\n", grammar.program, cmd.name()),
    }
    if !cmd.description().is_empty() {
        write_lines_indented(&mut buf, cmd.description(), 2);
    }
    if !cmd.aliases().is_empty() {
        w!(buf, "  Aliases: {}\n", cmd.aliases().join(", "));
    }

    let args = cmd
        .positionals()
        .iter()
        .map(|it| {
            let label = match it.arity() {
                Arity::OneValue => format!("<{}>", it.name()),
                Arity::OneOrMore => format!("<{}>...", it.name()),
            };
            (label, it.description().to_string())
        })
        .collect::<Vec<_>>();
    section(&mut buf, "ARGS", &args);
    section(&mut buf, "OPTIONS", &options(cmd.optionals(), cmd.flags()));

    buf
}

fn options(optionals: &[ArgumentSpec], flags: &[ArgumentSpec]) -> Vec<Entry> {
    let mut res = Vec::new();
    for opt in optionals {
        let value = match opt.arity() {
            Arity::OneValue => format!(" <{}>", opt.name()),
            Arity::OneOrMore => format!(" <{}>...", opt.name()),
        };
        res.push((format!("{}{value}", opt.aliases().join(", ")), opt.description().to_string()));
    }
    for flag in flags {
        res.push((flag.aliases().join(", "), flag.description().to_string()));
    }
    res.push(("-h, --help".to_string(), "Prints help information.".to_string()));
    res
}

fn tokens<'t>(tokens: impl Iterator<Item = &'t str>) -> String {
    tokens.collect::<Vec<_>>().join(", ")
}

fn group_label<C>(group: &CommandGroup<C>) -> String {
    tokens(group.name().into_iter().chain(group.aliases().iter().map(String::as_str)))
}

fn section(buf: &mut String, title: &str, entries: &[Entry]) {
    if entries.is_empty() {
        return;
    }
    blank_line(buf);
    w!(buf, "{title}:\n");

    let mut blank = "";
    for (label, doc) in entries {
        w!(buf, "{blank}");
        blank = "\n";

        w!(buf, "    {label}\n");
        if !doc.is_empty() {
            write_lines_indented(buf, doc, 6);
        }
    }
}

fn write_lines_indented(buf: &mut String, multiline_str: &str, indent: usize) {
    for line in multiline_str.split('\n').map(str::trim_end) {
        if line.is_empty() {
            w!(buf, "\n")
        } else {
            w!(buf, "{blank:indent$}{line}\n", blank = "");
        }
    }
}

fn blank_line(buf: &mut String) {
    w!(buf, "\n");
}
