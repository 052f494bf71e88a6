mod config;
mod registry;

use std::{ffi::OsString, fmt::Write, ptr};

use expect_test::{expect, Expect};
use fir::{
    ArgumentSpec, CommandGroup, Dispatcher, GlobalOptions, Invocation, Outcome, ParserCompiler,
    ResolutionMiss,
};

use crate::registry::{noop, Log};

fn args(args: &str) -> Vec<OsString> {
    args.split_ascii_whitespace().map(OsString::from).collect()
}

fn render(invocation: &Invocation<'_, Log>) -> String {
    let mut buf = String::new();
    if invocation.globals != GlobalOptions::default() {
        writeln!(buf, "{:?}", invocation.globals).unwrap();
    }
    writeln!(buf, "{}", invocation.command.name()).unwrap();
    for (name, value) in invocation.arguments.iter() {
        writeln!(buf, "{name} = {value}").unwrap();
    }
    buf
}

fn check(argv: &str, expect: Expect) {
    let groups = registry::groups();
    let grammar = ParserCompiler::new(&groups).compile().unwrap();
    match grammar.parse(args(argv)) {
        Ok(invocation) => expect.assert_eq(&render(&invocation)),
        Err(err) => expect.assert_eq(&err.to_string()),
    }
}

#[test]
fn variadic_positional() {
    check(
        "add Buy milk",
        expect![[r#"
            new
            task_name = ["Buy", "milk"]
        "#]],
    );
    check(
        "add Buy milk --status todo --due friday",
        expect![[r#"
            new
            due = "friday"
            status = "todo"
            task_name = ["Buy", "milk"]
        "#]],
    );
    check(
        "add Buy --status todo milk",
        expect!["Unexpected argument: `milk`. Use `--help` for more information"],
    );
    check("add", expect!["Argument is required: `task_name`. Use `--help` for more information"]);
    check(
        "add -- -x --force",
        expect![[r#"
            new
            task_name = ["-x", "--force"]
        "#]],
    );
}

#[test]
fn named_group() {
    check(
        "profile set work",
        expect![[r#"
            set
            profile_name = "work"
        "#]],
    );
    check(
        "p c home -d chores",
        expect![[r#"
            create
            description = "chores"
            profile_name = "home"
        "#]],
    );
    check(
        "profile set",
        expect!["Argument is required: `profile_name`. Use `--help` for more information"],
    );
    check(
        "profile set a b",
        expect!["Unexpected argument: `b`. Use `--help` for more information"],
    );
    check(
        "profile",
        expect!["A subcommand is required for `profile`. Use `--help` for more information"],
    );
    check("profile --force", expect!["Unknown flag: `--force`. Use `--help` for more information"]);
}

#[test]
fn unknown_commands() {
    check("bogus", expect!["Unknown command: `bogus`. Use `--help` for more information"]);
    check(
        "profile bogus",
        expect!["Unknown command: `profile bogus`. Use `--help` for more information"],
    );
    check("", expect!["A command is required. Use `--help` for more information"]);
}

#[test]
fn flags_anywhere_after_the_command() {
    check(
        "mod 7",
        expect![[r#"
            modify
            force = false
            task_id = "7"
        "#]],
    );
    check(
        "mod 7 --force -s done",
        expect![[r#"
            modify
            force = true
            status = "done"
            task_id = "7"
        "#]],
    );
    check(
        "mod --force 7 -s done",
        expect![[r#"
            modify
            force = true
            status = "done"
            task_id = "7"
        "#]],
    );
}

#[test]
fn optionals() {
    check(
        "mod 7 -t a b --force",
        expect![[r#"
            modify
            force = true
            tags = ["a", "b"]
            task_id = "7"
        "#]],
    );
    check("mod 7 -t", expect!["expected a value for `-t`"]);
    check("mod 7 -s a -s b", expect!["Flag specified more than once: `-s`"]);
    check("mod 7 --bogus", expect!["Unknown flag: `--bogus`. Use `--help` for more information"]);
    check(
        "mod -t a b -- 7",
        expect![[r#"
            modify
            force = false
            tags = ["a", "b"]
            task_id = "7"
        "#]],
    );
}

#[test]
fn negative_numbers_are_values() {
    check(
        "set priority 0001 -5",
        expect![[r#"
            priority
            priority = "-5"
            task_id = "0001"
        "#]],
    );
    check(
        "status new x --order -1",
        expect![[r#"
            new
            order = "-1"
            status = "x"
        "#]],
    );
    check(
        "status new --order -.5 -2",
        expect![[r#"
            new
            order = "-.5"
            status = "-2"
        "#]],
    );
    check("set priority 0001 -x", expect!["Unknown flag: `-x`. Use `--help` for more information"]);

    let mut tasks = CommandGroup::<Log>::anonymous();
    tasks
        .register("head", noop, "", &[])
        .with_optional([ArgumentSpec::aliased("count", "", &["-n"])])
        .with_flag([ArgumentSpec::aliased("one", "", &["-1"])]);
    let groups = [tasks];
    let grammar = ParserCompiler::new(&groups).compile().unwrap();
    let invocation = grammar.parse(args("head -1")).unwrap();
    expect![[r#"
        head
        one = true
    "#]]
    .assert_eq(&render(&invocation));
    let Err(err) = grammar.parse(args("head -n -5")) else { panic!("`-5` is a flag of `head`") };
    assert_eq!(err.to_string(), "expected a value for `-n`");
}

#[test]
fn alias_closes_variadic_positional() {
    check(
        "tag 7 urgent home --rm",
        expect![[r#"
            tag
            remove = true
            tags = ["urgent", "home"]
            task_id = "7"
        "#]],
    );
    check(
        "tag 7 --rm urgent",
        expect![[r#"
            tag
            remove = true
            tags = ["urgent"]
            task_id = "7"
        "#]],
    );
}

#[test]
fn global_options() {
    check(
        "-v --scope work ls",
        expect![[r#"
            GlobalOptions { verbose: true, pretty: false, debug: false, silent: false, scope: Some("work") }
            list
        "#]],
    );
    check(
        "--silent -d ls -s todo",
        expect![[r#"
            GlobalOptions { verbose: false, pretty: false, debug: true, silent: true, scope: None }
            list
            status = "todo"
        "#]],
    );
    check("ls -v", expect!["Unknown flag: `-v`. Use `--help` for more information"]);
    check("-s a -s b ls", expect!["Flag specified more than once: `-s`"]);
    check("--scope", expect!["expected a value for `--scope`"]);
    check(
        "-p list",
        expect![[r#"
            GlobalOptions { verbose: false, pretty: true, debug: false, silent: false, scope: None }
            list
        "#]],
    );
    check(
        "--pretty ls",
        expect![[r#"
            GlobalOptions { verbose: false, pretty: true, debug: false, silent: false, scope: None }
            list
        "#]],
    );
}

#[test]
fn root_help() {
    check(
        "--help",
        expect![[r#"
            fir

            OPTIONS:
                -s, --scope <scope>
                  Profile to run the command against.

                -v, --verbose
                  Prints more information.

                -p, --pretty
                  Pretty-prints structured output.

                -d, --debug
                  Prints debugging information.

                --silent
                  Suppresses regular output.

                -h, --help
                  Prints help information.

            COMMANDS:
                new, add
                  Create a new task.

                list, ls
                  List tasks.

                modify, mod
                  Modify a task.

                tag
                  Tag a task.

            GROUPS:
                profile, p
                  See 'fir profile --help'.

                set
                  See 'fir set --help'.

                status
                  See 'fir status --help'.
        "#]],
    );
}

#[test]
fn root_help_skips_shadowed_tokens() {
    let mut long = CommandGroup::<Log>::anonymous();
    long.register("status", noop, "Long form.", &["st"]);
    long.register("profile", noop, "Profile shortcut.", &[]);
    let mut short = CommandGroup::anonymous();
    short.register("status", noop, "Short form.", &[]);
    let mut profile = CommandGroup::named("profile").with_aliases(&["p"]);
    profile.register("set", noop, "", &[]);
    let mut shadow = CommandGroup::named("profile");
    shadow.register("list", noop, "", &[]);
    let groups = [long, short, profile, shadow];

    let grammar = ParserCompiler::new(&groups).compile().unwrap();
    let Err(help) = grammar.parse(args("--help")) else { panic!("no help") };
    let help = help.to_string();
    let commands = &help[help.find("COMMANDS:").unwrap()..];
    expect![[r#"
        COMMANDS:
            st
              Long form.

            status
              Short form.

        GROUPS:
            p
              See 'fir p --help'.

            profile
              See 'fir profile --help'.
    "#]]
    .assert_eq(commands);
}

#[test]
fn group_help() {
    check(
        "profile --help",
        expect![[r#"
            fir profile, p

            OPTIONS:
                -h, --help
                  Prints help information.

            COMMANDS:
                create, c
                  Create a profile.

                set
                  Switch to another profile.
        "#]],
    );
}

#[test]
fn command_help() {
    check(
        "new --help",
        expect![[r#"
            fir new
              Create a new task.
              Aliases: add

            ARGS:
                <task_name>...
                  Name of task.

            OPTIONS:
                -s, --status <status>
                  Status of the task.

                --due <due>
                  Due date of the task.

                -h, --help
                  Prints help information.
        "#]],
    );
    check(
        "mod 7 -h",
        expect![[r#"
            fir modify
              Modify a task.
              Aliases: mod

            ARGS:
                <task_id>
                  Task id value.

            OPTIONS:
                -s, --status <status>
                  Status of the task.

                -t, --tag <tags>...
                  Tags of the task.

                --force
                  Skip confirmation.

                -h, --help
                  Prints help information.
        "#]],
    );
    check(
        "p set -h",
        expect![[r#"
            fir profile set
              Switch to another profile.

            ARGS:
                <profile_name>
                  Name of the profile.

            OPTIONS:
                -h, --help
                  Prints help information.
        "#]],
    );
}

#[test]
fn every_token_resolves_to_its_command() {
    let groups = registry::groups();
    let grammar = ParserCompiler::new(&groups).compile().unwrap();
    for group in &groups {
        for command in group.commands() {
            for token in command.tokens() {
                let found = match group.name() {
                    Some(name) => grammar.resolve(name, Some(token)),
                    None => grammar.resolve(token, None),
                };
                assert!(ptr::eq(found.unwrap(), command), "{token}");
            }
        }
    }
}

#[test]
fn later_registration_wins_within_a_group() {
    let mut tasks = CommandGroup::<Log>::anonymous();
    tasks.register("new", noop, "first", &["add"]);
    tasks.register("append", noop, "second", &["add"]);
    let groups = [tasks];

    let compiler = ParserCompiler::new(&groups);
    assert_eq!(compiler.resolve("add", None).unwrap().name(), "append");
    assert_eq!(compiler.resolve("new", None).unwrap().name(), "new");
    assert!(compiler.compile().is_err());
}

#[test]
fn later_group_shadows_earlier_group() {
    let mut long = CommandGroup::<Log>::anonymous();
    long.register("status", noop, "long form", &["st"]);
    let mut short = CommandGroup::anonymous();
    short.register("status", noop, "shortcut", &[]);
    let groups = [long, short];

    let grammar = ParserCompiler::new(&groups).compile().unwrap();
    assert_eq!(grammar.resolve("status", None).unwrap().description(), "shortcut");
    assert_eq!(grammar.resolve("st", None).unwrap().description(), "long form");
}

#[test]
fn named_group_takes_its_token() {
    let mut tasks = CommandGroup::<Log>::anonymous();
    tasks.register("status", noop, "shortcut", &[]);
    let mut status = CommandGroup::named("status");
    status.register("list", noop, "statuses", &["ls"]);
    let mut profile = CommandGroup::named("profile");
    profile.register("set", noop, "", &[]);
    let mut shadow = CommandGroup::named("profile");
    shadow.register("list", noop, "", &[]);
    let groups = [tasks, status, profile, shadow];

    let grammar = ParserCompiler::new(&groups).compile().unwrap();
    assert_eq!(grammar.resolve("status", Some("ls")).unwrap().description(), "statuses");
    assert_eq!(
        grammar.resolve("status", None).unwrap_err(),
        ResolutionMiss { primary: "status".to_string(), secondary: None }
    );
    assert!(grammar.resolve("profile", Some("list")).is_ok());
    assert_eq!(
        grammar.resolve("profile", Some("set")).unwrap_err(),
        ResolutionMiss { primary: "profile".to_string(), secondary: Some("set".to_string()) }
    );
}

#[test]
fn compile_is_idempotent() {
    let groups = registry::groups();
    let compiler = ParserCompiler::new(&groups);
    let first = compiler.compile().unwrap().description();
    let second = compiler.compile().unwrap().description();
    assert_eq!(first, second);

    let commands = first.commands.iter().map(|it| it.name.as_str()).collect::<Vec<_>>();
    assert_eq!(commands, ["new", "list", "modify", "tag"]);
    assert_eq!(first.groups.len(), 3);
    assert_eq!(first.groups[0].aliases, ["p".to_string()]);
    assert_eq!(first.global_flags.len(), 4);
}

#[test]
fn dispatch() {
    let groups = registry::groups();
    let dispatcher = Dispatcher::new(&groups).unwrap();
    let mut log = Log::new();

    let outcome = dispatcher.dispatch(&mut log, args("add Buy milk -s todo"));
    assert_eq!(outcome, Outcome::Completed);
    assert_eq!(log, [r#"status="todo" task_name=["Buy", "milk"]"#]);

    let outcome = dispatcher.dispatch(&mut log, args("p -h"));
    assert!(matches!(&outcome, Outcome::Help(help) if help.starts_with("fir profile, p\n")));
    assert_eq!(outcome.exit_code(), fir::EXIT_SUCCESS);

    assert_eq!(dispatcher.dispatch(&mut log, args("p set")).exit_code(), fir::EXIT_USAGE);
    assert_eq!(dispatcher.dispatch(&mut log, args("bogus")).exit_code(), fir::EXIT_NOT_FOUND);
    assert_eq!(log.len(), 1);
}
