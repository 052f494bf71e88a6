use fir::{ArgumentOverrides, ArgumentSpec, Arguments, Arity, CommandGroup, HandlerError};

/// Every handler appends the namespace it was called with.
pub type Log = Vec<String>;

pub fn record(log: &mut Log, args: &Arguments) -> Result<(), HandlerError> {
    let fields = args.iter().map(|(name, value)| format!("{name}={value}")).collect::<Vec<_>>();
    log.push(fields.join(" "));
    Ok(())
}

pub fn noop(_: &mut Log, _: &Arguments) -> Result<(), HandlerError> {
    Ok(())
}

pub fn groups() -> Vec<CommandGroup<Log>> {
    let many = || ArgumentOverrides::new().arity(Arity::OneOrMore);
    let status = ArgumentSpec::aliased("status", "Status of the task.", &["-s", "--status"]);
    let tags = ArgumentSpec::aliased("tags", "Tags of the task.", &["-t", "--tag"])
        .with_overrides(many());
    let task_id = ArgumentSpec::new("task_id", "Task id value.");
    let profile_name = ArgumentSpec::new("profile_name", "Name of the profile.");

    let mut tasks = CommandGroup::anonymous();
    tasks
        .register("new", record, "Create a new task.", &["add"])
        .with_positional([ArgumentSpec::new("task_name", "Name of task.").with_overrides(many())])
        .with_optional([
            status.clone(),
            ArgumentSpec::aliased("due", "Due date of the task.", &["--due"]),
        ]);
    tasks.register("list", record, "List tasks.", &["ls"]).with_optional([status.clone()]);
    tasks
        .register("modify", record, "Modify a task.", &["mod"])
        .with_positional([task_id.clone()])
        .with_optional([status, tags.clone()])
        .with_flag([ArgumentSpec::aliased("force", "Skip confirmation.", &["--force"])]);
    tasks
        .register("tag", record, "Tag a task.", &[])
        .with_positional([
            task_id.clone(),
            tags.with_overrides(ArgumentOverrides::new().aliases(&[])),
        ])
        .with_flag([ArgumentSpec::aliased("remove", "Remove the tags instead.", &["--rm"])]);

    let mut profile = CommandGroup::named("profile").with_aliases(&["p"]);
    profile
        .register("create", record, "Create a profile.", &["c"])
        .with_positional([profile_name.clone()])
        .with_optional([ArgumentSpec::aliased(
            "description",
            "Describe the profile.",
            &["-d", "--description"],
        )]);
    profile
        .register("set", record, "Switch to another profile.", &[])
        .with_positional([profile_name]);

    let mut set = CommandGroup::named("set");
    set.register("priority", record, "Set the priority of a task.", &[])
        .with_positional([task_id, ArgumentSpec::new("priority", "Priority (1-999).")]);

    let mut statuses = CommandGroup::named("status");
    statuses
        .register("new", record, "Create a status.", &[])
        .with_positional([ArgumentSpec::new("status", "Name of the status.")])
        .with_optional([ArgumentSpec::aliased("order", "Sort position.", &["--order"])]);

    vec![tasks, profile, set, statuses]
}
