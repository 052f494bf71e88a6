//! A small in-memory task tracker wired through the `fir` router.
//!
//! ```text
//! $ cargo run --example tracker -- add Buy oat milk --due friday
//! $ cargo run --example tracker -- --pretty set priority 0001 5
//! $ cargo run --example tracker -- status --help
//! ```
//!
//! State lives for one run only; the tracker starts from a seeded profile.

use std::{collections::BTreeMap, fmt};

use fir::{
    logging, ArgumentOverrides, ArgumentSpec, Arguments, Arity, CommandGroup, Dispatcher,
    GlobalOptions, HandlerError, Outcome, OutputMode, ParserCompiler, Settings,
};

type Result<T = (), E = HandlerError> = std::result::Result<T, E>;

const DEFAULT_PROFILE: &str = "default";
const DEFAULT_PRIORITY: u16 = 100;
const DEFAULT_ORDER: u16 = 600;

fn main() {
    let settings = Settings::load().unwrap_or_else(|err| {
        eprintln!("{err}");
        Settings::default()
    });
    logging::init(&GlobalOptions::default(), &settings);

    let groups = catalog();
    let grammar = match ParserCompiler::new(&groups)
        .program("fir", "A simple command-line task tracker.")
        .compile()
    {
        Ok(it) => it,
        Err(err) => Outcome::from(err).exit(),
    };
    let dispatcher = Dispatcher::from_grammar(grammar);

    let invocation = match dispatcher.parse_env() {
        Ok(it) => it,
        Err(err) => Outcome::from(err).exit(),
    };
    logging::init(&invocation.globals, &settings);

    let mut tracker = Tracker::new(&invocation.globals, &settings);
    dispatcher.invoke(&mut tracker, invocation).exit()
}

/// Parameter definitions shared between commands.
struct Parameters {
    status: ArgumentSpec,
    description: ArgumentSpec,
    task_id: ArgumentSpec,
    task_name: ArgumentSpec,
    due: ArgumentSpec,
    link: ArgumentSpec,
    priority: ArgumentSpec,
    tags: ArgumentSpec,
    assignee: ArgumentSpec,
}

impl Parameters {
    fn new() -> Parameters {
        Parameters {
            status: ArgumentSpec::aliased(
                "status",
                "Status of the task, otherwise the value of `defaults.status` is used.",
                &["-s", "--status"],
            ),
            description: ArgumentSpec::aliased(
                "description",
                "Add a description to the task.",
                &["--desc", "--description"],
            ),
            task_id: ArgumentSpec::aliased(
                "task_id",
                "Task id value. Shortened values match the first task with that prefix.",
                &["--id"],
            ),
            task_name: ArgumentSpec::aliased(
                "task_name",
                "Name of task, should be a short description of what needs to be done.",
                &["-n", "--name"],
            ),
            due: ArgumentSpec::aliased("due", "Set the due date of task.", &["--due"]),
            link: ArgumentSpec::aliased("link", "Add a link to the task.", &["--link"]),
            priority: ArgumentSpec::aliased(
                "priority",
                "Priority of the task (1-999).",
                &["--priority"],
            ),
            tags: ArgumentSpec::new("tags", "Name(s) of tags against a task."),
            assignee: ArgumentSpec::new("assignee", "Name(s) of people to assign to a task."),
        }
    }
}

fn positional(spec: &ArgumentSpec) -> ArgumentSpec {
    spec.with_overrides(ArgumentOverrides::new().aliases(&[]))
}

fn many(spec: &ArgumentSpec) -> ArgumentSpec {
    spec.with_overrides(ArgumentOverrides::new().arity(Arity::OneOrMore))
}

fn remove_flag() -> ArgumentSpec {
    ArgumentSpec::aliased("remove", "Remove the given values instead of adding them.", &["--rm"])
}

fn catalog() -> Vec<CommandGroup<Tracker>> {
    let p = Parameters::new();
    vec![tasks(&p), profiles(&p), config(), statuses(&p), set(&p), data(&p)]
}

fn tasks(p: &Parameters) -> CommandGroup<Tracker> {
    let task_id = positional(&p.task_id);

    let mut group = CommandGroup::anonymous();
    group
        .register("new", new_task, "Create a new task.", &["add"])
        .with_positional([many(&positional(&p.task_name))])
        .with_optional([p.status.clone(), p.due.clone()]);
    group
        .register("list", list_tasks, "List the tasks of the current profile.", &["ls"])
        .with_optional([p.status.clone(), p.task_name.clone(), p.task_id.clone()]);
    group
        .register("info", task_info, "Show every field of a task.", &["i"])
        .with_positional([task_id.clone()]);
    group
        .register("modify", modify_task, "Modify a task.", &["mod", "edit"])
        .with_positional([task_id.clone()])
        .with_optional([
            p.status.clone(),
            many(&p.task_name),
            p.due.clone(),
            p.priority.clone(),
            many(&p.description),
            p.link.clone(),
        ]);
    group
        .register("remove", remove_task, "Remove a task.", &["rm"])
        .with_positional([task_id.clone()]);
    group
        .register("tag", tag_task, "Add tags to a task.", &[])
        .with_positional([task_id.clone(), many(&p.tags)])
        .with_flag([remove_flag()]);
    group
        .register("assign", assign_task, "Assign people to a task.", &[])
        .with_positional([task_id, many(&p.assignee)])
        .with_flag([remove_flag()]);
    group
}

fn profiles(p: &Parameters) -> CommandGroup<Tracker> {
    let profile_name = ArgumentSpec::new("profile_name", "Name of the profile.");
    let description = p.description.with_overrides(
        ArgumentOverrides::new()
            .description("Describe what the profile is used for.")
            .aliases(&["-d", "--description"])
            .arity(Arity::OneOrMore),
    );

    let mut group = CommandGroup::named("profile");
    group
        .register("create", create_profile, "Create a new profile.", &["c"])
        .with_positional([profile_name.clone()])
        .with_optional([description.clone()]);
    group
        .register("modify", modify_profile, "Modify a profile.", &["mod"])
        .with_positional([profile_name.clone()])
        .with_optional([description]);
    group
        .register("remove", remove_profile, "Remove a profile.", &["rm"])
        .with_positional([profile_name.clone()]);
    group.register("list", list_profiles, "List profiles.", &["ls"]);
    group
        .register("set", set_profile, "Switch to another profile.", &[])
        .with_positional([profile_name]);
    group
}

fn config() -> CommandGroup<Tracker> {
    let name = ArgumentSpec::new("config_name", "Name of the config value.");
    let value = ArgumentSpec::new("config_value", "Value to store.");

    let mut group = CommandGroup::named("config");
    group
        .register("get", get_config, "Print a config value.", &["g"])
        .with_positional([name.clone()]);
    group
        .register("set", set_config, "Set a config value.", &["s"])
        .with_positional([name.clone(), value]);
    group
        .register("clear", clear_config, "Clear a config value.", &["rm"])
        .with_positional([name]);
    group.register("ls", list_config, "List config values.", &["list"]);
    group
}

fn statuses(p: &Parameters) -> CommandGroup<Tracker> {
    let status = positional(&p.status)
        .with_overrides(ArgumentOverrides::new().description("Name of the status."));
    let color = ArgumentSpec::aliased(
        "color",
        "Color tasks with this status are shown in.",
        &["-c", "--color"],
    );
    let order = ArgumentSpec::aliased("order", "Sort order of the status (1-999).", &["--order"]);
    let hide =
        ArgumentSpec::aliased("hide", "Hide tasks with this status by default.", &["--hide"]);

    let mut group = CommandGroup::named("status");
    group
        .register("new", new_status, "Add a status.", &[])
        .with_positional([status.clone()])
        .with_optional([color.clone(), order.clone()])
        .with_flag([hide]);
    group
        .register("hide", hide_status, "Hide or show tasks with this status.", &[])
        .with_positional([status.clone()]);
    group
        .register("rm", remove_status, "Remove a status.", &[])
        .with_positional([status.clone()]);
    group
        .register("order", order_status, "Set the order value of a status.", &[])
        .with_positional([status.clone(), positional(&order)]);
    group
        .register("color", color_status, "Set the color of a status.", &["colour"])
        .with_positional([status, positional(&color)]);
    group.register("list", list_statuses, "List available statuses.", &["ls"]);
    group
}

fn set(p: &Parameters) -> CommandGroup<Tracker> {
    let task_id = positional(&p.task_id);

    let mut group = CommandGroup::named("set");
    group
        .register("status", set_status, "Set the status of a task.", &[])
        .with_positional([task_id.clone(), positional(&p.status)]);
    group
        .register("priority", set_priority, "Set the priority of a task (1-999).", &[])
        .with_positional([task_id.clone(), positional(&p.priority)]);
    group
        .register("description", set_description, "Add a description to a task.", &["desc"])
        .with_positional([task_id.clone(), many(&positional(&p.description))]);
    group
        .register("link", set_link, "Add a link to a task.", &[])
        .with_positional([task_id, positional(&p.link)]);
    group
}

fn data(p: &Parameters) -> CommandGroup<Tracker> {
    let task_id = positional(&p.task_id);
    let field = ArgumentSpec::new("field_name", "Name of the custom field.");
    let value = ArgumentSpec::new("field_value", "Value of the custom field.");

    let mut group = CommandGroup::named("data");
    group
        .register("get", get_data, "Print a custom field of a task.", &["g"])
        .with_positional([task_id.clone(), field.clone()]);
    group
        .register("set", set_data, "Set a custom field of a task.", &["s"])
        .with_positional([task_id.clone(), field.clone(), value]);
    group
        .register("clear", clear_data, "Remove a custom field from a task.", &["rm"])
        .with_positional([task_id.clone(), field]);
    group
        .register("ls", list_data, "List the custom fields of a task.", &["list"])
        .with_positional([task_id]);
    group
}

#[derive(Debug, Default)]
struct Task {
    id: String,
    name: String,
    status: String,
    due: Option<String>,
    priority: u16,
    description: Option<String>,
    link: Option<String>,
    tags: Vec<String>,
    assigned_to: Vec<String>,
    data: BTreeMap<String, String>,
}

#[derive(Debug)]
struct Status {
    name: String,
    color: String,
    order: u16,
    hidden: bool,
}

#[derive(Debug)]
struct Profile {
    description: Option<String>,
    config: BTreeMap<String, String>,
    statuses: Vec<Status>,
    tasks: Vec<Task>,
    next_id: u32,
}

impl Profile {
    fn new(description: Option<String>) -> Profile {
        let status = |name: &str, color: &str, order| Status {
            name: name.to_string(),
            color: color.to_string(),
            order,
            hidden: false,
        };
        Profile {
            description,
            config: BTreeMap::from([("defaults.status".to_string(), "todo".to_string())]),
            statuses: vec![
                status("todo", "light_blue", 100),
                status("doing", "yellow", 200),
                Status { hidden: true, ..status("done", "green", 300) },
            ],
            tasks: Vec::new(),
            next_id: 1,
        }
    }

    fn task(&mut self, id: &str) -> Result<&mut Task> {
        self.tasks
            .iter_mut()
            .find(|it| it.id.starts_with(id))
            .ok_or_else(|| HandlerError::new("Task not found"))
    }

    fn status(&mut self, name: &str) -> Result<&mut Status> {
        self.statuses
            .iter_mut()
            .find(|it| it.name == name)
            .ok_or_else(|| HandlerError::new("Could not find status."))
    }

    fn ensure_status(&self, name: &str) -> Result {
        if self.statuses.iter().any(|it| it.name == name) {
            Ok(())
        } else {
            Err("Invalid status provided".into())
        }
    }
}

struct Store {
    scope: String,
    profiles: BTreeMap<String, Profile>,
}

impl Store {
    fn profile(&mut self) -> Result<&mut Profile> {
        self.profiles
            .get_mut(&self.scope)
            .ok_or_else(|| HandlerError::new(format!("Profile not found: {}", self.scope)))
    }
}

struct Output {
    mode: OutputMode,
    silent: bool,
}

impl Output {
    fn print(&self, line: impl fmt::Display) {
        if !self.silent {
            println!("{line}");
        }
    }

    fn task(&self, task: &Task) {
        let due = task.due.as_deref().unwrap_or("-");
        match self.mode {
            OutputMode::Plain => self.print(format_args!(
                "{}\t{}\t{}\t{}\t{}",
                task.id,
                task.name,
                task.status,
                due,
                task.tags.join(", ")
            )),
            OutputMode::Pretty => {
                self.print(format_args!("Name: {}", task.name));
                self.print(format_args!("Id: {}", task.id));
                self.print(format_args!("Status: {}", task.status));
                self.print(format_args!("Priority: {}", task.priority));
                self.print(format_args!("Due: {due}"));
                self.print(format_args!("Tags: {}", task.tags.join(", ")));
                self.print(format_args!("Assigned: {}", task.assigned_to.join(", ")));
                if let Some(description) = &task.description {
                    self.print(format_args!("Description: {description}"));
                }
                if let Some(link) = &task.link {
                    self.print(format_args!("Link: {link}"));
                }
            }
        }
    }
}

/// Execution context handed to every handler.
struct Tracker {
    store: Store,
    out: Output,
}

impl Tracker {
    fn new(globals: &GlobalOptions, settings: &Settings) -> Tracker {
        let profile = Profile::new(Some("Default profile.".to_string()));
        Tracker {
            store: Store {
                scope: settings.scope(globals).unwrap_or(DEFAULT_PROFILE).to_string(),
                profiles: BTreeMap::from([(DEFAULT_PROFILE.to_string(), profile)]),
            },
            out: Output { mode: settings.output_mode(globals), silent: globals.silent },
        }
    }
}

fn arg<'a>(args: &'a Arguments, name: &str) -> Result<&'a str> {
    args.value(name).ok_or_else(|| HandlerError::new(format!("missing `{name}`")))
}

fn parse_priority(value: &str) -> Result<u16> {
    value
        .parse::<u16>()
        .ok()
        .filter(|it| (1..=999).contains(it))
        .ok_or_else(|| "Invalid priority value. Must be an integer and between 1 - 999.".into())
}

fn update_list(list: &mut Vec<String>, values: &[String], remove: bool) {
    for value in values {
        if remove {
            list.retain(|it| it != value);
        } else if !list.contains(value) {
            list.push(value.clone());
        }
    }
}

fn new_task(ctx: &mut Tracker, args: &Arguments) -> Result {
    let scope = ctx.store.scope.clone();
    let profile = ctx.store.profile()?;
    let status = match args.value("status") {
        Some(status) => {
            profile.ensure_status(status)?;
            status.to_string()
        }
        None => profile.config.get("defaults.status").cloned().unwrap_or_else(|| "todo".into()),
    };

    let task = Task {
        id: format!("{:04x}", profile.next_id),
        name: args.joined("task_name", " ").unwrap_or_default(),
        status,
        due: args.value("due").map(str::to_string),
        priority: DEFAULT_PRIORITY,
        ..Task::default()
    };
    profile.next_id += 1;

    ctx.out.print(format_args!("Added task {} [{}] to profile {scope}", task.name, task.id));
    ctx.out.task(&task);
    profile.tasks.push(task);
    Ok(())
}

fn list_tasks(ctx: &mut Tracker, args: &Arguments) -> Result {
    let status = args.value("status");
    let name = args.value("task_name").map(str::to_lowercase);
    let id = args.value("task_id");

    let profile = ctx.store.profile()?;
    for task in &profile.tasks {
        let hidden = profile.statuses.iter().any(|it| it.name == task.status && it.hidden);
        let keep = match status {
            Some(status) => task.status == status,
            None => !hidden,
        };
        if !keep
            || id.map_or(false, |id| !task.id.starts_with(id))
            || name.as_ref().map_or(false, |name| !task.name.to_lowercase().contains(name))
        {
            continue;
        }
        ctx.out.task(task);
    }
    Ok(())
}

fn task_info(ctx: &mut Tracker, args: &Arguments) -> Result {
    let task = ctx.store.profile()?.task(arg(args, "task_id")?)?;
    ctx.out.task(task);
    Ok(())
}

fn modify_task(ctx: &mut Tracker, args: &Arguments) -> Result {
    let profile = ctx.store.profile()?;
    if let Some(status) = args.value("status") {
        profile.ensure_status(status)?;
    }
    let priority = args.value("priority").map(parse_priority).transpose()?;

    let task = profile.task(arg(args, "task_id")?)?;
    if let Some(status) = args.value("status") {
        task.status = status.to_string();
    }
    if let Some(name) = args.joined("task_name", " ") {
        task.name = name;
    }
    if let Some(due) = args.value("due") {
        task.due = Some(due.to_string());
    }
    if let Some(priority) = priority {
        task.priority = priority;
    }
    if let Some(description) = args.joined("description", " ") {
        task.description = Some(description);
    }
    if let Some(link) = args.value("link") {
        task.link = Some(link.to_string());
    }

    ctx.out.print(format_args!("Updated task {} [{}]", task.name, task.id));
    ctx.out.task(task);
    Ok(())
}

fn remove_task(ctx: &mut Tracker, args: &Arguments) -> Result {
    let id = arg(args, "task_id")?;
    let profile = ctx.store.profile()?;
    let idx = profile
        .tasks
        .iter()
        .position(|it| it.id.starts_with(id))
        .ok_or_else(|| HandlerError::new("Task not found"))?;
    let task = profile.tasks.remove(idx);
    ctx.out.print(format_args!("Removed task {} [{}]", task.name, task.id));
    Ok(())
}

fn tag_task(ctx: &mut Tracker, args: &Arguments) -> Result {
    let task = ctx.store.profile()?.task(arg(args, "task_id")?)?;
    update_list(&mut task.tags, args.values("tags").unwrap_or_default(), args.flag("remove"));
    ctx.out.print(format_args!("Updated task {} [{}]", task.name, task.id));
    Ok(())
}

fn assign_task(ctx: &mut Tracker, args: &Arguments) -> Result {
    let task = ctx.store.profile()?.task(arg(args, "task_id")?)?;
    let assignees = args.values("assignee").unwrap_or_default();
    update_list(&mut task.assigned_to, assignees, args.flag("remove"));
    ctx.out.print(format_args!("Updated task {} [{}]", task.name, task.id));
    Ok(())
}

fn create_profile(ctx: &mut Tracker, args: &Arguments) -> Result {
    let name = arg(args, "profile_name")?;
    if ctx.store.profiles.contains_key(name) {
        return Err(format!("Profile already exists: {name}").into());
    }
    let profile = Profile::new(args.joined("description", " "));
    ctx.store.profiles.insert(name.to_string(), profile);
    ctx.out.print("Profile added");
    Ok(())
}

fn modify_profile(ctx: &mut Tracker, args: &Arguments) -> Result {
    let name = arg(args, "profile_name")?;
    let profile =
        ctx.store.profiles.get_mut(name).ok_or_else(|| HandlerError::new("Profile not found"))?;
    profile.description = args.joined("description", " ");
    ctx.out.print(format_args!("Updated profile {name}"));
    Ok(())
}

fn remove_profile(ctx: &mut Tracker, args: &Arguments) -> Result {
    let name = arg(args, "profile_name")?;
    if ctx.store.profiles.remove(name).is_none() {
        return Err("Profile not found".into());
    }
    ctx.out.print("Profile removed");
    Ok(())
}

fn list_profiles(ctx: &mut Tracker, _: &Arguments) -> Result {
    for (name, profile) in &ctx.store.profiles {
        let current = if *name == ctx.store.scope { "*" } else { " " };
        let description = profile.description.as_deref().unwrap_or("");
        ctx.out.print(format_args!("{current} {name}\t{description}"));
    }
    Ok(())
}

fn set_profile(ctx: &mut Tracker, args: &Arguments) -> Result {
    let name = arg(args, "profile_name")?;
    if !ctx.store.profiles.contains_key(name) {
        return Err("Profile not found".into());
    }
    ctx.store.scope = name.to_string();
    ctx.out.print(format_args!("Set profile to {name}"));
    Ok(())
}

fn get_config(ctx: &mut Tracker, args: &Arguments) -> Result {
    let name = arg(args, "config_name")?;
    let profile = ctx.store.profile()?;
    let value = profile.config.get(name).map_or("None", String::as_str);
    ctx.out.print(format_args!("{name}: {value}"));
    Ok(())
}

fn set_config(ctx: &mut Tracker, args: &Arguments) -> Result {
    let name = arg(args, "config_name")?;
    let value = arg(args, "config_value")?;
    ctx.store.profile()?.config.insert(name.to_string(), value.to_string());
    ctx.out.print(format_args!("Updated config {name}"));
    Ok(())
}

fn clear_config(ctx: &mut Tracker, args: &Arguments) -> Result {
    let name = arg(args, "config_name")?;
    ctx.store.profile()?.config.remove(name);
    ctx.out.print(format_args!("Removed config {name}"));
    Ok(())
}

fn list_config(ctx: &mut Tracker, _: &Arguments) -> Result {
    let profile = ctx.store.profile()?;
    for (name, value) in &profile.config {
        ctx.out.print(format_args!("{name}\t{value}"));
    }
    Ok(())
}

fn new_status(ctx: &mut Tracker, args: &Arguments) -> Result {
    let name = arg(args, "status")?;
    let order = args.value("order").map(parse_priority).transpose()?.unwrap_or(DEFAULT_ORDER);
    let profile = ctx.store.profile()?;
    if profile.ensure_status(name).is_ok() {
        return Err(format!("Status already exists: {name}").into());
    }
    profile.statuses.push(Status {
        name: name.to_string(),
        color: args.value("color").unwrap_or("light_blue").to_string(),
        order,
        hidden: args.flag("hide"),
    });
    ctx.out.print(format_args!("Added status \"{name}\""));
    Ok(())
}

fn hide_status(ctx: &mut Tracker, args: &Arguments) -> Result {
    let status = ctx.store.profile()?.status(arg(args, "status")?)?;
    status.hidden = !status.hidden;
    ctx.out.print(format_args!("Set hide status to \"{}\"", status.hidden));
    Ok(())
}

fn remove_status(ctx: &mut Tracker, args: &Arguments) -> Result {
    let name = arg(args, "status")?;
    let profile = ctx.store.profile()?;
    profile.status(name)?;
    profile.statuses.retain(|it| it.name != name);
    ctx.out.print(format_args!("Removed status \"{name}\""));
    Ok(())
}

fn order_status(ctx: &mut Tracker, args: &Arguments) -> Result {
    let order = parse_priority(arg(args, "order")?)?;
    let status = ctx.store.profile()?.status(arg(args, "status")?)?;
    status.order = order;
    ctx.out.print(format_args!("Set order value of status \"{}\" to {order}.", status.name));
    Ok(())
}

fn color_status(ctx: &mut Tracker, args: &Arguments) -> Result {
    let status = ctx.store.profile()?.status(arg(args, "status")?)?;
    status.color = arg(args, "color")?.to_string();
    ctx.out.print(format_args!("Set color of status to \"{}\"", status.color));
    Ok(())
}

fn list_statuses(ctx: &mut Tracker, _: &Arguments) -> Result {
    let profile = ctx.store.profile()?;
    let mut statuses = profile.statuses.iter().collect::<Vec<_>>();
    statuses.sort_by_key(|it| it.order);
    for it in statuses {
        ctx.out.print(format_args!("{}\t{}\t{}\t{}", it.name, it.color, it.order, it.hidden));
    }
    Ok(())
}

fn set_status(ctx: &mut Tracker, args: &Arguments) -> Result {
    let status = arg(args, "status")?;
    let profile = ctx.store.profile()?;
    profile.ensure_status(status)?;
    let task = profile.task(arg(args, "task_id")?)?;
    task.status = status.to_string();
    ctx.out.print(format_args!("Updated task {} [{}]", task.name, task.id));
    Ok(())
}

fn set_priority(ctx: &mut Tracker, args: &Arguments) -> Result {
    let priority = parse_priority(arg(args, "priority")?)?;
    let task = ctx.store.profile()?.task(arg(args, "task_id")?)?;
    task.priority = priority;
    ctx.out.print(format_args!("Updated task {} [{}]", task.name, task.id));
    Ok(())
}

fn set_description(ctx: &mut Tracker, args: &Arguments) -> Result {
    let task = ctx.store.profile()?.task(arg(args, "task_id")?)?;
    task.description = args.joined("description", " ");
    ctx.out.print(format_args!("Updated task {} [{}]", task.name, task.id));
    Ok(())
}

fn set_link(ctx: &mut Tracker, args: &Arguments) -> Result {
    let task = ctx.store.profile()?.task(arg(args, "task_id")?)?;
    task.link = Some(arg(args, "link")?.to_string());
    ctx.out.print(format_args!("Updated task {} [{}]", task.name, task.id));
    Ok(())
}

fn get_data(ctx: &mut Tracker, args: &Arguments) -> Result {
    let field = arg(args, "field_name")?;
    let task = ctx.store.profile()?.task(arg(args, "task_id")?)?;
    let value = task.data.get(field).ok_or_else(|| HandlerError::new("Field not found"))?;
    ctx.out.print(format_args!("{field}: {value}"));
    Ok(())
}

fn set_data(ctx: &mut Tracker, args: &Arguments) -> Result {
    let field = arg(args, "field_name")?;
    let value = arg(args, "field_value")?;
    let task = ctx.store.profile()?.task(arg(args, "task_id")?)?;
    task.data.insert(field.to_string(), value.to_string());
    ctx.out.print(format_args!("Updated task {}", task.id));
    Ok(())
}

fn clear_data(ctx: &mut Tracker, args: &Arguments) -> Result {
    let field = arg(args, "field_name")?;
    let task = ctx.store.profile()?.task(arg(args, "task_id")?)?;
    task.data.remove(field).ok_or_else(|| HandlerError::new("Field not found"))?;
    ctx.out.print(format_args!("Updated task {}", task.id));
    Ok(())
}

fn list_data(ctx: &mut Tracker, args: &Arguments) -> Result {
    let task = ctx.store.profile()?.task(arg(args, "task_id")?)?;
    for (name, value) in &task.data {
        ctx.out.print(format_args!("{name}\t{value}"));
    }
    Ok(())
}
