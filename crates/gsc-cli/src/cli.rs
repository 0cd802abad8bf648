//! Command-line definition

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;

/// What the user asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Request {
    Projects,
    Project(String),
    Suppliers {
        search: Option<String>,
        limit: Option<usize>,
    },
    Passport(String),
    Emissions(String),
    Summary(String),
    Analytics,
    Dashboard,
}

/// Parsed invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Options {
    pub(crate) config: Option<PathBuf>,
    pub(crate) instant: bool,
    pub(crate) json: bool,
    pub(crate) log_json: bool,
    pub(crate) request: Request,
}

fn id_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name).required(true).help(help)
}

pub(crate) fn command() -> Command {
    Command::new("gsc-tracker")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Green Supply Chain Tracker data service")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("TOML service configuration"),
        )
        .arg(
            Arg::new("instant")
                .long("instant")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Disable simulated latency"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Output as JSON"),
        )
        .arg(
            Arg::new("log-json")
                .long("log-json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Emit logs as JSON lines on stderr"),
        )
        .subcommand(Command::new("projects").about("List projects"))
        .subcommand(
            Command::new("project")
                .about("Show one project")
                .arg(id_arg("id", "Project id, e.g. p1")),
        )
        .subcommand(
            Command::new("suppliers")
                .about("List suppliers")
                .arg(
                    Arg::new("search")
                        .long("search")
                        .help("Case-insensitive filter on name or location"),
                )
                .arg(
                    Arg::new("limit")
                        .long("limit")
                        .value_parser(value_parser!(usize))
                        .help("Show at most this many rows"),
                ),
        )
        .subcommand(
            Command::new("passport")
                .about("Show the passport of a product")
                .arg(id_arg("product-id", "Product id, e.g. p1")),
        )
        .subcommand(
            Command::new("emissions")
                .about("List a project's emission points")
                .arg(id_arg("project-id", "Project id, e.g. p1")),
        )
        .subcommand(
            Command::new("summary")
                .about("Carbon footprint summary of a project")
                .arg(id_arg("project-id", "Project id, e.g. p1")),
        )
        .subcommand(Command::new("analytics").about("Totals per project and per stage"))
        .subcommand(Command::new("dashboard").about("Dashboard figures"))
}

fn required_id(args: &ArgMatches, name: &str) -> anyhow::Result<String> {
    args.get_one::<String>(name)
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("missing argument <{name}>"))
}

impl Options {
    pub(crate) fn from_matches(matches: &ArgMatches) -> anyhow::Result<Self> {
        let request = match matches.subcommand() {
            Some(("projects", _)) => Request::Projects,
            Some(("project", args)) => Request::Project(required_id(args, "id")?),
            Some(("suppliers", args)) => Request::Suppliers {
                search: args.get_one::<String>("search").cloned(),
                limit: args.get_one::<usize>("limit").copied(),
            },
            Some(("passport", args)) => Request::Passport(required_id(args, "product-id")?),
            Some(("emissions", args)) => Request::Emissions(required_id(args, "project-id")?),
            Some(("summary", args)) => Request::Summary(required_id(args, "project-id")?),
            Some(("analytics", _)) => Request::Analytics,
            Some(("dashboard", _)) => Request::Dashboard,
            Some((other, _)) => anyhow::bail!("unknown command: {other}"),
            None => anyhow::bail!("no command given"),
        };

        Ok(Self {
            config: matches.get_one::<PathBuf>("config").cloned(),
            instant: matches.get_flag("instant"),
            json: matches.get_flag("json"),
            log_json: matches.get_flag("log-json"),
            request,
        })
    }
}
