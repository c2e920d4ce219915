use clap::{Arg, ArgAction, Command, value_parser};

pub fn build_cli() -> Command {
    Command::new("lambda-prune")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Delete old Lambda function versions outside the retention window")
        .long_about("lambda-prune removes published versions of Lambda functions whose name starts with a given prefix. For every matching function it keeps $LATEST, every version an alias points at, and the most recent versions inside the retention window; everything else is deleted.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("prune")
                .about("Delete old versions of every function whose name starts with PREFIX")
                .arg(
                    Arg::new("prefix")
                        .help("Function name prefix (case-sensitive, matched from the start)")
                        .required(true)
                        .index(1)
                )
                .arg(
                    Arg::new("keep")
                        .long("keep")
                        .short('k')
                        .help("Most recent unaliased versions to keep per function (overrides config, default: 3)")
                        .value_parser(value_parser!(usize))
                )
                .arg(
                    Arg::new("concurrency")
                        .long("concurrency")
                        .short('c')
                        .help("Maximum delete calls in flight per function (overrides config, default: 2)")
                        .value_parser(value_parser!(usize))
                )
                .arg(
                    Arg::new("dry-run")
                        .long("dry-run")
                        .help("Show what would be deleted without deleting anything")
                        .action(ArgAction::SetTrue)
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output the run summary in JSON format")
                        .action(ArgAction::SetTrue)
                )
        )
}
