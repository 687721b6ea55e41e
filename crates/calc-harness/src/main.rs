//! `calc-harness` command-line entry point.

use anyhow::Context;
use calc_harness::{Harness, HarnessConfig, logging};
use calc_strategy::{StrategyHint, StrategyKind, StrategyRegistry};
use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};

fn main() -> anyhow::Result<()> {
    let cli = Command::new("calc-harness")
        .version(calc_harness::VERSION)
        .about("Verify calculator construction strategies")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("run")
                .about("Run every check against one strategy")
                .arg(
                    Arg::new("strategy")
                        .long("strategy")
                        .value_parser(value_parser!(String))
                        .help("Strategy name (see `list`); overrides --config"),
                )
                .arg(
                    Arg::new("hint")
                        .long("hint")
                        .conflicts_with("strategy")
                        .value_parser(value_parser!(String))
                        .help("Pick by hint: isolation, singleton, literal, constructor, sealed"),
                )
                .arg(
                    Arg::new("instances")
                        .long("instances")
                        .value_parser(value_parser!(usize))
                        .help("Instances created by the sharing check"),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .value_parser(value_parser!(std::path::PathBuf))
                        .help("JSON harness configuration file"),
                )
                .arg(
                    Arg::new("include-redefining")
                        .long("include-redefining")
                        .action(ArgAction::SetTrue)
                        .help("Allow selecting the redefining_literal strategy"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output as JSON"),
                ),
        )
        .subcommand(
            Command::new("compare")
                .about("Run every check against every registered strategy")
                .arg(
                    Arg::new("instances")
                        .long("instances")
                        .default_value("10000")
                        .value_parser(value_parser!(usize))
                        .help("Instances created by the sharing check"),
                ),
        )
        .subcommand(Command::new("list").about("List registered strategies"));

    let matches = cli.get_matches();

    match matches.subcommand() {
        Some(("run", args)) => run(args),
        Some(("compare", args)) => {
            let config = HarnessConfig::new().with_instance_count(instances(args, 10_000));
            logging::init(&config.log_level);
            compare(&config)
        }
        Some(("list", _)) => {
            list();
            Ok(())
        }
        _ => unreachable!("subcommand required"),
    }
}

fn instances(args: &ArgMatches, fallback: usize) -> usize {
    args.get_one::<usize>("instances").copied().unwrap_or(fallback)
}

fn run(args: &ArgMatches) -> anyhow::Result<()> {
    let mut config = match args.get_one::<std::path::PathBuf>("config") {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            HarnessConfig::from_json(&json)?
        }
        None => HarnessConfig::new(),
    };
    config.instance_count = instances(args, config.instance_count);
    logging::init(&config.log_level);

    let mut registry = StrategyRegistry::with_defaults();
    if args.get_flag("include-redefining") {
        registry.register(StrategyKind::RedefiningLiteral);
    }

    let harness = match args.get_one::<String>("hint") {
        Some(hint) => {
            let hint: StrategyHint = hint.parse()?;
            Harness::from_hint(&registry, hint, config)?
        }
        None => {
            let name = args
                .get_one::<String>("strategy")
                .map_or(config.strategy.as_str(), String::as_str)
                .to_string();
            Harness::from_registry(&registry, &name, config)?
        }
    };
    let report = harness.run();

    if args.get_flag("json") {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report.generate_text());
    }

    std::process::exit(if report.passed() { 0 } else { 1 });
}

fn compare(config: &HarnessConfig) -> anyhow::Result<()> {
    let registry = StrategyRegistry::with_defaults();

    println!("{:<24} {:>6} {:>6}  failing checks", "strategy", "passed", "failed");
    for kind in StrategyKind::DEFAULTS {
        let harness = Harness::from_registry(&registry, kind.as_str(), config.clone())?;
        let report = harness.run();
        let failing: Vec<String> = report.failures().map(|o| o.check.to_string()).collect();
        println!(
            "{:<24} {:>6} {:>6}  {}",
            kind,
            report.passed_count(),
            report.failed_count(),
            failing.join("; ")
        );
    }
    Ok(())
}

fn list() {
    let registry = StrategyRegistry::with_defaults();
    for kind in StrategyKind::ALL {
        let strategy = kind.strategy();
        let registered = if registry.contains(kind) { "" } else { " (opt-in)" };
        println!(
            "{:<24} instances: {:?}, add: {:?}{registered}",
            kind,
            strategy.instance_sharing(),
            strategy.add_behavior(),
        );
    }
}
