use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, Command};
use lifeline_core::{
    demo_action_catalog, demo_network, run_pipeline, CouplingMode, PipelineInputs, PipelineOutput,
    SelectionStrategy,
};
use lifeline_graph::BackendKind;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Command::new("lifeline")
        .version("0.1.0")
        .about("Cascading infrastructure failure and resilience analysis")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("run")
                .about("Run the operational pipeline on the demo network")
                .arg(
                    Arg::new("seed")
                        .long("seed")
                        .action(ArgAction::Append)
                        .default_value("compressor_1")
                        .help("Initially failed asset id (repeatable)"),
                )
                .arg(
                    Arg::new("rate")
                        .long("rate")
                        .default_value("0.35")
                        .value_parser(value_parser!(f64))
                        .help("Degradation rate applied per step"),
                )
                .arg(
                    Arg::new("threshold")
                        .long("threshold")
                        .default_value("0.4")
                        .value_parser(value_parser!(f64))
                        .help("Condition at or below which an asset fails"),
                )
                .arg(
                    Arg::new("steps")
                        .long("steps")
                        .default_value("5")
                        .value_parser(value_parser!(usize))
                        .help("Maximum simulation steps"),
                )
                .arg(
                    Arg::new("coupling")
                        .long("coupling")
                        .default_value("linear")
                        .help("Coupling mode: linear or threshold"),
                )
                .arg(
                    Arg::new("strategy")
                        .long("strategy")
                        .default_value("greedy")
                        .help("Selection strategy: greedy or exact"),
                )
                .arg(
                    Arg::new("budget")
                        .long("budget")
                        .default_value("120")
                        .value_parser(value_parser!(f64))
                        .help("Mitigation budget"),
                )
                .arg(
                    Arg::new("backend")
                        .long("backend")
                        .default_value("petgraph")
                        .help("Graph backend: petgraph or adjacency"),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .help("Load pipeline inputs from a JSON file (overrides flags)"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Emit the result bundle as JSON"),
                ),
        )
        .subcommand(
            Command::new("network")
                .about("Print the demo network")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Emit as JSON"),
                ),
        )
        .subcommand(
            Command::new("catalog")
                .about("Print the demo mitigation catalog")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Emit as JSON"),
                ),
        );

    match cli.get_matches().subcommand() {
        Some(("run", args)) => {
            let inputs = if let Some(path) = args.get_one::<String>("config") {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("reading pipeline config {path}"))?;
                serde_json::from_str(&raw)
                    .with_context(|| format!("parsing pipeline config {path}"))?
            } else {
                inputs_from_flags(args)?
            };
            let backend: BackendKind = args
                .get_one::<String>("backend")
                .map(String::as_str)
                .unwrap_or("petgraph")
                .parse()?;

            let output = run_pipeline(&demo_network(), &demo_action_catalog(), &inputs, backend)?;

            if args.get_flag("json") {
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                render_report(&inputs, &output);
            }
        }
        Some(("network", args)) => {
            let network = demo_network();
            if args.get_flag("json") {
                println!("{}", serde_json::to_string_pretty(&network)?);
            } else {
                println!("Assets:");
                for asset in network.assets() {
                    println!(
                        "  {:<14} {}/{:?}  capacity {:>5.1}  demand {:>5.1}",
                        asset.id, asset.domain, asset.kind, asset.capacity, asset.demand
                    );
                }
                println!("Dependencies:");
                for dep in network.dependencies() {
                    let arrow = if dep.directed { "->" } else { "<->" };
                    println!(
                        "  {} {} {}  [{}  weight {:.2}  {}]",
                        dep.source, arrow, dep.target, dep.relation, dep.weight, dep.coupling
                    );
                }
            }
        }
        Some(("catalog", args)) => {
            let catalog = demo_action_catalog();
            if args.get_flag("json") {
                println!("{}", serde_json::to_string_pretty(&catalog)?);
            } else {
                for action in &catalog {
                    println!(
                        "  {:<30} cost {:>5.1}  impact {:>5.1}  {:?}",
                        action.name, action.cost, action.impact_score, action.phase
                    );
                }
            }
        }
        _ => unreachable!("arg_required_else_help"),
    }

    Ok(())
}

fn inputs_from_flags(args: &clap::ArgMatches) -> anyhow::Result<PipelineInputs> {
    let coupling: CouplingMode = args
        .get_one::<String>("coupling")
        .map(String::as_str)
        .unwrap_or("linear")
        .parse()?;
    let strategy: SelectionStrategy = args
        .get_one::<String>("strategy")
        .map(String::as_str)
        .unwrap_or("greedy")
        .parse()?;

    Ok(PipelineInputs {
        failed_assets: args
            .get_many::<String>("seed")
            .unwrap_or_default()
            .cloned()
            .collect(),
        degradation_rate: *args.get_one::<f64>("rate").expect("defaulted"),
        dependency_threshold: *args.get_one::<f64>("threshold").expect("defaulted"),
        max_steps: *args.get_one::<usize>("steps").expect("defaulted"),
        coupling,
        strategy,
        budget: *args.get_one::<f64>("budget").expect("defaulted"),
    })
}

fn render_report(inputs: &PipelineInputs, output: &PipelineOutput) {
    println!("Cascade ({} coupling):", inputs.coupling);
    for step in output.history.steps() {
        if step.failed.is_empty() {
            println!("  step {:>2}: no failures", step.step);
        } else {
            println!("  step {:>2}: {}", step.step, step.failed.join(", "));
        }
    }
    println!();
    println!("Resilience:");
    for point in &output.resilience {
        println!(
            "  step {:>2}: service {:.2}  health {:.2}",
            point.step, point.service_ratio, point.health_index
        );
    }
    println!();
    println!(
        "Selected actions ({} strategy, budget {:.0}):",
        inputs.strategy, inputs.budget
    );
    let mut total_cost = 0.0;
    let mut total_impact = 0.0;
    for action in &output.selected_actions {
        total_cost += action.cost;
        total_impact += action.impact_score;
        println!(
            "  {:<30} cost {:>5.1}  impact {:>5.1}",
            action.name, action.cost, action.impact_score
        );
    }
    println!("  total: cost {total_cost:.1}, impact {total_impact:.1}");
    println!();
    println!("Final service ratio: {:.2}", output.service_ratio);
    println!("Final health index:  {:.2}", output.health_index);
}
