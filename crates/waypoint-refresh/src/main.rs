use clap::{value_parser, Arg, ArgAction, Command};
use std::path::PathBuf;
use std::sync::Arc;
use waypoint_refresh::{RefreshConfig, RefreshService};
use waypoint_rollup::pack_summary;
use waypoint_store::{MemoryStore, TicketPackStore};
use waypoint_test_utils::seed_portfolio;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Command::new("waypoint")
        .version("0.1.0")
        .about("Strategic roadmap refresh pipeline")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("demo")
                .about("Seed an in-memory portfolio and run refreshes against it")
                .arg(
                    Arg::new("refreshes")
                        .long("refreshes")
                        .default_value("3")
                        .value_parser(value_parser!(usize))
                        .help("Number of sequential refreshes to run"),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .value_parser(value_parser!(PathBuf))
                        .help("TOML file overriding the refresh configuration"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output results as JSON"),
                ),
        );

    let matches = cli.get_matches();

    match matches.subcommand() {
        Some(("demo", args)) => {
            let refreshes = *args.get_one::<usize>("refreshes").unwrap();
            let json = args.get_flag("json");
            let config = match args.get_one::<PathBuf>("config") {
                Some(path) => RefreshConfig::from_toml_str(&std::fs::read_to_string(path)?)?,
                None => RefreshConfig::default(),
            };

            let store = Arc::new(MemoryStore::new());
            let seeded = seed_portfolio(&store).await;
            let service = RefreshService::from_memory(&store).with_config(config);

            if !json {
                let items = store.items_for_pack(seeded.pack).await?;
                let summary = pack_summary(&items);
                println!(
                    "Seeded pack: {} tickets, {}% complete ({} done, {} in progress, {} blocked)",
                    summary.total,
                    summary.percent_complete,
                    summary.done,
                    summary.in_progress,
                    summary.blocked
                );
            }

            let mut results = Vec::new();
            for run in 1..=refreshes {
                let outcome = service.refresh(seeded.tenant, seeded.roadmap).await?;
                if !json {
                    println!(
                        "run {run}: new roadmap {} at {}",
                        outcome.new_roadmap_id, outcome.version
                    );
                }
                results.push(outcome);
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                println!();
                println!("Roadmap rows in store: {}", store.roadmap_count());
                println!("Audit events recorded: {}", store.audit_events().len());
            }
            Ok(())
        }
        _ => unreachable!("arg_required_else_help prints usage"),
    }
}
