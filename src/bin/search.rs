use std::path::PathBuf;
use std::process::ExitCode;

use anstream::eprintln;
use anstream::println;
use clap::Parser;
use clap::builder::PossibleValuesParser;
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;

use transit_search::algorithms::STRATEGY_NAMES;
use transit_search::generic_search::search_by_name;
use transit_search::problems::transit::TransitNetwork;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

/// Finds a route between two stations of a transit network
#[derive(Parser, Debug)]
#[clap(long_version = transit_search::build::CLAP_LONG_VERSION)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Station to leave from
    pub start: String,
    /// Station to arrive at
    pub goal: String,

    #[arg(
        short,
        long,
        default_value = "BreadthFirst",
        value_parser = PossibleValuesParser::new(STRATEGY_NAMES),
    )]
    pub algorithm: String,

    /// Extra minutes charged for changing lines (UniformCost and BestFirst)
    #[arg(short, long, default_value_t = 0u32)]
    pub line_change_cost: u32,

    /// Flip the order in which successors are queued
    #[arg(short, long)]
    pub reverse: bool,

    /// Network file, one connection per line as
    /// `from, to, line, minutes, main zone, secondary zone`
    #[arg(short, long, env = "TRANSIT_NETWORK", default_value = "data/tubedata.csv")]
    pub network: PathBuf,

    #[command(flatten)]
    color: colorchoice_clap::Color,
}

fn main() -> ExitCode {
    let args = Args::parse();
    args.color.write_global();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let network = match TransitNetwork::try_from(args.network.as_path()) {
        Ok(network) => network,
        Err(e) => {
            eprintln!("{} {e}", "Failed to load network:".red());
            return ExitCode::FAILURE;
        }
    };
    log::info!("Loaded {network:?} from {:?}", args.network);

    println!(
        "{} {} -> {} ({}, line change {}min{})",
        "Searching".bold(),
        args.start.yellow(),
        args.goal.yellow(),
        args.algorithm.cyan(),
        args.line_change_cost,
        if args.reverse { ", reversed" } else { "" },
    );

    match search_by_name(
        &network,
        &args.start,
        &args.goal,
        &args.algorithm,
        args.reverse,
        args.line_change_cost,
    ) {
        Ok(found) => {
            println!("{} {}min", "Cost:".bold(), found.cost.green());
            println!("{} {}", "Explored:".bold(), found.explored);
            println!("{} {}", "Path:".bold(), found.labels().join(" -> "));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{} {e}", "Search failed:".red());
            ExitCode::FAILURE
        }
    }
}
