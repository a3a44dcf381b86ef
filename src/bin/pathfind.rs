/// Path-finding tool
///
/// Runs the search algorithms over grids and pipe networks and reports what
/// each one found.
use std::error::Error;
use std::path::PathBuf;
use std::time::Duration;

use anstream::println;
use clap::Parser;
use clap::Subcommand;
use hrsw::Stopwatch;
use human_duration::human_duration;
use indoc::indoc;
use owo_colors::OwoColorize;
use thousands::Separable;
use tracing_subscriber::EnvFilter;

use frontier_search::algorithms::Algorithm;
use frontier_search::algorithms::SearchOutcome;
use frontier_search::algorithms::search;
use frontier_search::distance::Distance;
use frontier_search::heuristic::Heuristic;
use frontier_search::heuristic::Metric;
use frontier_search::heuristic::SpatialHeuristic;
use frontier_search::heuristic::ZeroHeuristic;
use frontier_search::problems::grid::Connectivity;
use frontier_search::problems::grid::GridCell;
use frontier_search::problems::grid::GridProblem;
use frontier_search::problems::grid::HAZARD_FLOOR;
use frontier_search::problems::grid::HazardTerrain;
use frontier_search::problems::network::Coordinates;
use frontier_search::problems::network::Junction;
use frontier_search::problems::network::Network;
use frontier_search::problems::network::SelfLoops;
use frontier_search::space::Node;
use frontier_search::space::Path;
use frontier_search::space::Space;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

const DEMO_GRID: &str = "S000000/0111110/0000100/0116100/0000100/0111100/000000G";

const DEMO_PIPES: &str = indoc! {"
    # Junctions
    5
    # Pipes as `from to cost`
    0 1 3
    1 2 5
    2 3 2
    1 3 8
    3 4 1
"};

const DEMO_COORDINATES: &str = indoc! {"
    0 0
    1 1
    2 2
    3 1
    4 0
"};

/// Command line arguments
#[derive(Parser, Debug)]
#[clap(long_version = frontier_search::build::CLAP_LONG_VERSION)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    command: Command,

    /// Filter for the logs written to stderr, like `debug` or
    /// `frontier_search::algorithms=trace`.
    #[arg(long, global = true, env = "PATHFIND_LOG", default_value = "warn")]
    log_level: String,

    #[command(flatten)]
    color: colorchoice_clap::Color,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Searches a grid of walls (1) and floors (other digits).
    Grid(GridArgs),
    /// Searches a network of junctions joined by pipes.
    Network(NetworkArgs),
    /// Runs the built-in haunted house grid and pipe network.
    Demo,
}

#[derive(clap::Args, Debug)]
struct GridArgs {
    /// The grid, one row per delimiter.
    #[arg(long, required_unless_present = "file", conflicts_with = "file")]
    grid: Option<String>,
    /// A file with the grid, one row per line unless a delimiter is given.
    #[arg(long)]
    file: Option<PathBuf>,
    #[arg(long)]
    delimiter: Option<char>,

    #[arg(short, long, value_enum, default_values_t = [Algorithm::GreedyBestFirst, Algorithm::AStar])]
    algorithm: Vec<Algorithm>,
    /// Heuristics for the informed algorithms.
    #[arg(short, long, value_enum, default_values_t = Metric::ALL)]
    metric: Vec<Metric>,

    /// Allow diagonal moves.
    #[arg(long)]
    diagonal: bool,
    /// The floor digit that's dangerous to step on.
    #[arg(long, default_value_t = HAZARD_FLOOR)]
    hazard: u8,
    #[arg(long, default_value_t = 6.0)]
    hazard_cost: f64,
}

#[derive(clap::Args, Debug)]
struct NetworkArgs {
    /// The junction count, then one `from to cost` pipe per line.
    #[arg(long)]
    edges: PathBuf,
    /// One `x y` pair per junction, needed by informed algorithms.
    #[arg(long)]
    coordinates: Option<PathBuf>,
    #[arg(long)]
    start: u32,
    #[arg(long)]
    goal: u32,

    #[arg(short, long, value_enum, default_values_t = Algorithm::ALL)]
    algorithm: Vec<Algorithm>,
    #[arg(short, long, value_enum, default_value_t = Metric::Euclidean)]
    metric: Metric,
    #[arg(long, value_enum, default_value_t)]
    self_loops: SelfLoops,
}

/// Sends the library's `log` records to stderr, coloured unless colours are
/// off.
fn init_logging(filter: &str) -> Result<(), Box<dyn Error>> {
    let ansi = anstream::AutoStream::choice(&std::io::stderr()) != anstream::ColorChoice::Never;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(filter)?)
        .with_writer(std::io::stderr)
        .with_ansi(ansi)
        .without_time()
        .try_init()
        .map_err(|e| format!("Failed to set up logging. {e}"))?;
    Ok(())
}

struct Run<N: Node> {
    label: String,
    outcome: SearchOutcome<N, Distance>,
    elapsed: Duration,
}

fn timed<F, N>(label: String, f: F) -> Result<Run<N>, Box<dyn Error>>
where
    F: FnOnce() -> Result<SearchOutcome<N, Distance>, Box<dyn Error>>,
    N: Node,
{
    let mut stopwatch = Stopwatch::new_started();
    let outcome = f()?;
    stopwatch.stop();
    Ok(Run {
        label,
        outcome,
        elapsed: stopwatch.elapsed(),
    })
}

fn grid_run<H>(
    problem: &GridProblem,
    algorithm: Algorithm,
    heuristic: &H,
    label: String,
) -> Result<Run<GridCell>, Box<dyn Error>>
where
    H: Heuristic<GridCell, Distance>,
{
    let run = timed(label, || {
        Ok(search(
            problem.space(),
            heuristic,
            problem.start(),
            problem.goal(),
            algorithm,
        )?)
    })?;
    debug_assert_eq!(problem.space().path_cost(&run.outcome.path)?, run.outcome.cost);
    Ok(run)
}

fn report_grid(
    problem: &GridProblem,
    algorithms: &[Algorithm],
    metrics: &[Metric],
) -> Result<(), Box<dyn Error>> {
    let (rows, cols) = problem.space().dimensions();
    println!(
        "{} {}",
        format!("Grid {rows}x{cols}").bold(),
        format!("({})", problem.space().connectivity()).dimmed()
    );
    println!("{problem}");

    let mut runs = vec![];
    for &algorithm in algorithms {
        if algorithm.is_informed() {
            for &metric in metrics {
                let heuristic = SpatialHeuristic::on_plane(metric);
                let label = format!("{algorithm} ({metric})");
                runs.push(grid_run(problem, algorithm, &heuristic, label)?);
            }
        } else {
            runs.push(grid_run(problem, algorithm, &ZeroHeuristic, algorithm.to_string())?);
        }
    }

    for run in &runs {
        println!("=== {} ===", run.label.bold());
        let length = if run.outcome.path.is_empty() {
            "no path".red().to_string()
        } else {
            run.outcome.path.len().to_string()
        };
        println!(
            "Path length: {length} | Nodes explored: {} | Cost: {} | Time: {}",
            run.outcome.stats.expanded.separate_with_commas(),
            run.outcome.cost,
            human_duration(&run.elapsed)
        );
        println!("{}", problem.overlay(&run.outcome.path));
    }

    Ok(())
}

fn network_run<H>(
    network: &Network,
    algorithm: Algorithm,
    heuristic: &H,
    start: Junction,
    goal: Junction,
) -> Result<Run<Junction>, Box<dyn Error>>
where
    H: Heuristic<Junction, Distance>,
{
    let label = format!("{algorithm} strategy");
    let run = timed(label, || Ok(search(network, heuristic, start, goal, algorithm)?))?;
    debug_assert_eq!(network.path_cost(&run.outcome.path)?, run.outcome.cost);
    Ok(run)
}

fn junction_list<'a, I: IntoIterator<Item = &'a Junction>>(junctions: I) -> String {
    let junctions: Vec<String> = junctions.into_iter().map(Junction::to_string).collect();
    format!("[{}]", junctions.join(", "))
}

fn report_network(
    network: &Network,
    coordinates: Option<&Coordinates>,
    algorithms: &[Algorithm],
    metric: Metric,
    start: Junction,
    goal: Junction,
) -> Result<(), Box<dyn Error>> {
    println!(
        "{} {}",
        format!("Network of {} junctions", network.len()).bold(),
        format!("({} pipes)", network.pipes().len()).dimmed()
    );

    for &algorithm in algorithms {
        let run = match (algorithm.is_informed(), coordinates) {
            (true, Some(coordinates)) => {
                let heuristic = SpatialHeuristic::new(metric, coordinates);
                network_run(network, algorithm, &heuristic, start, goal)?
            }
            (true, None) => {
                log::warn!("No coordinates given, {algorithm} runs without a heuristic");
                network_run(network, algorithm, &ZeroHeuristic, start, goal)?
            }
            (false, _) => network_run(network, algorithm, &ZeroHeuristic, start, goal)?,
        };
        print_network_run(&run);
    }

    Ok(())
}

fn print_network_run(run: &Run<Junction>) {
    let path: &Path<Junction> = &run.outcome.path;
    println!("{}:", run.label.bold());
    if path.is_empty() {
        println!(" - Path: {}", "none".red());
    } else {
        println!(" - Path: {}", junction_list(path));
    }
    println!(" - Total cost: {}", run.outcome.cost);
    println!(
        " - Junctions visited (in order): {}",
        junction_list(&run.outcome.visited)
    );
    println!(
        " - Number of junctions visited: {}",
        run.outcome.visited.len().separate_with_commas()
    );
    println!(" - Time: {}", human_duration(&run.elapsed));
    println!();
}

fn read(path: &std::path::Path) -> Result<String, Box<dyn Error>> {
    std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read '{}'. {e}", path.display()).into())
}

fn grid(args: GridArgs) -> Result<(), Box<dyn Error>> {
    let (text, default_delimiter) = match (&args.grid, &args.file) {
        (Some(grid), _) => (grid.clone(), '/'),
        (None, Some(file)) => (read(file)?, '\n'),
        (None, None) => return Err("Either --grid or --file is needed".into()),
    };
    let delimiter = args.delimiter.unwrap_or(default_delimiter);

    let connectivity = if args.diagonal {
        Connectivity::Eight
    } else {
        Connectivity::Four
    };
    let terrain = HazardTerrain::new(args.hazard, Distance::new(args.hazard_cost)?);
    let problem = GridProblem::parse(&text, delimiter)?
        .with_connectivity(connectivity)
        .with_terrain(terrain);

    report_grid(&problem, &args.algorithm, &args.metric)
}

fn network(args: NetworkArgs) -> Result<(), Box<dyn Error>> {
    let network = Network::parse(&read(&args.edges)?, args.self_loops)?;
    let coordinates = match &args.coordinates {
        Some(path) => Some(Coordinates::parse(&read(path)?, network.len())?),
        None => None,
    };

    report_network(
        &network,
        coordinates.as_ref(),
        &args.algorithm,
        args.metric,
        Junction(args.start),
        Junction(args.goal),
    )
}

fn demo() -> Result<(), Box<dyn Error>> {
    let problem: GridProblem = DEMO_GRID.parse()?;
    let problem = problem.with_connectivity(Connectivity::Eight);
    report_grid(
        &problem,
        &[Algorithm::GreedyBestFirst, Algorithm::AStar],
        &Metric::ALL,
    )?;

    let network: Network = DEMO_PIPES.parse()?;
    let coordinates = Coordinates::parse(DEMO_COORDINATES, network.len())?;
    report_network(
        &network,
        Some(&coordinates),
        &Algorithm::ALL,
        Metric::Euclidean,
        Junction(0),
        Junction(4),
    )
}

fn main() -> Result<(), Box<dyn Error>> {
    #[cfg(feature = "coz_profile")]
    coz::thread_init();

    let args = Args::parse();
    args.color.write_global();
    init_logging(&args.log_level)?;
    log::debug!("{:?}", args.command);

    match args.command {
        Command::Grid(grid_args) => grid(grid_args),
        Command::Network(network_args) => network(network_args),
        Command::Demo => demo(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_filter_defaults_to_warn() {
        let args = Args::try_parse_from(["pathfind", "demo"]).unwrap();
        assert_eq!(args.log_level, "warn");
        let args = Args::try_parse_from(["pathfind", "demo", "--log-level", "frontier_search=debug"])
            .unwrap();
        assert_eq!(args.log_level, "frontier_search=debug");
    }

    #[test]
    fn bad_log_filters_are_errors() {
        assert!(init_logging("frontier_search=loud").is_err());
    }
}
