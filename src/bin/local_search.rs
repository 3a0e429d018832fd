//! Demo driver: minimizes the sphere function with each local search.

use clap::{Parser, ValueEnum};
use u_localsearch::hill_climbing::HillClimbingConfig;
use u_localsearch::random_search::RandomSearchConfig;
use u_localsearch::sa::SaConfig;
use u_localsearch::{sphere, Algorithm, Bounds};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Choice {
    All,
    HillClimbing,
    RandomSearch,
    SimulatedAnnealing,
}

#[derive(Parser, Debug)]
#[command(name = "local-search")]
#[command(about = "Minimize sum(x_i^2) over a box with single-point local search")]
struct Args {
    /// Algorithm to run
    #[arg(short, long, value_enum, default_value_t = Choice::All)]
    algorithm: Choice,

    /// Random seed; omit for a fresh run each time
    #[arg(short, long)]
    seed: Option<u64>,

    /// Iteration budget per algorithm
    #[arg(short, long, default_value_t = 1000)]
    iterations: usize,

    /// Number of dimensions
    #[arg(short, long, default_value_t = 2)]
    dimensions: usize,

    /// Lower bound of every dimension
    #[arg(long, default_value_t = -5.0, allow_hyphen_values = true)]
    low: f64,

    /// Upper bound of every dimension
    #[arg(long, default_value_t = 5.0, allow_hyphen_values = true)]
    high: f64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let bounds = Bounds::uniform(args.dimensions, args.low, args.high)?;

    let algorithms: Vec<Algorithm> = match args.algorithm {
        Choice::All => Algorithm::all().to_vec(),
        Choice::HillClimbing => vec![Algorithm::HillClimbing(HillClimbingConfig::default())],
        Choice::RandomSearch => vec![Algorithm::RandomSearch(RandomSearchConfig::default())],
        Choice::SimulatedAnnealing => vec![Algorithm::SimulatedAnnealing(SaConfig::default())],
    };

    for (i, algorithm) in algorithms.iter().enumerate() {
        let mut algorithm = algorithm.with_iterations(args.iterations);
        if let Some(seed) = args.seed {
            algorithm = algorithm.with_seed(seed);
        }

        let result = algorithm.run(&sphere, &bounds)?;

        if i > 0 {
            println!();
        }
        println!("{}:", algorithm.name());
        println!("  solution:   {:?}", result.best);
        println!("  value:      {:e}", result.best_value);
        println!(
            "  iterations: {} ({:?})",
            result.iterations, result.termination
        );
    }

    Ok(())
}
