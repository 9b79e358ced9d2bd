//! sudoku-evo CLI: run GA trials and report statistics.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use sudoku_evo::ga::GaConfig;
use sudoku_evo::solver::{run_trials, TrialsConfig};

/// Evolve Sudoku boards with a genetic algorithm
#[derive(Parser, Debug)]
#[command(name = "sudoku-evo")]
#[command(version, about, long_about = None)]
struct Args {
    /// Block edge length N; the board is N^2 x N^2
    #[arg(short = 'n', long, default_value = "3")]
    base: usize,

    /// Number of independent trials
    #[arg(short, long, default_value = "30")]
    runs: usize,

    /// Generation budget per trial
    #[arg(short, long, default_value = "5000")]
    generations: usize,

    /// Population size
    #[arg(short, long, default_value = "10000")]
    population: usize,

    /// Initial mutation rate, percent
    #[arg(short, long, default_value = "80")]
    mutation_rate: u8,

    /// Generations without improvement before the mutation rate rises
    /// (0 disables)
    #[arg(long, default_value = "100")]
    stagnation_window: usize,

    /// Random seed (default: random)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Run trials on all cores
    #[arg(long)]
    parallel: bool,

    /// CSV report path
    #[arg(short, long, default_value = "sudoku-report.csv")]
    output: PathBuf,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let mut engine = GaConfig::default()
        .with_population_size(args.population)
        .with_mutation_rate(args.mutation_rate);
    if let Some(seed) = args.seed {
        engine = engine.with_seed(seed);
    }

    let config = TrialsConfig::default()
        .with_base(args.base)
        .with_runs(args.runs)
        .with_max_generations(args.generations)
        .with_stagnation_window(args.stagnation_window)
        .with_parallel(args.parallel)
        .with_engine(engine);

    if let Err(reason) = config.validate() {
        eprintln!("Error: {reason}");
        return ExitCode::FAILURE;
    }

    let report = match run_trials(&config) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    for (run, trial) in report.trials.iter().enumerate() {
        let status = if trial.solved { "solved" } else { "exhausted budget" };
        println!(
            "run {run}: {status} after {} generations in {:?} (best fitness {:.4}, mutation rate {}%)",
            trial.generations, trial.elapsed, trial.best_fitness, trial.final_mutation_rate
        );
    }

    println!();
    println!(
        "solved {}/{} runs on the {size}x{size} board",
        report.solved_runs,
        report.trials.len(),
        size = args.base * args.base
    );
    println!(
        "generations: min {} / max {} / avg {:.1}",
        report.min_generations, report.max_generations, report.mean_generations
    );
    println!(
        "wall time:   min {:?} / max {:?} / avg {:?}",
        report.min_elapsed, report.max_elapsed, report.mean_elapsed
    );

    println!();
    println!("best board found (fitness {:.4}):", report.best.fitness());
    println!("{}", report.best);

    if let Err(e) = report.write_csv(&args.output) {
        eprintln!("Error: failed to write {}: {e}", args.output.display());
        return ExitCode::FAILURE;
    }
    println!("wrote per-epoch averages to {}", args.output.display());

    ExitCode::SUCCESS
}
