use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use log::info;
use rand::SeedableRng;

use sat_toolkit::cnf::Cnf;
use sat_toolkit::config::{Engine, SolverConfig};
use sat_toolkit::engines::{cdcl, dp, dpll, resolution, Verdict};
use sat_toolkit::generator::gen_random_3sat;
use sat_toolkit::harness::{run_with_timeout, write_results, RunRecord};
use sat_toolkit::io::{parse_cnf_file, read_instance_name, read_manual, write_dimacs};

/// Command-line front end, grounded on the teacher's `main.rs` +
/// `parse_config.rs`-driven dispatch and
/// `original_source/sat_solver.py::main`'s numbered menu (preserved here as
/// the `interactive` subcommand).
#[derive(Parser)]
#[command(name = "sat_toolkit")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Solve a single DIMACS-like instance with one engine.
    Solve {
        #[arg(long, value_enum)]
        engine: EngineArg,
        #[arg(long)]
        file: PathBuf,
        #[arg(long, default_value_t = 30)]
        timeout: u64,
    },
    /// Generate random 3-SAT instances and solve each with every engine.
    Bench {
        #[arg(long, value_delimiter = ',')]
        sizes: Vec<usize>,
        #[arg(long, default_value_t = 4.3)]
        alpha: f32,
        #[arg(long, default_value_t = 30)]
        timeout: u64,
        #[arg(long, default_value = "results.txt")]
        out: PathBuf,
    },
    /// Read clauses from stdin interactively, then prompt for an engine.
    Interactive,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum EngineArg {
    Resolution,
    Dp,
    Dpll,
    Cdcl,
}

impl From<EngineArg> for Engine {
    fn from(arg: EngineArg) -> Self {
        match arg {
            EngineArg::Resolution => Engine::Resolution,
            EngineArg::Dp => Engine::Dp,
            EngineArg::Dpll => Engine::Dpll,
            EngineArg::Cdcl => Engine::Cdcl,
        }
    }
}

fn engine_name(engine: Engine) -> &'static str {
    match engine {
        Engine::Resolution => "resolution",
        Engine::Dp => "dp",
        Engine::Dpll => "dpll",
        Engine::Cdcl => "cdcl",
    }
}

fn solve_with(engine: Engine, cnf: Cnf) -> Verdict {
    match engine {
        Engine::Resolution => resolution::resolution_only(&cnf),
        Engine::Dp => dp::dp_loop(&cnf),
        Engine::Dpll => dpll::dpll(&cnf).0,
        Engine::Cdcl => cdcl::cdcl(&cnf, &SolverConfig::default()).0,
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Solve { engine, file, timeout } => {
            let cnf = parse_cnf_file(&file).expect("failed to read CNF instance");
            let engine: Engine = engine.into();
            info!("solving {} with {}", read_instance_name(&file.to_string_lossy()), engine_name(engine));
            let outcome = run_with_timeout(move || solve_with(engine, cnf), Duration::from_secs(timeout));
            println!("{outcome:?}");
        }
        Command::Bench { sizes, alpha, timeout, out } => {
            let mut rng = rand::rngs::StdRng::seed_from_u64(42);
            let mut records = Vec::new();
            for n in sizes {
                let cnf = gen_random_3sat(n, alpha, &mut rng);
                let instance_path = out.with_file_name(format!("random-{n}.cnf"));
                write_dimacs(&instance_path, &cnf).expect("failed to write generated instance");
                let instance = read_instance_name(&instance_path.to_string_lossy());
                for engine in [Engine::Resolution, Engine::Dp, Engine::Dpll, Engine::Cdcl] {
                    let cnf = cnf.clone();
                    let start = std::time::Instant::now();
                    let outcome = run_with_timeout(move || solve_with(engine, cnf), Duration::from_secs(timeout));
                    records.push(RunRecord {
                        instance: instance.clone(),
                        engine_name: engine_name(engine).to_string(),
                        outcome,
                        elapsed: start.elapsed(),
                        propagations: 0,
                        backtracks: 0,
                        learned_clauses: 0,
                    });
                }
            }
            write_results(&out, &records).expect("failed to write results file");
            info!("wrote {} rows to {}", records.len(), out.display());
        }
        Command::Interactive => {
            let stdin = io::stdin();
            println!("Enter clauses, one per line (space-separated literals, blank line to finish):");
            let cnf = read_manual(stdin.lock()).expect("failed to read clauses from stdin");
            print!("Engine [resolution/dp/dpll/cdcl]: ");
            io::stdout().flush().ok();
            let mut choice = String::new();
            stdin.lock().read_line(&mut choice).expect("failed to read engine choice");
            let engine = match choice.trim().to_lowercase().as_str() {
                "resolution" => Engine::Resolution,
                "dp" => Engine::Dp,
                "dpll" => Engine::Dpll,
                _ => Engine::Cdcl,
            };
            let verdict = solve_with(engine, cnf);
            println!("{verdict:?}");
        }
    }
}
