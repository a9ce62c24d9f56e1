use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use em_core::EngineParameters;
use em_io::{IoError, JsonLinesSink, TrajectorySink, format_outcome};
use em_sim::{DEFAULT_MAX_TIME_S, Outcome, RunOptions, SimError, run};
use tracing::warn;

#[derive(Parser)]
#[command(name = "em-cli")]
#[command(about = "Engine overheat simulator - predicts how long an engine runs before overheating", long_about = None)]
struct Cli {
    /// Parameter source file and trajectory target file.
    ///
    /// With no paths, parameters are read interactively and the trajectory
    /// goes to the console. With one path it is the parameter file; with two
    /// the second is the trajectory output file.
    paths: Vec<PathBuf>,

    /// Simulated time horizon in seconds
    #[arg(long, default_value_t = DEFAULT_MAX_TIME_S)]
    max_time: u64,

    /// Write the trajectory as JSON lines instead of tab-separated text
    #[arg(long)]
    json: bool,
}

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error(transparent)]
    Io(#[from] IoError),

    #[error(transparent)]
    Sim(#[from] SimError),

    #[error("I/O error: {0}")]
    File(#[from] std::io::Error),
}

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    if cli.paths.len() > 2 {
        warn!(
            source = %cli.paths[0].display(),
            target = %cli.paths[1].display(),
            "too many arguments; using the first two"
        );
    }

    match run_cli(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::from(1)
        }
    }
}

fn run_cli(cli: &Cli) -> Result<(), CliError> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut console = io::stdout();

    let params = match cli.paths.first() {
        Some(source) => em_io::read_parameters_file(source)?,
        None => em_io::read_parameters_interactive(&mut input, &mut console)?,
    };
    let ambient = em_io::prompt_ambient_temperature(&mut input, &mut console)?;

    let opts = RunOptions {
        ambient_temperature: ambient,
        max_time_s: cli.max_time,
    };

    let outcome = match cli.paths.get(1) {
        Some(target) => simulate_to_file(&params, &opts, target, cli.json)?,
        None => {
            let mut sink = TrajectorySink::new(io::stdout());
            sink.write_header(&params, ambient)?;
            let outcome = run(&params, &opts, &mut sink)?;
            sink.flush()?;
            outcome
        }
    };

    println!("{}", format_outcome(&outcome));
    Ok(())
}

fn simulate_to_file(
    params: &EngineParameters,
    opts: &RunOptions,
    target: &Path,
    json: bool,
) -> Result<Outcome, CliError> {
    let file = BufWriter::new(File::create(target)?);

    if json {
        let mut sink = JsonLinesSink::new(file);
        let outcome = run(params, opts, &mut sink)?;
        sink.flush()?;
        Ok(outcome)
    } else {
        let mut sink = TrajectorySink::new(file);
        sink.write_header(params, opts.ambient_temperature)?;
        let outcome = run(params, opts, &mut sink)?;
        sink.flush()?;
        Ok(outcome)
    }
}
