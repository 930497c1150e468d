use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};

use switchplan::{InputSource, OutputSink, RunConfig, SchedulerConfig};

/// Count the minimum resource switches for every case in an input file.
#[derive(Parser, Debug)]
#[command(name = "switchplan", version)]
struct Args {
    /// Case file to read ("-" for stdin)
    #[arg(default_value = "-")]
    input: String,

    /// Write "Case #n: k" lines here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Increase logging on stderr (-v changes, -vv checks, -vvv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Also describe each case's switch plan on stderr
    #[arg(long)]
    plan: bool,
}

impl Args {
    fn into_config(self) -> RunConfig {
        RunConfig {
            input: InputSource::from_arg(&self.input),
            output: self.output.map_or(OutputSink::Stdout, OutputSink::Path),
            scheduler: SchedulerConfig::with_verbosity(self.verbose),
            show_plan: self.plan,
        }
    }
}

fn main() -> ExitCode {
    let config = Args::parse().into_config();
    match switchplan::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("switchplan: {}", e);
            ExitCode::FAILURE
        }
    }
}
