//! Batch runner: read cases, schedule each one, write the results.

use std::fs::{self, File};
use std::io::{self, BufWriter, Read};

use thiserror::Error;

use crate::config::{InputSource, OutputSink, RunConfig, SchedulerConfig};
use crate::input::{parse_cases_verbose, ParseError};
use crate::models::{Case, CaseResult};
use crate::output::{describe_plan, format_case_line, write_results};
use crate::scheduler::{SchedulerError, SwitchScheduler};
use crate::{log_changes, log_checks};

/// Errors that abort a batch run.
#[derive(Error, Debug)]
pub enum RunError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("invalid input: {0}")]
    Parse(#[from] ParseError),
    #[error("case #{case_number}: {source}")]
    Schedule {
        case_number: usize,
        #[source]
        source: SchedulerError,
    },
}

/// Schedule every case independently, numbering results from 1.
pub fn solve_cases(
    cases: &[Case],
    config: &SchedulerConfig,
) -> Result<Vec<CaseResult>, RunError> {
    let scheduler = SwitchScheduler::new(config.clone());
    cases
        .iter()
        .enumerate()
        .map(|(i, case)| {
            let case_number = i + 1;
            log_changes!(
                config.verbosity,
                "Case #{} / {}",
                case_number,
                cases.len()
            );
            scheduler
                .schedule(&case.resources, &case.requests)
                .map(|plan| CaseResult { case_number, plan })
                .map_err(|source| RunError::Schedule {
                    case_number,
                    source,
                })
        })
        .collect()
}

/// Parse `text` and solve every case in it.
pub fn solve_text(text: &str, config: &SchedulerConfig) -> Result<Vec<CaseResult>, RunError> {
    let cases = parse_cases_verbose(text, config.verbosity)?;
    solve_cases(&cases, config)
}

fn read_input(source: &InputSource) -> io::Result<String> {
    match source {
        InputSource::Stdin => {
            let mut text = String::new();
            io::stdin().lock().read_to_string(&mut text)?;
            Ok(text)
        }
        InputSource::Path(path) => fs::read_to_string(path),
    }
}

/// Run a whole batch: read from the configured source, write to the sink.
///
/// Nothing is written if any case fails to parse or schedule.
pub fn run(config: &RunConfig) -> Result<(), RunError> {
    let verbosity = config.scheduler.verbosity;
    log_checks!(verbosity, "Reading cases from {}", config.input);
    let text = read_input(&config.input)?;
    let results = solve_text(&text, &config.scheduler)?;

    if config.show_plan {
        for result in &results {
            eprintln!(
                "{} ({})",
                format_case_line(result.case_number, result.switches()),
                describe_plan(&result.plan)
            );
        }
    }

    match &config.output {
        OutputSink::Stdout => write_results(io::stdout().lock(), &results)?,
        OutputSink::Path(path) => write_results(BufWriter::new(File::create(path)?), &results)?,
    }
    log_checks!(
        verbosity,
        "Wrote {} results to {}",
        results.len(),
        config.output
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const TWO_CASES: &str = "2
5
Yeehaw
NSM
Dont Ask
B9
Googol
10
Yeehaw
Yeehaw
Googol
B9
Googol
NSM
B9
NSM
Dont Ask
Googol
5
Yeehaw
NSM
Dont Ask
B9
Googol
7
Googol
Dont Ask
NSM
NSM
Yeehaw
Yeehaw
Googol
";

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("switchplan-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_solve_text() {
        let results = solve_text(TWO_CASES, &SchedulerConfig::default()).unwrap();
        let switches: Vec<usize> = results.iter().map(CaseResult::switches).collect();
        assert_eq!(switches, vec![1, 0]);
        assert_eq!(results[1].case_number, 2);
    }

    #[test]
    fn test_schedule_error_names_case() {
        let err = solve_text("2\n0\n0\n1\nX\n1\nX\n", &SchedulerConfig::default()).unwrap_err();
        assert!(matches!(err, RunError::Schedule { case_number: 2, .. }));
        assert!(err.to_string().starts_with("case #2:"));
    }

    #[test]
    fn test_parse_error_propagates() {
        let err = solve_text("1\n3\nA\n", &SchedulerConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            RunError::Parse(ParseError::MalformedCount { declared: 3, .. })
        ));
    }

    #[test]
    fn test_run_file_to_file() {
        let input = scratch_path("in.txt");
        let output = scratch_path("out.txt");
        fs::write(&input, TWO_CASES).unwrap();

        let config = RunConfig {
            input: InputSource::Path(input.clone()),
            output: OutputSink::Path(output.clone()),
            ..RunConfig::default()
        };
        run(&config).unwrap();

        let written = fs::read_to_string(&output).unwrap();
        assert_eq!(written, "Case #1: 1\nCase #2: 0\n");

        fs::remove_file(input).ok();
        fs::remove_file(output).ok();
    }

    #[test]
    fn test_run_missing_input() {
        let config = RunConfig {
            input: InputSource::Path(scratch_path("does-not-exist.txt")),
            ..RunConfig::default()
        };
        assert!(matches!(run(&config), Err(RunError::Io(_))));
    }
}
