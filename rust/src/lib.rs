//! Minimum-switch scheduling of named requests over named resources.
//!
//! A resource may not serve a request equal to its own identifier. Given the
//! resources and the ordered requests of a case, the scheduler finds the
//! fewest changes of active resource needed to serve every request (the
//! "search engines and queries" problem), together with the plan achieving
//! it.

pub mod conflict;
pub mod config;
pub mod input;
pub mod logging;
mod models;
pub mod output;
pub mod runner;
pub mod scheduler;

#[cfg(feature = "python")]
mod python;

pub use config::{InputSource, OutputSink, RunConfig, SchedulerConfig};
pub use conflict::{conflict_index, ConflictMap, OccurrenceIndex};
pub use input::{parse_cases, ParseError};
pub use models::{Case, CaseResult, Segment, SwitchPlan};
pub use output::{describe_plan, format_case_line, write_results};
pub use runner::{run, solve_cases, solve_text, RunError};
pub use scheduler::{count_switches, SchedulerError, SwitchScheduler};
