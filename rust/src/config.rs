//! Configuration types for scheduling runs.

use std::fmt;
use std::path::PathBuf;

/// Configuration for the switch scheduler.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SchedulerConfig {
    /// Verbosity level: 0=silent, 1=changes, 2=checks, 3=debug.
    pub verbosity: u8,
}

impl SchedulerConfig {
    pub fn with_verbosity(verbosity: u8) -> Self {
        Self { verbosity }
    }
}

/// Where case input is read from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum InputSource {
    #[default]
    Stdin,
    Path(PathBuf),
}

impl InputSource {
    /// Interpret a command-line argument, treating `-` as stdin.
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            Self::Stdin
        } else {
            Self::Path(PathBuf::from(arg))
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => write!(f, "<stdin>"),
            Self::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Where result lines are written.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum OutputSink {
    #[default]
    Stdout,
    /// Created if missing, truncated otherwise.
    Path(PathBuf),
}

impl fmt::Display for OutputSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdout => write!(f, "<stdout>"),
            Self::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Configuration for a whole batch run: input, output and scheduler settings.
#[derive(Clone, Debug, Default)]
pub struct RunConfig {
    pub input: InputSource,
    pub output: OutputSink,
    pub scheduler: SchedulerConfig,
    /// Also describe each case's switch plan on stderr.
    pub show_plan: bool,
}
