//! Stderr tracing for scheduling runs, selected by a `u8` verbosity.
//!
//! Each macro checks the level before formatting anything, so a silent run
//! pays only an integer comparison. Result lines go to stdout or the output
//! file and are never mixed with these messages.
//!
//! | level | constant            | what is reported                          |
//! |-------|---------------------|-------------------------------------------|
//! | 0     | `VERBOSITY_SILENT`  | nothing                                   |
//! | 1     | `VERBOSITY_CHANGES` | each switch and the per-case total        |
//! | 2     | `VERBOSITY_CHECKS`  | first conflicts per pass, why a run stops |
//! | 3     | `VERBOSITY_DEBUG`   | parsed record counts, window contents     |

pub const VERBOSITY_SILENT: u8 = 0;
pub const VERBOSITY_CHANGES: u8 = 1;
pub const VERBOSITY_CHECKS: u8 = 2;
pub const VERBOSITY_DEBUG: u8 = 3;

/// Report a switch decision or a case total (verbosity >= 1).
#[macro_export]
macro_rules! log_changes {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_CHANGES {
            eprintln!($($arg)*);
        }
    };
}

/// Report per-pass conflict positions and stop reasons (verbosity >= 2).
#[macro_export]
macro_rules! log_checks {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_CHECKS {
            eprintln!($($arg)*);
        }
    };
}

/// Dump parser and window internals (verbosity >= 3).
#[macro_export]
macro_rules! log_debug {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_DEBUG {
            eprintln!($($arg)*);
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels_ordered() {
        assert!(VERBOSITY_SILENT < VERBOSITY_CHANGES);
        assert!(VERBOSITY_CHANGES < VERBOSITY_CHECKS);
        assert!(VERBOSITY_CHECKS < VERBOSITY_DEBUG);
    }

    #[test]
    fn test_log_macros_silent() {
        let verbosity = VERBOSITY_SILENT;
        log_changes!(verbosity, "switch {}", 1);
        log_checks!(verbosity, "conflict at {}", 2);
        log_debug!(verbosity, "window {:?}", ["a", "b"]);
    }
}
