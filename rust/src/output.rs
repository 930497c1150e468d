//! Result formatting: `Case #<n>: <switches>` lines and plan descriptions.

use std::io::{self, Write};

use crate::models::{CaseResult, SwitchPlan};

pub fn format_case_line(case_number: usize, switches: usize) -> String {
    format!("Case #{}: {}", case_number, switches)
}

/// Write one result line per case, in order.
pub fn write_results<W: Write>(mut writer: W, results: &[CaseResult]) -> io::Result<()> {
    for result in results {
        writeln!(
            writer,
            "{}",
            format_case_line(result.case_number, result.switches())
        )?;
    }
    writer.flush()
}

/// Human-readable summary of a plan, with 1-based request numbers.
///
/// e.g. `start with Dont Ask; switch to Yeehaw after request #8`
pub fn describe_plan(plan: &SwitchPlan) -> String {
    let Some(first) = plan.segments.first() else {
        return "no resource needed".to_string();
    };
    let mut parts = vec![format!("start with {}", first.resource)];
    for segment in &plan.segments[1..] {
        parts.push(format!(
            "switch to {} after request #{}",
            segment.resource, segment.start
        ));
    }
    parts.join("; ")
}
