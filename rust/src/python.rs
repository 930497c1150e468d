//! Python bindings (enabled with the `python` feature).

// Allow clippy warning triggered by PyO3 macro expansion
#![allow(clippy::useless_conversion)]

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::config::SchedulerConfig;
use crate::models::{Segment, SwitchPlan};
use crate::output::format_case_line;
use crate::runner::solve_text;
use crate::scheduler::{count_switches, SwitchScheduler};

/// A run of requests served by one resource.
#[pyclass(name = "Segment")]
#[derive(Clone, Debug)]
pub struct PySegment {
    #[pyo3(get)]
    pub resource: String,
    #[pyo3(get)]
    pub resource_position: usize,
    #[pyo3(get)]
    pub start: usize,
    #[pyo3(get)]
    pub end: usize,
}

#[pymethods]
impl PySegment {
    fn __repr__(&self) -> String {
        format!(
            "Segment(resource={:?}, start={}, end={})",
            self.resource, self.start, self.end
        )
    }
}

impl From<Segment> for PySegment {
    fn from(segment: Segment) -> Self {
        Self {
            resource: segment.resource,
            resource_position: segment.resource_position,
            start: segment.start,
            end: segment.end,
        }
    }
}

/// Minimum-switch plan for one case.
#[pyclass(name = "SwitchPlan")]
#[derive(Clone, Debug)]
pub struct PySwitchPlan {
    #[pyo3(get)]
    pub switches: usize,
    #[pyo3(get)]
    pub segments: Vec<PySegment>,
}

#[pymethods]
impl PySwitchPlan {
    fn __repr__(&self) -> String {
        format!(
            "SwitchPlan(switches={}, segments={})",
            self.switches,
            self.segments.len()
        )
    }
}

impl From<SwitchPlan> for PySwitchPlan {
    fn from(plan: SwitchPlan) -> Self {
        Self {
            switches: plan.switches,
            segments: plan.segments.into_iter().map(PySegment::from).collect(),
        }
    }
}

/// Minimum number of switches to serve `requests` with `resources`.
///
/// # Raises
/// * ValueError if some request names the only distinct resource
#[pyfunction]
#[pyo3(name = "count_switches")]
fn py_count_switches(resources: Vec<String>, requests: Vec<String>) -> PyResult<usize> {
    count_switches(&resources, &requests).map_err(|e| PyValueError::new_err(e.to_string()))
}

/// Minimum-switch plan, with the segments each resource serves.
#[pyfunction]
#[pyo3(name = "plan_switches", signature = (resources, requests, verbosity=0))]
fn py_plan_switches(
    resources: Vec<String>,
    requests: Vec<String>,
    verbosity: u8,
) -> PyResult<PySwitchPlan> {
    SwitchScheduler::new(SchedulerConfig::with_verbosity(verbosity))
        .schedule(&resources, &requests)
        .map(PySwitchPlan::from)
        .map_err(|e| PyValueError::new_err(e.to_string()))
}

/// Solve a whole case file given as text, returning `Case #n: k` lines.
///
/// # Raises
/// * ValueError on malformed input or an unservable case
#[pyfunction]
#[pyo3(name = "solve_text")]
fn py_solve_text(text: &str) -> PyResult<Vec<String>> {
    let results = solve_text(text, &SchedulerConfig::default())
        .map_err(|e| PyValueError::new_err(e.to_string()))?;
    Ok(results
        .iter()
        .map(|r| format_case_line(r.case_number, r.switches()))
        .collect())
}

/// The switchplan Python module.
#[pymodule]
#[pyo3(name = "switchplan")]
fn switchplan_module(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PySegment>()?;
    m.add_class::<PySwitchPlan>()?;

    m.add_function(wrap_pyfunction!(py_count_switches, m)?)?;
    m.add_function(wrap_pyfunction!(py_plan_switches, m)?)?;
    m.add_function(wrap_pyfunction!(py_solve_text, m)?)?;

    Ok(())
}
