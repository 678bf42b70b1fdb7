//! Analysis managers and their timed compute step.
//!
//! The analysis managers themselves live elsewhere in the toolkit. All this
//! module needs from them is a name and a `compute` entry point.

use crate::error::Result;
use crate::timing::Timer;
use crate::ui::Reporter;

/// One analysis step exposing a compute entry point.
pub trait Manager {
    /// Name used in logs.
    fn name(&self) -> &str;

    /// Run the analysis.
    fn compute(&mut self) -> Result<()>;
}

/// Run one manager's compute, bracketed by a timing report.
pub fn compute_timed<M, S>(manager: &mut M, timer: Timer<S>) -> Result<()>
where
    M: Manager + ?Sized,
    S: Reporter,
{
    tracing::info!("Computing {}", manager.name());
    let mut compute = timer.wrap_fallible(|()| manager.compute());
    compute(())
}

/// Run managers in order, each with its own timing report.
///
/// Stops at the first failure and returns it.
pub fn compute_all<S: Reporter>(
    managers: &mut [Box<dyn Manager>],
    sink: &mut S,
    report_on_failure: bool,
) -> Result<()> {
    for manager in managers.iter_mut() {
        let timer = Timer::new(&mut *sink).report_on_failure(report_on_failure);
        if let Err(err) = compute_timed(manager.as_mut(), timer) {
            tracing::warn!("{} failed: {}", manager.name(), err);
            return Err(err);
        }
    }
    Ok(())
}
