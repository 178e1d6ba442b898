//! Entry points that run the elimination engine on a system.

use quotient_linalg::LinearSystem;

use crate::config::SolverConfig;
use crate::gauss::{GaussElimination, Outcome};
use crate::observer::{NoopObserver, StepObserver, TracingObserver};

/// Reduces `system` in place, reporting each step to `observer`.
///
/// Returns true if the system was brought to reduced row-echelon form and
/// false if it is inconsistent, in which case it is left partially reduced.
pub fn solve_system<O: StepObserver + ?Sized>(system: &mut LinearSystem, observer: &mut O) -> bool {
    GaussElimination::new(system, observer).solve()
}

/// Like [`solve_system`], with a configuration, returning the full outcome.
pub fn solve_system_with<O: StepObserver + ?Sized>(
    system: &mut LinearSystem,
    observer: &mut O,
    config: &SolverConfig,
) -> Outcome {
    let mut engine = GaussElimination::with_config(system, observer, config);
    engine.solve();
    engine.into_outcome()
}

/// Reduces `system` without an explicit observer.
///
/// Steps go to `tracing` when `config.trace_steps` is set and are dropped
/// otherwise.
pub fn solve(system: &mut LinearSystem, config: &SolverConfig) -> bool {
    let outcome = if config.trace_steps {
        solve_system_with(system, &mut TracingObserver, config)
    } else {
        solve_system_with(system, &mut NoopObserver, config)
    };
    outcome.is_solved()
}
