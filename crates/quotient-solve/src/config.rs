//! Solver configuration.

/// Options for a solve.
///
/// ```ignore
/// let config = SolverConfig::default()
///     .with_trace_steps(true)
///     .with_magnitude_limit_bits(4096);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SolverConfig {
    /// Report each step through `tracing` when no observer is given.
    pub trace_steps: bool,
    /// Stop once any numerator or denominator grows beyond this many bits.
    /// `None` lets entries grow without bound.
    pub magnitude_limit_bits: Option<usize>,
}

impl SolverConfig {
    /// Sets `trace_steps`.
    #[must_use]
    pub fn with_trace_steps(mut self, trace_steps: bool) -> Self {
        self.trace_steps = trace_steps;
        self
    }

    /// Caps entry size at `bits`.
    #[must_use]
    pub fn with_magnitude_limit_bits(mut self, bits: usize) -> Self {
        self.magnitude_limit_bits = Some(bits);
        self
    }
}
