//! Plain data row types written by output backends.

/// Figures for one tick of one trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub trial:            u32,
    pub tick:             u64,
    /// Truncated clean percentage after the tick.
    pub clean_percentage: u32,
    pub dirty_cells:      u64,
    /// The trial's global step counter after the tick.
    pub total_steps:      u64,
}

/// Figures for one finished trial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrialSummaryRow {
    pub trial:            u32,
    pub agents:           u64,
    pub ticks:            u64,
    pub total_steps:      u64,
    pub clean_percentage: u32,
    /// Accumulated step time in seconds.
    pub elapsed_secs:     f64,
    /// `false` if the tick cap stopped the trial before the floor was clean.
    pub converged:        bool,
}
