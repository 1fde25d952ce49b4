use thiserror::Error;

/// Reasons why a timeline or configuration is rejected before calculation.
///
/// These are contract violations on the caller's side; well-formed inputs
/// never produce an error.
#[derive(Clone, Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum TimelineError {
    #[error("object {idx} has a non-finite start or end time")]
    NonFiniteTime { idx: usize },
    #[error("object {idx} starts at {start_time}ms, before the previous object at {prev_start_time}ms")]
    Unordered {
        idx: usize,
        start_time: f64,
        prev_start_time: f64,
    },
    #[error("object {idx} ends at {end_time}ms, before it starts at {start_time}ms")]
    NegativeDuration {
        idx: usize,
        start_time: f64,
        end_time: f64,
    },
    #[error("object {idx} has a non-finite position, stack offset, or path end")]
    NonFinitePosition { idx: usize },
    #[error("object {idx} has invalid radius {radius}; must be finite and positive")]
    InvalidRadius { idx: usize, radius: f64 },
    #[error("object {idx} has invalid path length {length}; must be finite and non-negative")]
    InvalidPathLength { idx: usize, length: f64 },
    #[error("clock rate {0} must be finite and positive")]
    InvalidClockRate(f64),
    #[error("section length {0}ms must be finite and at least 1ms")]
    InvalidSectionLength(f64),
    #[error("preempt {0}ms must be finite and non-negative")]
    InvalidPreempt(f64),
    #[error("multiplier {0} must be finite and non-negative")]
    InvalidMultiplier(f64),
}
