/*!
 * Error Types
 * Centralized error handling with thiserror
 */

use thiserror::Error;

/// Errors raised at the simulator's construction-time boundaries.
///
/// The tick loop itself never fails once a workload is admitted — these
/// variants only cover input validated once, at admission or
/// workload-setup time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchedulerError {
    #[error("invalid process: {0}")]
    InvalidProcess(String),

    #[error("comparator workload is empty")]
    EmptyWorkload,
}

/// Result type for simulator operations that can fail.
pub type Result<T> = std::result::Result<T, SchedulerError>;
