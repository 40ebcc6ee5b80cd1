/*!
 * Core Types
 * Common types shared across the simulator
 */

/// Process ID type — a dense, 0-based index assigned on `add_process`.
pub type Pid = i64;

/// Scheduling priority. Lower numeric value means higher priority.
pub type Priority = i64;

/// Sentinel PID meaning "no process" (idle CPU, empty ready queue selection).
pub const NO_PID: Pid = -1;

/// Hard cap on ticks `run_to_completion` will drive, guarding against a
/// workload that never terminates.
pub const MAX_TICKS: u64 = 10_000;

/// Number of most-recent kernel log entries exposed by `get_state()`.
pub const KERNEL_LOG_TAIL: usize = 50;
