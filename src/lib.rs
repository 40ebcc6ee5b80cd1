/*!
 * sched-sim
 * A discrete-event CPU scheduling simulator: a tick-driven engine with
 * eight pluggable dispatch policies (FCFS, SJF, SRTF, Priority, Round
 * Robin, LJF, LRTF, MLFQ), a kernel event log, a per-tick metrics
 * collector, and a cross-policy comparator.
 */

pub mod comparator;
pub mod core;
pub mod engine;
pub mod gantt;
pub mod kernel_log;
pub mod metrics;
pub mod policy;
pub mod process;

pub use comparator::{compare, compare_detailed, ComparisonDetail, ProcessConfig};
pub use core::{Pid, Priority, Result, SchedulerError};
pub use engine::{EngineState, SimulationEngine};
pub use gantt::GanttSegment;
pub use kernel_log::{KernelEvent, KernelEventKind};
pub use metrics::{FinalMetrics, MetricsSnapshot};
pub use policy::{Policy, PolicyId};
pub use process::{Pcb, ProcessSnapshot, ProcessState, ReadyQueue};
