/*!
 * Scheduling Policy Contract
 * Strategy interface every scheduling algorithm implements, plus the
 * registry that maps ids/names to concrete policies.
 */

mod fcfs;
mod ljf;
mod lrtf;
mod mlfq;
mod priority;
mod round_robin;
mod sjf;
mod srtf;

pub use fcfs::FcfsPolicy;
pub use ljf::LjfPolicy;
pub use lrtf::LrtfPolicy;
pub use mlfq::{MlfqPolicy, MlfqQueueSnapshot};
pub use priority::PriorityPolicy;
pub use round_robin::RoundRobinPolicy;
pub use sjf::SjfPolicy;
pub use srtf::SrtfPolicy;

use crate::core::types::{Pid, NO_PID};
use crate::process::{Pcb, ReadyQueue};

/// Strategy interface every scheduling algorithm implements.
///
/// Policies never hold a back-reference to the engine: they receive the
/// ready queue and process table as arguments on every call and are pure
/// selectors plus (for MLFQ) their own bookkeeping.
pub trait Policy: std::fmt::Debug {
    /// Human-readable name, matches `PolicyId::as_str`.
    fn name(&self) -> &'static str;

    /// Whether this algorithm can preempt a running process outside of
    /// quantum expiry (checked via `should_preempt`).
    fn is_preemptive(&self) -> bool;

    /// Whether this algorithm uses a time quantum (Round Robin, MLFQ).
    fn uses_quantum(&self) -> bool {
        false
    }

    /// Choose who to dispatch when the CPU is idle. Must not mutate
    /// either argument. Returns `NO_PID` if nobody is eligible.
    fn select_next(&mut self, ready_queue: &ReadyQueue, processes: &[Pcb]) -> Pid;

    /// Called every tick before dispatch, only for preemptive policies.
    fn should_preempt(&self, _running_pid: Pid, _ready_queue: &ReadyQueue, _processes: &[Pcb]) -> bool {
        false
    }

    /// Quantum (in ticks) for this PID. Only meaningful if
    /// `uses_quantum()`; non-MLFQ quantum policies ignore `pid` and
    /// return the engine-configured quantum.
    fn quantum_for_pid(&self, _pid: Pid, engine_quantum: u32) -> u32 {
        engine_quantum
    }

    /// Called when a process exhausts its quantum. Default no-op;
    /// `MlfqPolicy` uses this to demote.
    fn on_quantum_expire(&mut self, _pid: Pid) {}

    /// MLFQ-only: snapshot of the per-level queue contents.
    fn queue_state(&self, _ready_queue: &ReadyQueue) -> Option<MlfqQueueSnapshot> {
        None
    }

    /// MLFQ-only: current feedback-queue level for a PID, so the engine
    /// can mirror it onto the process record for external visualization.
    fn mlfq_level(&self, _pid: Pid) -> Option<u8> {
        None
    }

    /// Clear any internal bookkeeping (MLFQ's level map).
    fn reset(&mut self) {}
}

/// Process lookup by PID. PIDs are dense 0-based indices assigned on
/// `add_process`, so this is a direct slice index.
fn pcb_of(processes: &[Pcb], pid: Pid) -> &Pcb {
    &processes[pid as usize]
}

/// Pick the ready PID with the smallest `key(pcb)`, breaking ties by
/// smallest PID.
pub(crate) fn select_min_by_key<K: PartialOrd + Copy>(
    ready_queue: &ReadyQueue,
    processes: &[Pcb],
    key: impl Fn(&Pcb) -> K,
) -> Pid {
    let mut best: Option<(K, Pid)> = None;
    for pid in ready_queue.iter() {
        let k = key(pcb_of(processes, pid));
        best = Some(match best {
            None => (k, pid),
            Some((bk, bp)) if k < bk || (k == bk && pid < bp) => (k, pid),
            Some(prev) => prev,
        });
    }
    best.map(|(_, pid)| pid).unwrap_or(NO_PID)
}

/// Pick the ready PID with the largest `key(pcb)`, breaking ties by
/// smallest PID.
pub(crate) fn select_max_by_key<K: PartialOrd + Copy>(
    ready_queue: &ReadyQueue,
    processes: &[Pcb],
    key: impl Fn(&Pcb) -> K,
) -> Pid {
    let mut best: Option<(K, Pid)> = None;
    for pid in ready_queue.iter() {
        let k = key(pcb_of(processes, pid));
        best = Some(match best {
            None => (k, pid),
            Some((bk, bp)) if k > bk || (k == bk && pid < bp) => (k, pid),
            Some(prev) => prev,
        });
    }
    best.map(|(_, pid)| pid).unwrap_or(NO_PID)
}

/// Stable numeric identifier for a policy, used by `set_policy_by_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyId {
    Fcfs = 0,
    Sjf = 1,
    Srtf = 2,
    Priority = 3,
    RoundRobin = 4,
    Ljf = 5,
    Lrtf = 6,
    Mlfq = 7,
}

impl PolicyId {
    pub const ALL: [PolicyId; 8] = [
        PolicyId::Fcfs,
        PolicyId::Sjf,
        PolicyId::Srtf,
        PolicyId::Priority,
        PolicyId::RoundRobin,
        PolicyId::Ljf,
        PolicyId::Lrtf,
        PolicyId::Mlfq,
    ];

    pub fn from_id(id: u8) -> Self {
        match id {
            0 => PolicyId::Fcfs,
            1 => PolicyId::Sjf,
            2 => PolicyId::Srtf,
            3 => PolicyId::Priority,
            4 => PolicyId::RoundRobin,
            5 => PolicyId::Ljf,
            6 => PolicyId::Lrtf,
            7 => PolicyId::Mlfq,
            other => {
                log::warn!("unknown policy id {other}, falling back to FCFS");
                PolicyId::Fcfs
            }
        }
    }

    /// Parse a policy name. Unrecognized names fall back to FCFS rather
    /// than erroring, since a config-driven policy switch must never
    /// panic the engine.
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().replace(['_', '-'], " ").as_str() {
            "fcfs" | "first come first served" => PolicyId::Fcfs,
            "sjf" | "shortest job first" => PolicyId::Sjf,
            "srtf" | "shortest remaining time first" => PolicyId::Srtf,
            "priority" => PolicyId::Priority,
            "rr" | "round robin" => PolicyId::RoundRobin,
            "ljf" | "longest job first" => PolicyId::Ljf,
            "lrtf" | "longest remaining time first" => PolicyId::Lrtf,
            "mlfq" | "multi level feedback queue" => PolicyId::Mlfq,
            _ => {
                log::warn!("unknown policy name {name:?}, falling back to FCFS");
                PolicyId::Fcfs
            }
        }
    }

    pub fn construct(self) -> Box<dyn Policy> {
        match self {
            PolicyId::Fcfs => Box::new(FcfsPolicy),
            PolicyId::Sjf => Box::new(SjfPolicy),
            PolicyId::Srtf => Box::new(SrtfPolicy),
            PolicyId::Priority => Box::new(PriorityPolicy),
            PolicyId::RoundRobin => Box::new(RoundRobinPolicy),
            PolicyId::Ljf => Box::new(LjfPolicy),
            PolicyId::Lrtf => Box::new(LrtfPolicy),
            PolicyId::Mlfq => Box::new(MlfqPolicy::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_policy_name_falls_back_to_fcfs() {
        assert_eq!(PolicyId::from_name("nonsense"), PolicyId::Fcfs);
    }

    #[test]
    fn policy_names_round_trip_through_construct() {
        for id in PolicyId::ALL {
            let policy = id.construct();
            assert_eq!(PolicyId::from_name(policy.name()), id);
        }
    }

    #[test]
    fn unknown_policy_id_falls_back_to_fcfs() {
        assert_eq!(PolicyId::from_id(200), PolicyId::Fcfs);
    }
}
