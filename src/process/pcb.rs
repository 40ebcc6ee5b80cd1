/*!
 * Process Control Block
 * Per-process static configuration and dynamic scheduling state.
 */

use crate::core::types::{Pid, Priority};
use serde::{Deserialize, Serialize};

/// Process lifecycle state, wire-stable (see `ProcessSnapshot::state`).
///
/// `Waiting` is reserved for I/O-burst modelling, which this engine does
/// not simulate — the engine itself never constructs it, but the wire
/// contract commits to five codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum ProcessState {
    New = 0,
    Ready = 1,
    Running = 2,
    Waiting = 3,
    Terminated = 4,
}

impl ProcessState {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::New => "NEW",
            Self::Ready => "READY",
            Self::Running => "RUNNING",
            Self::Waiting => "WAITING",
            Self::Terminated => "TERMINATED",
        }
    }
}

/// Process Control Block.
///
/// Static fields are set once at `add_process` time. Dynamic fields are
/// mutated exclusively by the simulation engine's tick loop.
#[derive(Debug, Clone)]
pub struct Pcb {
    // -- static --
    pub pid: Pid,
    pub arrival_time: u64,
    pub burst_time: u64,
    pub priority: Priority,

    // -- dynamic --
    pub remaining_time: u64,
    pub state: ProcessState,
    pub start_time: i64,
    pub finish_time: i64,
    pub wait_time: u64,
    pub response_time: i64,
    pub turnaround_time: i64,
    pub quantum_used: u32,
    pub mlfq_level: u8,
}

impl Pcb {
    pub fn new(pid: Pid, arrival_time: u64, burst_time: u64, priority: Priority) -> Self {
        Self {
            pid,
            arrival_time,
            burst_time,
            priority,
            remaining_time: burst_time,
            state: ProcessState::New,
            start_time: -1,
            finish_time: -1,
            wait_time: 0,
            response_time: -1,
            turnaround_time: 0,
            quantum_used: 0,
            mlfq_level: 0,
        }
    }

    /// Restore dynamic fields to their just-created values, keeping the
    /// static configuration. Used by `SimulationEngine::reset`.
    pub fn reset_dynamic(&mut self) {
        self.remaining_time = self.burst_time;
        self.state = ProcessState::New;
        self.start_time = -1;
        self.finish_time = -1;
        self.wait_time = 0;
        self.response_time = -1;
        self.turnaround_time = 0;
        self.quantum_used = 0;
        self.mlfq_level = 0;
    }

    pub fn is_terminated(&self) -> bool {
        self.state == ProcessState::Terminated
    }

    pub fn has_started(&self) -> bool {
        self.start_time != -1
    }

    /// Execute exactly one CPU tick. Caller is responsible for driving
    /// the state transition to `Terminated` when `remaining_time` hits 0.
    pub fn execute_tick(&mut self) {
        self.remaining_time -= 1;
        self.quantum_used += 1;
    }

    pub fn to_snapshot(&self) -> ProcessSnapshot {
        ProcessSnapshot {
            pid: self.pid,
            arrival_time: self.arrival_time,
            burst_time: self.burst_time,
            priority: self.priority,
            remaining_time: self.remaining_time,
            state: self.state as u8,
            state_name: self.state.as_str(),
            start_time: self.start_time,
            finish_time: self.finish_time,
            wait_time: self.wait_time,
            response_time: self.response_time,
            turnaround_time: self.turnaround_time,
            quantum_used: self.quantum_used,
            mlfq_queue: self.mlfq_level,
        }
    }
}

/// Wire-stable snapshot of a process, for `get_state`/comparator output.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessSnapshot {
    pub pid: Pid,
    pub arrival_time: u64,
    pub burst_time: u64,
    pub priority: Priority,
    pub remaining_time: u64,
    pub state: u8,
    pub state_name: &'static str,
    pub start_time: i64,
    pub finish_time: i64,
    pub wait_time: u64,
    pub response_time: i64,
    pub turnaround_time: i64,
    #[serde(skip_serializing_if = "crate::core::serde::is_zero_u32")]
    pub quantum_used: u32,
    pub mlfq_queue: u8,
}
