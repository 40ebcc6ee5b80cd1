/*!
 * MLFQ — Multi-Level Feedback Queue
 * Three levels, each a smaller round robin than the last:
 *   level 0 — quantum 4
 *   level 1 — quantum 8
 *   level 2 — FCFS (unbounded quantum)
 * New processes enter at level 0. Exhausting a quantum without
 * finishing demotes a process one level; a process is preempted the
 * instant a higher (numerically lower) level becomes ready.
 */

use super::Policy;
use crate::core::types::{Pid, NO_PID};
use crate::process::{Pcb, ReadyQueue};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

const QUANTUMS: [u32; 3] = [4, 8, u32::MAX];
const MAX_LEVEL: u8 = 2;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MlfqLevelSnapshot {
    pub level: u8,
    pub quantum: Option<u32>,
    pub pids: Vec<Pid>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MlfqQueueSnapshot {
    pub queues: Vec<MlfqLevelSnapshot>,
}

#[derive(Debug, Default)]
pub struct MlfqPolicy {
    process_levels: HashMap<Pid, u8>,
}

impl MlfqPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    fn level_of(&self, pid: Pid) -> u8 {
        *self.process_levels.get(&pid).unwrap_or(&0)
    }
}

impl Policy for MlfqPolicy {
    fn name(&self) -> &'static str {
        "MLFQ"
    }

    fn is_preemptive(&self) -> bool {
        true
    }

    fn uses_quantum(&self) -> bool {
        true
    }

    fn select_next(&mut self, ready_queue: &ReadyQueue, _processes: &[Pcb]) -> Pid {
        if ready_queue.is_empty() {
            return NO_PID;
        }
        for pid in ready_queue.iter() {
            self.process_levels.entry(pid).or_insert(0);
        }
        let mut best: Option<(u8, Pid)> = None;
        for pid in ready_queue.iter() {
            let level = self.level_of(pid);
            best = Some(match best {
                None => (level, pid),
                Some((bl, bp)) if level < bl || (level == bl && pid < bp) => (level, pid),
                Some(prev) => prev,
            });
        }
        best.map(|(_, pid)| pid).unwrap_or(NO_PID)
    }

    fn should_preempt(&self, running_pid: Pid, ready_queue: &ReadyQueue, _processes: &[Pcb]) -> bool {
        if ready_queue.is_empty() {
            return false;
        }
        let running_level = self.level_of(running_pid);
        ready_queue.iter().any(|pid| self.level_of(pid) < running_level)
    }

    fn quantum_for_pid(&self, pid: Pid, _engine_quantum: u32) -> u32 {
        QUANTUMS[self.level_of(pid) as usize]
    }

    fn on_quantum_expire(&mut self, pid: Pid) {
        let current = self.level_of(pid);
        self.process_levels.insert(pid, (current + 1).min(MAX_LEVEL));
    }

    fn mlfq_level(&self, pid: Pid) -> Option<u8> {
        Some(self.level_of(pid))
    }

    fn queue_state(&self, ready_queue: &ReadyQueue) -> Option<MlfqQueueSnapshot> {
        let mut queues: [Vec<Pid>; 3] = [Vec::new(), Vec::new(), Vec::new()];
        for pid in ready_queue.iter() {
            queues[self.level_of(pid) as usize].push(pid);
        }
        Some(MlfqQueueSnapshot {
            queues: vec![
                MlfqLevelSnapshot { level: 0, quantum: Some(4), pids: queues[0].clone() },
                MlfqLevelSnapshot { level: 1, quantum: Some(8), pids: queues[1].clone() },
                MlfqLevelSnapshot { level: 2, quantum: None, pids: queues[2].clone() },
            ],
        })
    }

    fn reset(&mut self) {
        self.process_levels.clear();
    }
}
