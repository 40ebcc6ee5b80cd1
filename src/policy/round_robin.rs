/*!
 * Round Robin
 * Dispatches in arrival order like FCFS, but every process is capped to
 * a fixed time quantum: the engine preempts and re-enqueues whoever
 * exhausts it at the back of the ready queue.
 */

use super::Policy;
use crate::core::types::{Pid, NO_PID};
use crate::process::{Pcb, ReadyQueue};

#[derive(Debug, Default)]
pub struct RoundRobinPolicy;

impl Policy for RoundRobinPolicy {
    fn name(&self) -> &'static str {
        "Round Robin"
    }

    fn is_preemptive(&self) -> bool {
        true
    }

    fn uses_quantum(&self) -> bool {
        true
    }

    fn select_next(&mut self, ready_queue: &ReadyQueue, _processes: &[Pcb]) -> Pid {
        ready_queue.peek().unwrap_or(NO_PID)
    }
}
