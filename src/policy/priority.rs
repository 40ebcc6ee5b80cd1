/*!
 * Priority Scheduling (non-preemptive)
 * Dispatches the ready process with the smallest priority value (lower
 * value = higher priority).
 */

use super::{select_min_by_key, Policy};
use crate::core::types::Pid;
use crate::process::{Pcb, ReadyQueue};

#[derive(Debug, Default)]
pub struct PriorityPolicy;

impl Policy for PriorityPolicy {
    fn name(&self) -> &'static str {
        "Priority"
    }

    fn is_preemptive(&self) -> bool {
        false
    }

    fn select_next(&mut self, ready_queue: &ReadyQueue, processes: &[Pcb]) -> Pid {
        select_min_by_key(ready_queue, processes, |p| p.priority)
    }
}
