/*!
 * FCFS — First Come First Served
 * Dispatches whoever has waited longest in the ready queue; never
 * preempts.
 */

use super::Policy;
use crate::core::types::{Pid, NO_PID};
use crate::process::{Pcb, ReadyQueue};

#[derive(Debug, Default)]
pub struct FcfsPolicy;

impl Policy for FcfsPolicy {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn is_preemptive(&self) -> bool {
        false
    }

    fn select_next(&mut self, ready_queue: &ReadyQueue, _processes: &[Pcb]) -> Pid {
        ready_queue.peek().unwrap_or(NO_PID)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selects_front_of_ready_queue() {
        let mut q = ReadyQueue::new();
        q.enqueue(2);
        q.enqueue(0);
        q.enqueue(1);
        let mut policy = FcfsPolicy;
        assert_eq!(policy.select_next(&q, &[]), 2);
    }

    #[test]
    fn empty_queue_yields_no_pid() {
        let q = ReadyQueue::new();
        let mut policy = FcfsPolicy;
        assert_eq!(policy.select_next(&q, &[]), NO_PID);
    }
}
