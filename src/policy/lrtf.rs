/*!
 * LRTF — Longest Remaining Time First
 * Preemptive sibling of LJF: always runs whoever has the most remaining
 * work, preempting the running process the instant a longer-remaining
 * job becomes ready.
 */

use super::{select_max_by_key, Policy};
use crate::core::types::{Pid, NO_PID};
use crate::process::{Pcb, ReadyQueue};

#[derive(Debug, Default)]
pub struct LrtfPolicy;

impl Policy for LrtfPolicy {
    fn name(&self) -> &'static str {
        "LRTF"
    }

    fn is_preemptive(&self) -> bool {
        true
    }

    fn select_next(&mut self, ready_queue: &ReadyQueue, processes: &[Pcb]) -> Pid {
        select_max_by_key(ready_queue, processes, |p| p.remaining_time)
    }

    fn should_preempt(&self, running_pid: Pid, ready_queue: &ReadyQueue, processes: &[Pcb]) -> bool {
        if ready_queue.is_empty() {
            return false;
        }
        let longest = select_max_by_key(ready_queue, processes, |p| p.remaining_time);
        if longest == NO_PID {
            return false;
        }
        processes[longest as usize].remaining_time > processes[running_pid as usize].remaining_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preempts_when_a_longer_job_is_ready() {
        let processes = vec![Pcb::new(0, 0, 3, 0), Pcb::new(1, 2, 10, 0)];
        let mut q = ReadyQueue::new();
        q.enqueue(1);
        let policy = LrtfPolicy;
        assert!(policy.should_preempt(0, &q, &processes));
    }

    #[test]
    fn does_not_preempt_for_a_shorter_job() {
        let processes = vec![Pcb::new(0, 0, 10, 0), Pcb::new(1, 2, 3, 0)];
        let mut q = ReadyQueue::new();
        q.enqueue(1);
        let policy = LrtfPolicy;
        assert!(!policy.should_preempt(0, &q, &processes));
    }
}
