/*!
 * LJF — Longest Job First
 * Non-preemptive mirror of SJF: dispatches the ready process with the
 * largest total burst time.
 */

use super::{select_max_by_key, Policy};
use crate::core::types::Pid;
use crate::process::{Pcb, ReadyQueue};

#[derive(Debug, Default)]
pub struct LjfPolicy;

impl Policy for LjfPolicy {
    fn name(&self) -> &'static str {
        "LJF"
    }

    fn is_preemptive(&self) -> bool {
        false
    }

    fn select_next(&mut self, ready_queue: &ReadyQueue, processes: &[Pcb]) -> Pid {
        select_max_by_key(ready_queue, processes, |p| p.burst_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selects_longest_burst() {
        let processes = vec![
            Pcb::new(0, 0, 7, 0),
            Pcb::new(1, 0, 12, 0),
            Pcb::new(2, 0, 1, 0),
        ];
        let mut q = ReadyQueue::new();
        q.enqueue(0);
        q.enqueue(1);
        q.enqueue(2);
        let mut policy = LjfPolicy;
        assert_eq!(policy.select_next(&q, &processes), 1);
    }

    #[test]
    fn ties_break_on_smallest_pid() {
        let processes = vec![Pcb::new(0, 0, 4, 0), Pcb::new(1, 0, 4, 0)];
        let mut q = ReadyQueue::new();
        q.enqueue(1);
        q.enqueue(0);
        let mut policy = LjfPolicy;
        assert_eq!(policy.select_next(&q, &processes), 0);
    }
}
