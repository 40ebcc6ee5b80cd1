/*!
 * Kernel Event Log
 * A tick-stamped trace of scheduling decisions (arrivals, dispatches,
 * preemptions, completions, ...), kept for live inspection. The engine
 * retains the full history internally but only ever exposes the most
 * recent [`KERNEL_LOG_TAIL`] entries externally.
 */

use crate::core::types::{Pid, KERNEL_LOG_TAIL};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum KernelEventKind {
    Arrive { pid: Pid },
    Dispatch { pid: Pid },
    Preempt { pid: Pid, reason: &'static str },
    ContextSwitch { from_pid: Pid, to_pid: Pid },
    Complete { pid: Pid },
    Demote { pid: Pid },
    Idle,
    SimulationComplete,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KernelEvent {
    pub tick: u64,
    #[serde(flatten)]
    pub kind: KernelEventKind,
}

#[derive(Debug, Default)]
pub struct KernelLog {
    entries: Vec<KernelEvent>,
}

impl KernelLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, tick: u64, kind: KernelEventKind) {
        self.entries.push(KernelEvent { tick, kind });
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The last [`KERNEL_LOG_TAIL`] entries, oldest first.
    pub fn tail(&self) -> &[KernelEvent] {
        let start = self.entries.len().saturating_sub(KERNEL_LOG_TAIL);
        &self.entries[start..]
    }

    pub fn all(&self) -> &[KernelEvent] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tail_truncates_to_the_configured_limit() {
        let mut log = KernelLog::new();
        for tick in 0..(KERNEL_LOG_TAIL as u64 + 10) {
            log.push(tick, KernelEventKind::Idle);
        }
        assert_eq!(log.tail().len(), KERNEL_LOG_TAIL);
        assert_eq!(log.all().len(), KERNEL_LOG_TAIL + 10);
        assert_eq!(log.tail().first().unwrap().tick, 10);
    }

    #[test]
    fn tail_on_short_log_returns_everything() {
        let mut log = KernelLog::new();
        log.push(0, KernelEventKind::Arrive { pid: 0 });
        log.push(1, KernelEventKind::Dispatch { pid: 0 });
        assert_eq!(log.tail().len(), 2);
    }
}
