/*!
 * Gantt Chart
 * Flat timeline of `(pid, start, end)` execution segments, with
 * adjacent same-pid ticks coalesced into a single segment rather than
 * emitted one row per tick.
 */

use crate::core::types::{Pid, NO_PID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GanttSegment {
    pub pid: Pid,
    pub start_time: u64,
    pub end_time: u64,
    pub core_id: u32,
}

#[derive(Debug, Default)]
pub struct GanttChart {
    segments: Vec<GanttSegment>,
}

impl GanttChart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.segments.clear();
    }

    pub fn segments(&self) -> &[GanttSegment] {
        &self.segments
    }

    /// `pid == NO_PID` records an idle tick.
    pub fn record(&mut self, pid: Pid, start: u64, end: u64) {
        if let Some(last) = self.segments.last_mut() {
            if last.pid == pid && last.end_time == start {
                last.end_time = end;
                return;
            }
        }
        self.segments.push(GanttSegment { pid, start_time: start, end_time: end, core_id: 0 });
    }
}
