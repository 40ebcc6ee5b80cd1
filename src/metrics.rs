/*!
 * Metrics Collector
 * Records a per-tick snapshot of system metrics for time-series
 * visualization, and derives a final summary once a run completes.
 * All per-tick metrics are computed incrementally; nothing is
 * recomputed from scratch after the fact.
 */

use crate::core::types::{Pid, NO_PID};
use crate::process::{Pcb, ProcessState};
use serde::{Deserialize, Serialize};

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSnapshot {
    pub tick: u64,
    pub running_pid: Pid,
    #[serde(skip_serializing_if = "crate::core::serde::is_zero_usize")]
    pub ready_queue_length: usize,
    pub cpu_utilization: f64,
    pub throughput: f64,
    #[serde(skip_serializing_if = "crate::core::serde::is_zero_u64")]
    pub context_switches: u64,
    pub avg_wait_time: f64,
    pub avg_turnaround_time: f64,
    pub avg_response_time: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalMetrics {
    pub avg_wait_time: f64,
    pub avg_turnaround_time: f64,
    pub avg_response_time: f64,
    pub cpu_utilization: f64,
    pub throughput: f64,
    pub context_switches: u64,
    pub total_idle_time: i64,
    pub total_execution_time: i64,
}

impl FinalMetrics {
    pub fn empty() -> Self {
        Self {
            avg_wait_time: 0.0,
            avg_turnaround_time: 0.0,
            avg_response_time: 0.0,
            cpu_utilization: 0.0,
            throughput: 0.0,
            context_switches: 0,
            total_idle_time: 0,
            total_execution_time: 0,
        }
    }
}

#[derive(Debug, Default)]
pub struct MetricsCollector {
    tick_snapshots: Vec<MetricsSnapshot>,
    busy_ticks: u64,
    total_completed: usize,
}

impl MetricsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.tick_snapshots.clear();
        self.busy_ticks = 0;
        self.total_completed = 0;
    }

    pub fn snapshots(&self) -> &[MetricsSnapshot] {
        &self.tick_snapshots
    }

    /// Called at the end of every `SimulationEngine::tick`.
    pub fn record_tick(
        &mut self,
        current_time: u64,
        running_pid: Pid,
        ready_queue_length: usize,
        context_switches: u64,
        processes: &[Pcb],
    ) {
        if running_pid != NO_PID {
            self.busy_ticks += 1;
        }

        let total_ticks = current_time + 1;
        let completed: Vec<&Pcb> = processes.iter().filter(|p| p.is_terminated()).collect();
        self.total_completed = completed.len();
        let started: Vec<&Pcb> = processes.iter().filter(|p| p.has_started()).collect();

        let n = processes.len().max(1) as f64;
        let avg_wait = if processes.is_empty() {
            0.0
        } else {
            round_to(processes.iter().map(|p| p.wait_time as f64).sum::<f64>() / n, 2)
        };
        let avg_tat = if completed.is_empty() {
            0.0
        } else {
            round_to(
                completed.iter().map(|p| p.turnaround_time as f64).sum::<f64>() / completed.len() as f64,
                2,
            )
        };
        let avg_resp = if started.is_empty() {
            0.0
        } else {
            round_to(
                started.iter().map(|p| p.response_time as f64).sum::<f64>() / started.len() as f64,
                2,
            )
        };

        self.tick_snapshots.push(MetricsSnapshot {
            tick: current_time,
            running_pid,
            ready_queue_length,
            cpu_utilization: round_to(self.busy_ticks as f64 / total_ticks.max(1) as f64 * 100.0, 2),
            throughput: round_to(self.total_completed as f64 / total_ticks.max(1) as f64, 4),
            context_switches,
            avg_wait_time: avg_wait,
            avg_turnaround_time: avg_tat,
            avg_response_time: avg_resp,
        });
    }

    pub fn final_metrics(&self, processes: &[Pcb], context_switches: u64) -> FinalMetrics {
        if processes.is_empty() {
            return FinalMetrics::empty();
        }

        let n = processes.len() as f64;
        let completed: Vec<&Pcb> = processes.iter().filter(|p| p.state == ProcessState::Terminated).collect();
        let started: Vec<&Pcb> = processes.iter().filter(|p| p.has_started()).collect();

        let total_burst: u64 = processes.iter().map(|p| p.burst_time).sum();
        let max_finish = completed.iter().map(|p| p.finish_time).max().unwrap_or(0);
        let min_arrival = processes.iter().map(|p| p.arrival_time).min().unwrap_or(0) as i64;
        let total_time = if max_finish > min_arrival { max_finish - min_arrival } else { 1 };

        FinalMetrics {
            avg_wait_time: round_to(processes.iter().map(|p| p.wait_time as f64).sum::<f64>() / n, 2),
            avg_turnaround_time: if completed.is_empty() {
                0.0
            } else {
                round_to(
                    completed.iter().map(|p| p.turnaround_time as f64).sum::<f64>() / completed.len() as f64,
                    2,
                )
            },
            avg_response_time: if started.is_empty() {
                0.0
            } else {
                round_to(
                    started.iter().map(|p| p.response_time as f64).sum::<f64>() / started.len() as f64,
                    2,
                )
            },
            cpu_utilization: round_to(total_burst as f64 / total_time as f64 * 100.0, 2),
            throughput: round_to(completed.len() as f64 / total_time as f64, 4),
            context_switches,
            total_idle_time: total_time - total_burst as i64,
            total_execution_time: total_time,
        }
    }
}
