/*!
 * Algorithm Comparator
 * Runs the same workload through every scheduling policy and collects
 * the results side by side, for comparison dashboards and benchmarking.
 */

use crate::core::errors::{Result, SchedulerError};
use crate::core::types::Pid;
use crate::engine::SimulationEngine;
use crate::gantt::GanttSegment;
use crate::metrics::FinalMetrics;
use crate::policy::PolicyId;
use crate::process::ProcessSnapshot;
use std::collections::BTreeMap;

/// One process's static configuration, independent of any policy.
#[derive(Debug, Clone, Copy)]
pub struct ProcessConfig {
    pub arrival: u64,
    pub burst: u64,
    pub priority: i64,
}

impl ProcessConfig {
    pub fn new(arrival: u64, burst: u64, priority: i64) -> Self {
        Self { arrival, burst, priority }
    }
}

#[derive(Debug, Clone)]
pub struct ComparisonDetail {
    pub metrics: FinalMetrics,
    pub processes: Vec<ProcessSnapshot>,
    pub gantt: Vec<GanttSegment>,
}

/// Runs `workload` through every policy in [`PolicyId::ALL`], each on its
/// own freshly-constructed engine, and collects final metrics keyed by
/// policy name.
pub fn compare(workload: &[ProcessConfig], time_quantum: u32) -> Result<BTreeMap<&'static str, FinalMetrics>> {
    if workload.is_empty() {
        return Err(SchedulerError::EmptyWorkload);
    }

    let mut results = BTreeMap::new();
    for id in PolicyId::ALL {
        let mut engine = SimulationEngine::new();
        engine.set_policy_by_id(id as u8);
        engine.set_time_quantum(time_quantum);
        admit_workload(&mut engine, workload)?;
        engine.run_to_completion();
        results.insert(policy_display_name(id), engine.get_final_metrics());
    }
    Ok(results)
}

/// Same as [`compare`] but also retains per-process records and the
/// Gantt chart for each policy run.
pub fn compare_detailed(
    workload: &[ProcessConfig],
    time_quantum: u32,
) -> Result<BTreeMap<&'static str, ComparisonDetail>> {
    if workload.is_empty() {
        return Err(SchedulerError::EmptyWorkload);
    }

    let mut results = BTreeMap::new();
    for id in PolicyId::ALL {
        let mut engine = SimulationEngine::new();
        engine.set_policy_by_id(id as u8);
        engine.set_time_quantum(time_quantum);
        admit_workload(&mut engine, workload)?;
        engine.run_to_completion();

        let state = engine.get_state();
        results.insert(
            policy_display_name(id),
            ComparisonDetail {
                metrics: engine.get_final_metrics(),
                processes: state.processes,
                gantt: state.gantt,
            },
        );
    }
    Ok(results)
}

fn admit_workload(engine: &mut SimulationEngine, workload: &[ProcessConfig]) -> Result<Vec<Pid>> {
    workload
        .iter()
        .map(|cfg| engine.add_process(cfg.arrival, cfg.burst, cfg.priority))
        .collect()
}

fn policy_display_name(id: PolicyId) -> &'static str {
    match id {
        PolicyId::Fcfs => "FCFS",
        PolicyId::Sjf => "SJF",
        PolicyId::Srtf => "SRTF",
        PolicyId::Priority => "Priority",
        PolicyId::RoundRobin => "RR",
        PolicyId::Ljf => "LJF",
        PolicyId::Lrtf => "LRTF",
        PolicyId::Mlfq => "MLFQ",
    }
}
