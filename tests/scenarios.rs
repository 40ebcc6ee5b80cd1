//! End-to-end scenarios against known workloads, with hand-derived
//! expected finish times, wait times and context-switch counts.

use pretty_assertions::assert_eq;
use sched_sim::SimulationEngine;

fn run(policy: &str, quantum: u32, workload: &[(u64, u64, i64)]) -> SimulationEngine {
    let mut engine = SimulationEngine::new();
    engine.set_policy(policy);
    engine.set_time_quantum(quantum);
    for &(arrival, burst, priority) in workload {
        engine.add_process(arrival, burst, priority).expect("valid process");
    }
    engine.run_to_completion();
    engine
}

#[test]
fn fcfs_three_processes() {
    let engine = run("FCFS", 2, &[(0, 5, 0), (1, 3, 0), (2, 8, 0)]);
    let state = engine.get_state();

    assert!(state.is_completed);
    let finish: Vec<i64> = state.processes.iter().map(|p| p.finish_time).collect();
    assert_eq!(finish, vec![5, 8, 16]);

    let wait: Vec<u64> = state.processes.iter().map(|p| p.wait_time).collect();
    assert_eq!(wait, vec![0, 4, 6]);

    let turnaround: Vec<i64> = state.processes.iter().map(|p| p.turnaround_time).collect();
    assert_eq!(turnaround, vec![5, 7, 14]);

    assert_eq!(state.context_switches, 2);
    assert_eq!(state.metrics.cpu_utilization, 100.0);

    let avg_wait: f64 = wait.iter().sum::<u64>() as f64 / wait.len() as f64;
    assert!((avg_wait - 3.333).abs() < 0.01);
}

#[test]
fn sjf_picks_shortest_ready_job_each_time() {
    let engine = run("SJF", 2, &[(0, 7, 0), (2, 4, 0), (4, 1, 0), (5, 4, 0)]);
    let state = engine.get_state();

    assert!(state.is_completed);
    let finish: Vec<i64> = state.processes.iter().map(|p| p.finish_time).collect();
    // Dispatch order is P0 -> P2 (shortest at t=7) -> P1 (tie-break smallest pid) -> P3.
    assert_eq!(finish, vec![7, 12, 8, 16]);
}

#[test]
fn srtf_preempts_for_shorter_remaining_jobs() {
    let engine = run("SRTF", 2, &[(0, 7, 0), (2, 4, 0), (4, 1, 0), (5, 4, 0)]);
    let state = engine.get_state();

    assert!(state.is_completed);
    let finish: Vec<i64> = state.processes.iter().map(|p| p.finish_time).collect();
    assert_eq!(finish, vec![16, 7, 5, 11]);

    let turnaround: Vec<i64> = state.processes.iter().map(|p| p.turnaround_time).collect();
    let avg_turnaround: f64 = turnaround.iter().sum::<i64>() as f64 / turnaround.len() as f64;
    assert!((avg_turnaround - 7.0).abs() < 0.01);

    let wait: Vec<u64> = state.processes.iter().map(|p| p.wait_time).collect();
    let avg_wait: f64 = wait.iter().sum::<u64>() as f64 / wait.len() as f64;
    assert!((avg_wait - 3.0).abs() < 0.01);
}

#[test]
fn round_robin_quantum_two_matches_expected_gantt_prefix() {
    let engine = run("Round Robin", 2, &[(0, 5, 0), (1, 3, 0), (2, 8, 0), (3, 2, 0), (5, 4, 0)]);
    let state = engine.get_state();

    assert!(state.is_completed);
    assert_eq!(state.current_time, 22);

    let gantt = &state.gantt;
    assert_eq!((gantt[0].pid, gantt[0].start_time, gantt[0].end_time), (0, 0, 2));
    assert_eq!((gantt[1].pid, gantt[1].start_time, gantt[1].end_time), (1, 2, 4));
    assert_eq!((gantt[2].pid, gantt[2].start_time, gantt[2].end_time), (2, 4, 6));
    assert_eq!((gantt[3].pid, gantt[3].start_time, gantt[3].end_time), (0, 6, 8));
    assert_eq!((gantt[4].pid, gantt[4].start_time, gantt[4].end_time), (3, 8, 10));
    assert_eq!((gantt[5].pid, gantt[5].start_time, gantt[5].end_time), (1, 10, 11));
}

#[test]
fn priority_dispatches_lowest_value_first_among_ready() {
    let engine = run("Priority", 2, &[(0, 7, 2), (2, 4, 1), (4, 1, 3), (5, 4, 2)]);
    let state = engine.get_state();

    assert!(state.is_completed);
    let finish: Vec<i64> = state.processes.iter().map(|p| p.finish_time).collect();
    // P0 runs to 7; then P1 (priority 1) beats P3 (priority 2); P3 then beats P2 (priority 3).
    assert_eq!(finish, vec![7, 11, 16, 15]);
}

#[test]
fn mlfq_demotes_on_quantum_expiry_and_preempts_for_new_arrivals() {
    let engine = run("MLFQ", 2, &[(0, 20, 0), (3, 4, 0)]);
    let state = engine.get_state();

    assert!(state.is_completed);
    assert_eq!(state.processes[1].finish_time, 8);
    assert_eq!(state.processes[0].finish_time, 24);
    assert_eq!(state.context_switches, 2);
    assert_eq!(state.processes[0].mlfq_queue, 2);
}
