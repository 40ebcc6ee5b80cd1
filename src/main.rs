/*!
 * sched-sim - Demo Entry Point
 *
 * Runs a small sample workload through the simulation engine to
 * completion and prints the resulting metrics and Gantt chart. Intended
 * as a smoke test and a usage example, not a full CLI.
 */

use log::info;
use sched_sim::SimulationEngine;

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("sched-sim starting...");
    info!("================================================");

    let mut engine = SimulationEngine::new();
    engine.set_policy("Round Robin");
    engine.set_time_quantum(2);

    info!("Admitting sample workload...");
    engine.add_process(0, 5, 1).expect("valid process");
    engine.add_process(1, 3, 2).expect("valid process");
    engine.add_process(2, 8, 0).expect("valid process");
    engine.add_process(3, 2, 3).expect("valid process");

    info!("Running to completion...");
    engine.run_to_completion();

    let state = engine.get_state();
    info!(
        "Completed at tick {} with {} context switches",
        state.current_time, state.context_switches
    );

    println!("algorithm:        {}", state.algorithm);
    println!("total ticks:      {}", state.current_time);
    println!("context switches: {}", state.context_switches);
    println!(
        "cpu utilization:  {:.2}%",
        state.metrics.cpu_utilization
    );
    println!("avg wait time:    {:.2}", state.metrics.avg_wait_time);
    println!("avg turnaround:   {:.2}", state.metrics.avg_turnaround_time);
    println!("avg response:     {:.2}", state.metrics.avg_response_time);

    println!();
    println!("gantt chart:");
    for segment in &state.gantt {
        let label = if segment.pid < 0 { "idle".to_string() } else { format!("P{}", segment.pid) };
        println!("  [{:>4}, {:>4}) {}", segment.start_time, segment.end_time, label);
    }

    // The façade consumes `EngineState` as JSON; set SCHED_SIM_JSON=1 to
    // preview that wire payload alongside the human-readable summary above.
    if std::env::var("SCHED_SIM_JSON").is_ok() {
        match serde_json::to_string_pretty(&state) {
            Ok(json) => {
                println!();
                println!("engine state (json):");
                println!("{json}");
            }
            Err(e) => log::warn!("failed to serialize engine state: {e}"),
        }
    }
}
