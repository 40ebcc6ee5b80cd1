/*!
 * Simulation Engine
 * Tick-driven CPU scheduler simulation. Each call to [`SimulationEngine::tick`]
 * advances the clock by exactly one unit, running an eight-step pipeline
 * that mirrors a timer-interrupt-driven OS scheduler:
 *
 *   1. Admit newly arrived processes (NEW → READY)
 *   2. Handle preemption (quantum expiry, policy-level preemption)
 *   3. Dispatch the next process if the CPU is idle
 *   4. Execute one tick on the running process
 *   5. Update waiting times for every READY process
 *   6. Record a per-tick metrics snapshot
 *   7. Advance the clock
 *   8. Check for overall completion
 *
 * Context switches are only counted when the CPU hands off between two
 * distinct processes, never on an idle → running transition.
 */

use crate::core::errors::{Result, SchedulerError};
use crate::core::types::{Pid, MAX_TICKS, NO_PID};
use crate::gantt::{GanttChart, GanttSegment};
use crate::kernel_log::{KernelEvent, KernelEventKind, KernelLog};
use crate::metrics::{FinalMetrics, MetricsCollector, MetricsSnapshot};
use crate::policy::{MlfqQueueSnapshot, Policy, PolicyId};
use crate::process::{Pcb, ProcessSnapshot, ProcessState, ReadyQueue};
use serde::{Deserialize, Serialize};

/// Full simulation state, as returned to callers after every tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineState {
    pub current_time: u64,
    pub running_pid: Pid,
    pub is_completed: bool,
    pub algorithm: &'static str,
    pub time_quantum: u32,
    pub context_switches: u64,
    pub processes: Vec<ProcessSnapshot>,
    pub gantt: Vec<GanttSegment>,
    pub ready_queue: Vec<Pid>,
    pub metrics_history: Vec<MetricsSnapshot>,
    pub kernel_log: Vec<KernelEvent>,
    pub metrics: FinalMetrics,
    #[serde(skip_serializing_if = "crate::core::serde::is_none")]
    pub mlfq_state: Option<MlfqQueueSnapshot>,
}

pub struct SimulationEngine {
    processes: Vec<Pcb>,
    ready_queue: ReadyQueue,
    policy: Box<dyn Policy>,
    current_time: u64,
    running_pid: Pid,
    time_quantum: u32,
    context_switches: u64,
    gantt: GanttChart,
    metrics: MetricsCollector,
    is_completed: bool,
    kernel_log: KernelLog,
    last_running_pid: Pid,
}

impl Default for SimulationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulationEngine {
    pub fn new() -> Self {
        Self {
            processes: Vec::new(),
            ready_queue: ReadyQueue::new(),
            policy: PolicyId::Fcfs.construct(),
            current_time: 0,
            running_pid: NO_PID,
            time_quantum: 2,
            context_switches: 0,
            gantt: GanttChart::new(),
            metrics: MetricsCollector::new(),
            is_completed: false,
            kernel_log: KernelLog::new(),
            last_running_pid: NO_PID,
        }
    }

    // ── Configuration ──

    pub fn set_policy_by_id(&mut self, id: u8) {
        self.policy = PolicyId::from_id(id).construct();
        log::info!("scheduler policy set to {}", self.policy.name());
    }

    pub fn set_policy(&mut self, name: &str) {
        self.policy = PolicyId::from_name(name).construct();
        log::info!("scheduler policy set to {}", self.policy.name());
    }

    /// Quanta below 1 are clamped, never rejected.
    pub fn set_time_quantum(&mut self, quantum: u32) {
        if quantum < 1 {
            log::warn!("time quantum {quantum} is below 1, clamping to 1");
        }
        self.time_quantum = quantum.max(1);
    }

    // ── Process Management ──

    pub fn add_process(&mut self, arrival: u64, burst: u64, priority: i64) -> Result<Pid> {
        if burst == 0 {
            return Err(SchedulerError::InvalidProcess(
                "burst_time must be at least 1 tick".to_string(),
            ));
        }
        let pid = self.processes.len() as Pid;
        self.processes.push(Pcb::new(pid, arrival, burst, priority));
        log::debug!("admitted process {pid} (arrival={arrival}, burst={burst}, priority={priority})");
        if self.is_completed {
            log::info!("reopening completed simulation for newly added process {pid}");
            self.is_completed = false;
        }
        Ok(pid)
    }

    pub fn process_count(&self) -> usize {
        self.processes.len()
    }

    pub fn clear(&mut self) {
        self.processes.clear();
        self.ready_queue.clear();
        self.gantt.clear();
        self.kernel_log.clear();
        self.current_time = 0;
        self.running_pid = NO_PID;
        self.last_running_pid = NO_PID;
        self.context_switches = 0;
        self.is_completed = false;
        self.metrics.reset();
        self.policy.reset();
    }

    /// Keep the configured processes but rewind all dynamic state.
    pub fn reset(&mut self) {
        self.ready_queue.clear();
        self.gantt.clear();
        self.kernel_log.clear();
        self.current_time = 0;
        self.running_pid = NO_PID;
        self.last_running_pid = NO_PID;
        self.context_switches = 0;
        self.is_completed = false;
        self.metrics.reset();
        self.policy.reset();
        for p in &mut self.processes {
            p.reset_dynamic();
        }
    }

    // ── Core Tick Loop ──

    /// Advance the simulation by one tick. Returns `true` if the
    /// simulation should keep running, `false` once it has completed (or
    /// there is nothing to run).
    pub fn tick(&mut self) -> bool {
        if self.is_completed || self.processes.is_empty() {
            return false;
        }

        self.admit_arrivals();
        self.handle_preemption();
        if self.running_pid == NO_PID {
            self.dispatch_next();
        }
        self.execute_tick();
        self.update_waiting_times();

        self.metrics.record_tick(
            self.current_time,
            self.running_pid,
            self.ready_queue.len(),
            self.context_switches,
            &self.processes,
        );

        self.current_time += 1;
        self.check_completion();

        !self.is_completed
    }

    pub fn run_to_completion(&mut self) {
        while self.tick() && self.current_time < MAX_TICKS {}
    }

    fn log(&mut self, kind: KernelEventKind) {
        self.kernel_log.push(self.current_time, kind);
    }

    fn admit_arrivals(&mut self) {
        let now = self.current_time;
        for p in &mut self.processes {
            if p.state == ProcessState::New && p.arrival_time <= now {
                p.state = ProcessState::Ready;
                self.ready_queue.enqueue(p.pid);
                self.kernel_log.push(now, KernelEventKind::Arrive { pid: p.pid });
            }
        }
    }

    fn handle_preemption(&mut self) {
        let running = self.running_pid;
        if running == NO_PID {
            return;
        }

        if self.policy.uses_quantum() {
            let quantum = self.policy.quantum_for_pid(running, self.time_quantum);
            if self.processes[running as usize].quantum_used >= quantum {
                // Only feedback-queue policies track a per-pid level; gate the
                // demotion call and its log entry on that, so quantum-based
                // policies with no real demotion (Round Robin) never emit one.
                if self.policy.mlfq_level(running).is_some() {
                    self.policy.on_quantum_expire(running);
                    self.log(KernelEventKind::Demote { pid: running });
                }
                let level = self.policy.mlfq_level(running);

                let proc = &mut self.processes[running as usize];
                proc.state = ProcessState::Ready;
                proc.quantum_used = 0;
                if let Some(level) = level {
                    proc.mlfq_level = level;
                }
                self.ready_queue.enqueue(running);
                self.log(KernelEventKind::Preempt { pid: running, reason: "quantum" });
                log::debug!("process {running} preempted at tick {} (quantum expired)", self.current_time);
                self.last_running_pid = running;
                self.running_pid = NO_PID;
                return;
            }
        }

        if self.policy.is_preemptive()
            && self.policy.should_preempt(running, &self.ready_queue, &self.processes)
        {
            self.processes[running as usize].state = ProcessState::Ready;
            self.ready_queue.enqueue(running);
            self.log(KernelEventKind::Preempt { pid: running, reason: "policy" });
            log::debug!("process {running} preempted at tick {} (policy decision)", self.current_time);
            self.last_running_pid = running;
            self.running_pid = NO_PID;
        }
    }

    fn dispatch_next(&mut self) {
        let next_pid = self.policy.select_next(&self.ready_queue, &self.processes);
        if next_pid == NO_PID {
            return;
        }

        if self.last_running_pid != NO_PID && self.last_running_pid != next_pid {
            self.context_switches += 1;
            self.log(KernelEventKind::ContextSwitch { from_pid: self.last_running_pid, to_pid: next_pid });
        }

        self.ready_queue.remove(next_pid);
        self.running_pid = next_pid;

        let now = self.current_time;
        let uses_quantum = self.policy.uses_quantum();
        let level = self.policy.mlfq_level(next_pid);
        let proc = &mut self.processes[next_pid as usize];
        proc.state = ProcessState::Running;
        if let Some(level) = level {
            proc.mlfq_level = level;
        }
        self.log(KernelEventKind::Dispatch { pid: next_pid });
        log::debug!("process {next_pid} dispatched at tick {now}");

        let proc = &mut self.processes[next_pid as usize];
        if proc.start_time == -1 {
            proc.start_time = now as i64;
            proc.response_time = now as i64 - proc.arrival_time as i64;
        }
        if uses_quantum {
            proc.quantum_used = 0;
        }
    }

    fn execute_tick(&mut self) {
        let now = self.current_time;
        if self.running_pid != NO_PID {
            let pid = self.running_pid;
            let proc = &mut self.processes[pid as usize];
            proc.execute_tick();
            self.gantt.record(pid, now, now + 1);

            if proc.remaining_time == 0 {
                proc.state = ProcessState::Terminated;
                proc.finish_time = (now + 1) as i64;
                proc.turnaround_time = proc.finish_time - proc.arrival_time as i64;
                self.log(KernelEventKind::Complete { pid });
                self.last_running_pid = pid;
                self.running_pid = NO_PID;
            }
        } else {
            self.gantt.record(NO_PID, now, now + 1);
            self.log(KernelEventKind::Idle);
            // An idle tick breaks Gantt adjacency: the next dispatch must not
            // be counted as a context switch from whoever ran before the gap.
            self.last_running_pid = NO_PID;
        }
    }

    fn update_waiting_times(&mut self) {
        for pid in self.ready_queue.iter() {
            self.processes[pid as usize].wait_time += 1;
        }
    }

    fn check_completion(&mut self) {
        if !self.processes.is_empty() && self.processes.iter().all(|p| p.is_terminated()) {
            self.is_completed = true;
            self.log(KernelEventKind::SimulationComplete);
        }
    }

    // ── State Serialization ──

    pub fn get_state(&self) -> EngineState {
        let metrics = if self.is_completed {
            self.metrics.final_metrics(&self.processes, self.context_switches)
        } else {
            FinalMetrics::empty()
        };

        EngineState {
            current_time: self.current_time,
            running_pid: self.running_pid,
            is_completed: self.is_completed,
            algorithm: self.policy.name(),
            time_quantum: self.time_quantum,
            context_switches: self.context_switches,
            processes: self.processes.iter().map(Pcb::to_snapshot).collect(),
            gantt: self.gantt.segments().to_vec(),
            ready_queue: self.ready_queue.as_vec(),
            metrics_history: self.metrics.snapshots().to_vec(),
            kernel_log: self.kernel_log.tail().to_vec(),
            metrics,
            mlfq_state: self.policy.queue_state(&self.ready_queue),
        }
    }

    pub fn get_final_metrics(&self) -> FinalMetrics {
        self.metrics.final_metrics(&self.processes, self.context_switches)
    }

    pub fn processes(&self) -> &[Pcb] {
        &self.processes
    }

    pub fn is_completed(&self) -> bool {
        self.is_completed
    }

    pub fn current_time(&self) -> u64 {
        self.current_time
    }
}
