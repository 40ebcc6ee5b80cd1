/*!
 * Process Module
 * Process Control Block and the ready queue.
 */

pub mod pcb;
pub mod queue;

pub use pcb::{Pcb, ProcessSnapshot, ProcessState};
pub use queue::ReadyQueue;
