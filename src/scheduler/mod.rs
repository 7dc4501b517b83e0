/*!
 * Scheduler Module
 * FCFS and round-robin scheduling over a process table
 */

pub mod fcfs;
pub mod round_robin;
pub mod simulation;
pub mod traits;
pub mod types;

// Re-export public API
pub use fcfs::{run_fcfs, Fcfs};
pub use round_robin::{next_runnable, run_round_robin, RoundRobin};
pub use simulation::RunOutcome;
pub use traits::Dispatcher;
pub use types::{Policy, Slice, TimeQuantum};
