/*!
 * CPU Scheduling Simulator Library
 * Process table, FCFS and round-robin engines, and run reporting
 */

pub mod cli;
pub mod core;
pub mod monitoring;
pub mod process;
pub mod report;
pub mod scheduler;

// Re-exports
pub use crate::core::{ErrorKind, Pid, SerializableError, SimError, SimResult, Time};
pub use cli::{Cli, OutputFormat};
pub use monitoring::init_tracing;
pub use process::{Pcb, ProcessTable};
pub use report::{ProcessRow, Report};
pub use scheduler::{
    next_runnable, run_fcfs, run_round_robin, Dispatcher, Fcfs, Policy, RoundRobin, RunOutcome,
    Slice, TimeQuantum,
};
