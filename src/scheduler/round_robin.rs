/*!
 * Round Robin
 * Fixed-quantum rotation anchored at process 0 with in-order wrap-around
 */

use super::traits::Dispatcher;
use super::types::{Slice, TimeQuantum};
use crate::core::limits::RR_ANCHOR_PID;
use crate::core::types::{Pid, Time};
use crate::process::{Pcb, ProcessTable};

/// Find the next runnable process after `current`
///
/// Scans `current + 1, current + 2, ...` modulo the table length, ending
/// with `current` itself. Returns `None` once a full cycle finds nothing.
pub fn next_runnable(table: &ProcessTable, current: Pid) -> Option<Pid> {
    let n = table.len();
    (1..=n)
        .map(|offset| (current + offset) % n)
        .find(|&pid| table[pid].is_runnable())
}

/// Round-robin dispatcher
///
/// The first selection is always process 0 when it is runnable; every later
/// selection is the next runnable id in increasing order with wrap-around.
#[derive(Debug, Clone)]
pub struct RoundRobin {
    quantum: TimeQuantum,
    current: Option<Pid>,
}

impl RoundRobin {
    pub fn new(quantum: TimeQuantum) -> Self {
        Self {
            quantum,
            current: None,
        }
    }

    #[inline]
    pub fn quantum(&self) -> TimeQuantum {
        self.quantum
    }

    /// Process most recently selected, if any
    #[inline]
    pub fn current(&self) -> Option<Pid> {
        self.current
    }

    fn select(&self, table: &ProcessTable) -> Option<Pid> {
        match self.current {
            None if table.get(RR_ANCHOR_PID).is_some_and(Pcb::is_runnable) => Some(RR_ANCHOR_PID),
            None => next_runnable(table, RR_ANCHOR_PID),
            Some(current) => next_runnable(table, current),
        }
    }
}

impl Dispatcher for RoundRobin {
    fn step(&mut self, table: &mut ProcessTable) -> Option<Slice> {
        let pid = self.select(table)?;
        let run_length = self.quantum.get().min(table[pid].burst_remaining());

        let start = table.elapsed();
        let duration = table.advance(pid, run_length);
        self.current = Some(pid);

        Some(Slice {
            pid,
            start,
            duration,
        })
    }

    fn name(&self) -> &'static str {
        "rr"
    }
}

/// Run round-robin until every process finishes, returning total elapsed time
pub fn run_round_robin(table: &mut ProcessTable, quantum: TimeQuantum) -> Time {
    RoundRobin::new(quantum).run(table)
}
