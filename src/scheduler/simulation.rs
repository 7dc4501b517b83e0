/*!
 * Simulation Driver
 * Runs one policy over a process table and records the dispatch timeline
 */

use super::fcfs::Fcfs;
use super::round_robin::RoundRobin;
use super::traits::Dispatcher;
use super::types::{Policy, Slice};
use crate::core::types::{Pid, Time};
use crate::process::ProcessTable;
use serde::Serialize;
use tracing::{debug, info, info_span};

/// Result of a completed run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct RunOutcome {
    pub policy: Policy,
    pub total_time: Time,
    pub timeline: Vec<Slice>,
}

impl RunOutcome {
    /// Process ids in dispatch order
    pub fn dispatch_order(&self) -> impl Iterator<Item = Pid> + '_ {
        self.timeline.iter().map(|s| s.pid)
    }
}

impl Policy {
    /// Build the dispatcher for this policy
    pub fn dispatcher(&self) -> Box<dyn Dispatcher> {
        match *self {
            Self::Fcfs => Box::new(Fcfs::new()),
            Self::RoundRobin { quantum } => Box::new(RoundRobin::new(quantum)),
        }
    }

    /// Run to completion, returning total elapsed time
    pub fn run(&self, table: &mut ProcessTable) -> Time {
        self.dispatcher().run(table)
    }

    /// Run to completion, keeping every dispatched slice
    pub fn simulate(&self, table: &mut ProcessTable) -> RunOutcome {
        let span = info_span!("simulate", policy = %self, processes = table.len());
        let _enter = span.enter();

        let mut dispatcher = self.dispatcher();
        let mut timeline = Vec::new();
        let mut total_time: Time = 0;

        while let Some(slice) = dispatcher.step(table) {
            debug!(
                pid = slice.pid,
                start = slice.start,
                duration = slice.duration,
                "Dispatched {}",
                dispatcher.name()
            );
            total_time += slice.duration;
            timeline.push(slice);
        }

        info!(
            total_time,
            slices = timeline.len(),
            average_wait = table.average_wait(),
            "Simulation complete"
        );

        RunOutcome {
            policy: *self,
            total_time,
            timeline,
        }
    }
}
