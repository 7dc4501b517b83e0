/*!
 * Report Module
 * Final per-process state, average wait and total time in text or JSON
 */

use crate::core::limits::{AVERAGE_WAIT_PRECISION, PCB_SEPARATOR};
use crate::core::types::{Pid, Time};
use crate::process::ProcessTable;
use crate::scheduler::{Policy, RunOutcome, Slice};
use serde::{Serialize, Serializer};
use std::fmt;

/// Emit the average at display precision
fn serialize_average<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let scale = 10f64.powi(AVERAGE_WAIT_PRECISION as i32);
    serializer.serialize_f64((value * scale).round() / scale)
}

/// Final state of one process
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ProcessRow {
    pub pid: Pid,
    pub burst: Time,
    pub burst_remaining: Time,
    pub wait: Time,
}

/// Summary of one completed run
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct Report {
    pub policy: Policy,
    pub processes: Vec<ProcessRow>,
    pub total_time: Time,
    pub total_wait: Time,
    #[serde(serialize_with = "serialize_average")]
    pub average_wait: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeline: Option<Vec<Slice>>,
}

impl Report {
    /// Build a report from the final table state
    pub fn new(table: &ProcessTable, outcome: RunOutcome) -> Self {
        let processes = table
            .iter()
            .map(|pcb| ProcessRow {
                pid: pcb.id(),
                burst: pcb.burst(),
                burst_remaining: pcb.burst_remaining(),
                wait: pcb.wait(),
            })
            .collect();

        Self {
            policy: outcome.policy,
            processes,
            total_time: outcome.total_time,
            total_wait: table.total_wait(),
            average_wait: table.average_wait(),
            timeline: Some(outcome.timeline),
        }
    }

    /// Drop the dispatch timeline from the output
    pub fn without_timeline(mut self) -> Self {
        self.timeline = None;
        self
    }

    /// Average wait rounded for display
    pub fn average_wait_display(&self) -> String {
        format!("{:.*}", AVERAGE_WAIT_PRECISION, self.average_wait)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Using {}", self.policy)?;
        writeln!(f)?;

        for row in &self.processes {
            writeln!(f, "Accepted P{}: Burst {}", row.pid, row.burst)?;
        }
        writeln!(f)?;

        for row in &self.processes {
            writeln!(f, "PCB {}", row.pid)?;
            writeln!(f, "{}", PCB_SEPARATOR)?;
            writeln!(f, "Burst remaining: {}", row.burst_remaining)?;
            writeln!(f, "Current wait: {}", row.wait)?;
            writeln!(f, "{}", PCB_SEPARATOR)?;
            writeln!(f)?;
        }

        if let Some(timeline) = &self.timeline {
            writeln!(f, "Timeline:")?;
            for slice in timeline {
                writeln!(f, "[{}, {}) P{}", slice.start, slice.end(), slice.pid)?;
            }
            writeln!(f)?;
        }

        writeln!(f, "Total time: {}", self.total_time)?;
        writeln!(f, "Average wait time: {}", self.average_wait_display())
    }
}
