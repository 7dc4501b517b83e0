/*!
 * Process Table
 * Ordered PCB storage and the single state-mutating advance primitive
 */

use super::pcb::Pcb;
use crate::core::errors::SimError;
use crate::core::limits::MIN_BURST;
use crate::core::types::{Pid, SimResult, Time};
use std::ops::Index;
use tracing::{debug, trace, warn};

/// Process table owned by exactly one simulation run
///
/// Position in the table is the process id. Length is fixed at
/// construction and always at least one.
#[derive(Debug, Clone)]
pub struct ProcessTable {
    pcbs: Vec<Pcb>,
    elapsed: Time,
    total_work: Time,
}

impl ProcessTable {
    /// Build a table from burst lengths
    ///
    /// Validation happens before anything is allocated, so a rejected input
    /// never yields a partially built table.
    pub fn from_bursts(bursts: &[i64]) -> SimResult<Self> {
        if bursts.is_empty() {
            return Err(SimError::EmptyBurstList);
        }

        let mut total_work: Time = 0;
        for (pid, &value) in bursts.iter().enumerate() {
            if value < MIN_BURST {
                return Err(SimError::NonPositiveBurst { pid, value });
            }
            total_work = total_work
                .checked_add(value as Time)
                .ok_or(SimError::WorkOverflow)?;
        }

        // Each time unit charges wait to at most `len - 1` processes, so this
        // bounds the total wait as well as every per-process wait.
        total_work
            .checked_mul((bursts.len() - 1) as Time)
            .ok_or(SimError::WorkOverflow)?;

        let pcbs = bursts
            .iter()
            .enumerate()
            .map(|(pid, &burst)| Pcb::new(pid, burst as Time))
            .collect::<Vec<_>>();

        debug!(processes = pcbs.len(), total_work, "Process table created");

        Ok(Self {
            pcbs,
            elapsed: 0,
            total_work,
        })
    }

    /// Run `pid` for up to `duration` and charge wait to every other
    /// unfinished process
    ///
    /// Returns the time actually run. Selecting a finished or unknown
    /// process is a no-op returning 0.
    pub fn advance(&mut self, pid: Pid, duration: Time) -> Time {
        let len = self.pcbs.len();
        let run = match self.pcbs.get_mut(pid) {
            Some(pcb) if pcb.is_runnable() => pcb.consume(duration),
            Some(_) => {
                trace!(pid, "Advance on finished process ignored");
                return 0;
            }
            None => {
                warn!(pid, len, "Advance on unknown process ignored");
                return 0;
            }
        };

        for other in self.pcbs.iter_mut().filter(|p| p.id() != pid) {
            other.charge_wait(run);
        }
        self.elapsed += run;

        run
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pcbs.len()
    }

    /// Always false for a constructed table
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pcbs.is_empty()
    }

    #[inline]
    pub fn get(&self, pid: Pid) -> Option<&Pcb> {
        self.pcbs.get(pid)
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Pcb> {
        self.pcbs.iter()
    }

    #[inline]
    pub fn pcbs(&self) -> &[Pcb] {
        &self.pcbs
    }

    /// Simulated time consumed so far
    #[inline]
    pub fn elapsed(&self) -> Time {
        self.elapsed
    }

    /// Sum of all requested bursts
    #[inline]
    pub fn total_work(&self) -> Time {
        self.total_work
    }

    /// Sum of burst still outstanding across all processes
    pub fn remaining_work(&self) -> Time {
        self.pcbs.iter().map(Pcb::burst_remaining).sum()
    }

    /// Check if every process has completed
    pub fn all_finished(&self) -> bool {
        self.pcbs.iter().all(Pcb::is_finished)
    }

    pub fn total_wait(&self) -> Time {
        self.pcbs.iter().map(Pcb::wait).sum()
    }

    /// Mean wait across all processes
    ///
    /// The only floating-point step in the simulator.
    pub fn average_wait(&self) -> f64 {
        self.total_wait() as f64 / self.pcbs.len() as f64
    }
}

impl Index<Pid> for ProcessTable {
    type Output = Pcb;

    fn index(&self, pid: Pid) -> &Self::Output {
        &self.pcbs[pid]
    }
}

impl<'a> IntoIterator for &'a ProcessTable {
    type Item = &'a Pcb;
    type IntoIter = std::slice::Iter<'a, Pcb>;

    fn into_iter(self) -> Self::IntoIter {
        self.pcbs.iter()
    }
}
