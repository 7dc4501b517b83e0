/*!
 * Process Control Block
 * Per-process scheduling state for one simulation run
 */

use crate::core::types::{Pid, Time};
use serde::Serialize;

/// Process control block
///
/// `burst_remaining` only ever decreases and `wait` only ever increases.
/// Both are mutated exclusively through [`ProcessTable::advance`].
///
/// [`ProcessTable::advance`]: super::ProcessTable::advance
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct Pcb {
    id: Pid,
    burst: Time,
    burst_remaining: Time,
    wait: Time,
}

impl Pcb {
    #[inline]
    #[must_use]
    pub(crate) const fn new(id: Pid, burst: Time) -> Self {
        Self {
            id,
            burst,
            burst_remaining: burst,
            wait: 0,
        }
    }

    #[inline(always)]
    pub const fn id(&self) -> Pid {
        self.id
    }

    /// Originally requested CPU burst
    #[inline(always)]
    pub const fn burst(&self) -> Time {
        self.burst
    }

    #[inline(always)]
    pub const fn burst_remaining(&self) -> Time {
        self.burst_remaining
    }

    /// Time spent ready but not running
    #[inline(always)]
    pub const fn wait(&self) -> Time {
        self.wait
    }

    /// Check if process has completed its burst
    ///
    /// # Performance
    /// Hot path - checked for every process on every advance
    #[inline(always)]
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.burst_remaining == 0
    }

    /// Check if process can still be selected
    #[inline(always)]
    #[must_use]
    pub const fn is_runnable(&self) -> bool {
        !self.is_finished()
    }

    /// Run for up to `amount`, returning the time actually consumed
    #[inline]
    pub(crate) fn consume(&mut self, amount: Time) -> Time {
        let run = amount.min(self.burst_remaining);
        self.burst_remaining -= run;
        run
    }

    /// Charge wait time; finished processes keep their frozen wait
    #[inline]
    pub(crate) fn charge_wait(&mut self, amount: Time) {
        if self.is_runnable() {
            self.wait += amount;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_pcb() {
        let pcb = Pcb::new(3, 7);
        assert_eq!(pcb.id(), 3);
        assert_eq!(pcb.burst(), 7);
        assert_eq!(pcb.burst_remaining(), 7);
        assert_eq!(pcb.wait(), 0);
        assert!(pcb.is_runnable());
    }

    #[test]
    fn test_consume_clamps_to_remaining() {
        let mut pcb = Pcb::new(0, 3);
        assert_eq!(pcb.consume(2), 2);
        assert_eq!(pcb.consume(5), 1);
        assert!(pcb.is_finished());
        assert_eq!(pcb.consume(1), 0);
        assert_eq!(pcb.burst(), 3);
    }

    #[test]
    fn test_finished_wait_is_frozen() {
        let mut pcb = Pcb::new(0, 1);
        pcb.charge_wait(4);
        pcb.consume(1);
        pcb.charge_wait(10);
        assert_eq!(pcb.wait(), 4);
    }
}
