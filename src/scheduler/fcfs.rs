/*!
 * First-Come-First-Served
 * Runs each process to completion in table order
 */

use super::traits::Dispatcher;
use super::types::Slice;
use crate::core::types::{Pid, Time};
use crate::process::ProcessTable;

/// FCFS dispatcher
///
/// Single pass over the table; each process runs its whole remaining burst
/// in one slice and is never revisited.
#[derive(Debug, Clone, Default)]
pub struct Fcfs {
    cursor: Pid,
}

impl Fcfs {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Dispatcher for Fcfs {
    fn step(&mut self, table: &mut ProcessTable) -> Option<Slice> {
        while self.cursor < table.len() {
            let pid = self.cursor;
            self.cursor += 1;

            let remaining = table[pid].burst_remaining();
            if remaining == 0 {
                continue;
            }

            let start = table.elapsed();
            let duration = table.advance(pid, remaining);
            return Some(Slice {
                pid,
                start,
                duration,
            });
        }
        None
    }

    fn name(&self) -> &'static str {
        "fcfs"
    }
}

/// Run every process to completion in id order, returning total elapsed time
pub fn run_fcfs(table: &mut ProcessTable) -> Time {
    Fcfs::new().run(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fcfs_basic() {
        let mut table = ProcessTable::from_bursts(&[5, 3, 8]).unwrap();
        assert_eq!(run_fcfs(&mut table), 16);

        let waits: Vec<Time> = table.iter().map(|p| p.wait()).collect();
        assert_eq!(waits, vec![0, 5, 8]);
        assert!(table.all_finished());
    }

    #[test]
    fn test_fcfs_slices_follow_table_order() {
        let mut table = ProcessTable::from_bursts(&[2, 4]).unwrap();
        let mut fcfs = Fcfs::new();

        assert_eq!(
            fcfs.step(&mut table),
            Some(Slice { pid: 0, start: 0, duration: 2 })
        );
        assert_eq!(
            fcfs.step(&mut table),
            Some(Slice { pid: 1, start: 2, duration: 4 })
        );
        assert_eq!(fcfs.step(&mut table), None);
        assert_eq!(fcfs.step(&mut table), None);
    }

    #[test]
    fn test_fcfs_skips_finished() {
        let mut table = ProcessTable::from_bursts(&[3, 2, 1]).unwrap();
        table.advance(1, 2);

        let total = run_fcfs(&mut table);
        assert_eq!(total, 4);
        assert_eq!(table[1].wait(), 0);
        assert_eq!(table[0].wait(), 2);
        assert_eq!(table[2].wait(), 2 + 3);
    }
}
