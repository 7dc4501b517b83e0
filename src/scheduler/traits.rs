/*!
 * Scheduler Traits
 * Interface shared by the scheduling disciplines
 */

use super::types::Slice;
use crate::core::types::Time;
use crate::process::ProcessTable;

/// Step-wise scheduling discipline
///
/// Each call to [`step`](Dispatcher::step) selects one process and runs it
/// for one slice through [`ProcessTable::advance`]. `None` means no runnable
/// process remains, and every later call returns `None` as well.
pub trait Dispatcher {
    /// Select and run the next slice
    fn step(&mut self, table: &mut ProcessTable) -> Option<Slice>;

    /// Short name for logging
    fn name(&self) -> &'static str;

    /// Run until no runnable process remains, returning total elapsed time
    fn run(&mut self, table: &mut ProcessTable) -> Time {
        let mut total = 0;
        while let Some(slice) = self.step(table) {
            total += slice.duration;
        }
        total
    }
}
