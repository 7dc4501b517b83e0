/*!
 * Process Module
 * Process control blocks and the process table the engine mutates
 */

pub mod pcb;
pub mod table;

// Re-export for convenience
pub use pcb::Pcb;
pub use table::ProcessTable;
