/*!
 * Core Types
 * Common types used across the simulator
 */

/// Process ID type (equal to the process's position in the table)
pub type Pid = usize;

/// Simulated time unit for bursts, waits and the clock
pub type Time = u64;

/// Common result type for simulator operations
pub type SimResult<T> = Result<T, super::errors::SimError>;
