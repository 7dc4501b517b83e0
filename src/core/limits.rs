/*!
 * Simulator Limits and Constants
 *
 * Centralized location for fixed thresholds, output settings and
 * environment variable names.
 */

// =============================================================================
// SCHEDULING
// =============================================================================

/// Smallest accepted time quantum for round-robin
pub const MIN_QUANTUM: i64 = 1;

/// Smallest accepted burst length
pub const MIN_BURST: i64 = 1;

/// Process that round-robin always attempts to run first
pub const RR_ANCHOR_PID: usize = 0;

// =============================================================================
// REPORTING
// =============================================================================

/// Decimal places used when printing the average wait
pub const AVERAGE_WAIT_PRECISION: usize = 2;

/// Separator line used in the per-process dump
pub const PCB_SEPARATOR: &str = "---------------";

// =============================================================================
// ENVIRONMENT
// =============================================================================

/// Enables JSON log output when set to `1` or `true`
pub const ENV_TRACE_JSON: &str = "SCHED_TRACE_JSON";

/// Default tracing filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";
