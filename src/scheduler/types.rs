/*!
 * Scheduler Types
 * Domain types for scheduling policies, quanta and dispatched slices
 */

use crate::core::errors::SimError;
use crate::core::limits::MIN_QUANTUM;
use crate::core::types::{Pid, SimResult, Time};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Time quantum for round-robin scheduling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TimeQuantum {
    units: Time,
}

impl TimeQuantum {
    /// Create new time quantum
    pub fn new(units: i64) -> SimResult<Self> {
        if units < MIN_QUANTUM {
            return Err(SimError::NonPositiveQuantum(units));
        }
        Ok(Self {
            units: units as Time,
        })
    }

    /// Get time units
    ///
    /// # Performance
    /// Hot path - read on every round-robin slice
    #[inline(always)]
    pub const fn get(&self) -> Time {
        self.units
    }
}

impl<'de> Deserialize<'de> for TimeQuantum {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let units = i64::deserialize(deserializer)?;
        Self::new(units).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for TimeQuantum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.units)
    }
}

/// Scheduling policy, selected once per run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum SchedulingPolicy {
    /// First-come-first-served in table order
    Fcfs,
    /// Round-robin anchored at process 0 with a fixed quantum
    RoundRobin { quantum: TimeQuantum },
}

pub use SchedulingPolicy as Policy;

impl SchedulingPolicy {
    /// Round-robin policy with a validated quantum
    pub fn round_robin(quantum: i64) -> SimResult<Self> {
        Ok(Self::RoundRobin {
            quantum: TimeQuantum::new(quantum)?,
        })
    }

    /// Resolve a selector token and its numeric arguments
    ///
    /// `fcfs` takes every argument as a burst. `rr` takes the first argument
    /// as the quantum and the rest as bursts. Returns the policy together
    /// with the burst slice.
    pub fn from_args<'a>(selector: &str, args: &'a [i64]) -> SimResult<(Self, &'a [i64])> {
        match selector.to_lowercase().as_str() {
            "fcfs" => {
                if args.is_empty() {
                    return Err(SimError::MissingArguments {
                        policy: "fcfs".into(),
                        usage: "<burst>...".into(),
                    });
                }
                Ok((Self::Fcfs, args))
            }
            "rr" | "round_robin" | "roundrobin" => match args {
                [quantum, bursts @ ..] if !bursts.is_empty() => {
                    Ok((Self::round_robin(*quantum)?, bursts))
                }
                _ => Err(SimError::MissingArguments {
                    policy: "rr".into(),
                    usage: "<quantum> <burst>...".into(),
                }),
            },
            _ => Err(SimError::UnknownPolicy(selector.to_string())),
        }
    }

    /// Convert to selector token
    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fcfs => "fcfs",
            Self::RoundRobin { .. } => "rr",
        }
    }
}

impl fmt::Display for SchedulingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fcfs => write!(f, "FCFS"),
            Self::RoundRobin { quantum } => write!(f, "RR({})", quantum),
        }
    }
}

/// One contiguous run of a single process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Slice {
    pub pid: Pid,
    pub start: Time,
    pub duration: Time,
}

impl Slice {
    #[inline]
    pub const fn end(&self) -> Time {
        self.start + self.duration
    }
}
