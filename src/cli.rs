/*!
 * Command Line
 * Argument model and the end-to-end run behind the binary
 */

use crate::core::errors::{SerializableError, SimError};
use crate::process::ProcessTable;
use crate::report::Report;
use crate::scheduler::Policy;
use clap::{Parser, ValueEnum};
use miette::IntoDiagnostic;

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Simulate FCFS and round-robin CPU scheduling over fixed burst lengths
#[derive(Debug, Parser)]
#[command(name = "cpusim", version)]
pub struct Cli {
    /// Scheduling algorithm: fcfs or rr
    pub algorithm: String,

    /// fcfs: <burst>...   rr: <quantum> <burst>...
    #[arg(allow_negative_numbers = true)]
    pub args: Vec<i64>,

    /// Report format
    #[arg(long, value_enum, env = "SCHED_FORMAT", default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Include the dispatch timeline in the report
    #[arg(long, env = "SCHED_TIMELINE")]
    pub timeline: bool,
}

impl Cli {
    /// Validate, simulate and render the report
    ///
    /// All input validation happens before the table is built, so an error
    /// never leaves a partially simulated run behind.
    pub fn execute(&self) -> miette::Result<String> {
        let (policy, bursts) = Policy::from_args(&self.algorithm, &self.args)?;
        let mut table = ProcessTable::from_bursts(bursts)?;

        let outcome = policy.simulate(&mut table);
        let mut report = Report::new(&table, outcome);
        if !self.timeline {
            report = report.without_timeline();
        }

        match self.format {
            OutputFormat::Text => Ok(report.to_string()),
            OutputFormat::Json => report.to_json().into_diagnostic(),
        }
    }

    /// Machine-readable form of a failed run
    ///
    /// Only produced for `--format json` and input errors; the diagnostic
    /// itself is still rendered on stderr.
    pub fn render_error(&self, err: &miette::Report) -> Option<String> {
        if self.format != OutputFormat::Json {
            return None;
        }
        let sim = err.downcast_ref::<SimError>()?;
        serde_json::to_string_pretty(&SerializableError::from(sim.clone())).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("cpusim").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_parse_rr() {
        let cli = parse(&["rr", "2", "5", "3", "8"]);
        assert_eq!(cli.algorithm, "rr");
        assert_eq!(cli.args, vec![2, 5, 3, 8]);
        assert_eq!(cli.format, OutputFormat::Text);
        assert!(!cli.timeline);
    }

    #[test]
    fn test_parse_negative_numbers() {
        let cli = parse(&["fcfs", "4", "-1"]);
        assert_eq!(cli.args, vec![4, -1]);
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        assert!(Cli::try_parse_from(["cpusim", "fcfs", "abc"]).is_err());
    }

    #[test]
    fn test_execute_rr_text() {
        let out = parse(&["rr", "2", "5", "3", "8"]).execute().unwrap();
        assert!(out.starts_with("Using RR(2)\n"));
        assert!(out.contains("Total time: 16\n"));
        assert!(out.ends_with("Average wait time: 7.00\n"));
    }

    #[test]
    fn test_execute_json_with_timeline() {
        let out = parse(&["--format", "json", "--timeline", "fcfs", "1", "2"])
            .execute()
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["total_time"], 3);
        assert_eq!(value["timeline"].as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn test_render_error_json() {
        let cli = parse(&["--format", "json", "rr", "0", "5"]);
        let err = cli.execute().unwrap_err();

        let out = cli.render_error(&err).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["error_type"], "invalid_input");
        assert_eq!(value["message"], "Time quantum must be positive, got 0");
    }

    #[test]
    fn test_render_error_text_format_is_none() {
        let cli = parse(&["rr", "0", "5"]);
        let err = cli.execute().unwrap_err();
        assert_eq!(cli.render_error(&err), None);
    }

    #[test]
    fn test_execute_reports_invalid_input() {
        let err = parse(&["rr", "0", "5"]).execute().unwrap_err();
        assert_eq!(
            err.downcast_ref::<SimError>(),
            Some(&SimError::NonPositiveQuantum(0))
        );

        let err = parse(&["fcfs", "3", "0"]).execute().unwrap_err();
        assert_eq!(
            err.downcast_ref::<SimError>(),
            Some(&SimError::NonPositiveBurst { pid: 1, value: 0 })
        );

        let err = parse(&["sjf", "3"]).execute().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SimError>(),
            Some(SimError::UnknownPolicy(_))
        ));
    }
}
