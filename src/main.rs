/*!
 * CPU Scheduling Simulator - Main Entry Point
 *
 * Usage:
 * - cpusim fcfs <burst>...
 * - cpusim rr <quantum> <burst>...
 */

use clap::Parser;
use cpu_sched_sim::{init_tracing, Cli};
use tracing::info;

fn main() -> miette::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    info!(algorithm = %cli.algorithm, args = cli.args.len(), "Simulator starting");

    let output = match cli.execute() {
        Ok(output) => output,
        Err(err) => {
            if let Some(body) = cli.render_error(&err) {
                println!("{}", body);
            }
            return Err(err);
        }
    };
    print!("{}", output);
    if !output.ends_with('\n') {
        println!();
    }

    Ok(())
}
