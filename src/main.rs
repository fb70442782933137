//! Cratos Skill Exporter
//!
//! Entry point: parse CLI args, set up logging, and run one export
//! batch against the external `cratos` binary.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use skill_export::batch::{run_batch, BUILTIN_ORIGIN};
use skill_export::runner::{CommandFailed, CratosProcess};

/// Bulk-export skills from the Cratos registry as markdown
#[derive(Parser, Debug)]
#[command(
    name = "skill-export",
    version,
    about = "Bulk-export skills from the Cratos registry as markdown"
)]
struct Cli {
    /// Path or name of the cratos binary to drive
    #[arg(long, default_value = "cratos")]
    tool: String,

    /// Provenance tag to export
    #[arg(long, default_value = BUILTIN_ORIGIN)]
    origin: String,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let runner = CratosProcess::new(&cli.tool);

    if let Err(err) = run_batch(&runner, &cli.origin) {
        eprintln!("skill-export: {err:#}");

        // A failed child terminates us with its own exit status;
        // anything else (e.g. the binary was not found) is a plain 1.
        let code = err
            .downcast_ref::<CommandFailed>()
            .map(|f| f.exit_code)
            .unwrap_or(1);
        std::process::exit(code);
    }
}
