//! Export Batch
//!
//! One end-to-end run: rebuild the tool, query the active skill set,
//! filter to the target origin, and export each selected skill in
//! discovery order. Sequential and fail-fast throughout -- at most one
//! child process runs at a time, and the first strict failure ends the
//! batch with the child's own exit status.

use anyhow::Result;
use chrono::Utc;
use colored::Colorize;
use tracing::{debug, warn};

use crate::listing::{parse_listing, with_origin, SkillRecord};
use crate::runner::{run_strict, ToolRunner};

/// Origin tag of skills that ship with the tool itself.
pub const BUILTIN_ORIGIN: &str = "built";

/// Rebuild the tool binary before touching the registry, so the export
/// reflects the current skill set rather than a stale build.
pub fn build_tool(runner: &dyn ToolRunner) -> Result<()> {
    progress("Building", "tool binary");
    run_strict(runner, &["build"])?;
    Ok(())
}

/// Query the registry for the active skill set.
///
/// Returns `None` when the list command exits non-zero: its stderr is
/// relayed and the batch ends with nothing to export, but the process
/// itself still exits zero. Build and export failures do signal a
/// non-zero exit; this path deliberately does not.
pub fn query_active(runner: &dyn ToolRunner) -> Result<Option<Vec<SkillRecord>>> {
    let output = runner.run(&["skill", "list", "--active"])?;

    if !output.success() {
        warn!(exit_code = output.exit_code, "skill listing failed");
        eprint!("{}", output.stderr);
        return Ok(None);
    }

    Ok(Some(parse_listing(&output.stdout)))
}

/// Export each skill in order, stopping at the first failure.
///
/// Skills after a failed export are never attempted; skills before it
/// stay exported. There is no rollback.
pub fn export_all(runner: &dyn ToolRunner, names: &[String]) -> Result<()> {
    for name in names {
        progress("Exporting", name);
        run_strict(runner, &["skill", "export", "--markdown", name])?;
    }
    Ok(())
}

/// Run one full batch: build, query, filter, export.
pub fn run_batch(runner: &dyn ToolRunner, origin: &str) -> Result<()> {
    build_tool(runner)?;

    let records = match query_active(runner)? {
        Some(records) => records,
        None => return Ok(()),
    };

    let selected = with_origin(records, origin);
    debug!(count = selected.len(), origin, "skills selected for export");

    if selected.is_empty() {
        progress("Done", &format!("no {origin} skills to export"));
        return Ok(());
    }

    let names: Vec<String> = selected.into_iter().map(|r| r.name).collect();
    export_all(runner, &names)?;

    progress("Done", &format!("{} skills exported", names.len()));
    Ok(())
}

/// Timestamped progress line on stdout.
fn progress(verb: &str, detail: &str) {
    let now = Utc::now().to_rfc3339();
    println!("[{}] {} {}", now, verb.green().bold(), detail);
}
