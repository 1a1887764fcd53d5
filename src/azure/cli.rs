//! Azure CLI command execution.
//!
//! Runs `az` commands and returns their stdout.

use crate::config::MAX_AZ_OUTPUT_BYTES;
use colored::Colorize;
use itertools::Itertools;
use std::error::Error;
use std::process::Command;

/// Run `program` with `args` and return its stdout.
///
/// Each entry of `args` reaches the program as one argument, no shell or
/// quoting is involved.
///
/// # Arguments
/// * `program` - Executable to run, e.g. `az`
/// * `args` - Arguments in order
///
/// # Returns
/// * `Ok(String)` - The stdout output on success
/// * `Err` - If the command fails, `program` is empty, or it prints more than
///   [`MAX_AZ_OUTPUT_BYTES`]
pub fn run_args(program: &str, args: &[&str]) -> Result<String, Box<dyn Error>> {
    let cmd = std::iter::once(program).chain(args.iter().copied()).join(" ");
    log::debug!("run({cmd})", cmd = cmd.on_blue());
    if program.is_empty() {
        return Err("Empty command".into());
    }

    let output = Command::new(program).args(args).output().map_err(|e| {
        log::error!("Command execution failed: {}", e);
        format!("Failed to execute '{program}': {e}")
    })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        log::trace!(
            "code={code:?}, status={status}\n┎######\nstderr=\n{stderr}\n┖######",
            code = output.status.code(),
            status = output.status,
            stderr = stderr.red()
        );
        log::warn!(
            "{failed} to run {cmd}",
            failed = "failed".on_red(),
            cmd = cmd.on_blue()
        );
        return Err(format!("ERROR running: {stderr}").into());
    }

    log::debug!("Success output.stdout.len(): {}", output.stdout.len());
    if output.stdout.len() > MAX_AZ_OUTPUT_BYTES {
        return Err(format!(
            "Response too large: {} bytes for command: {:?}",
            output.stdout.len(),
            cmd
        )
        .into());
    }

    let stdout = String::from_utf8(output.stdout).map_err(|e| format!("Invalid UTF-8: {}", e))?;
    Ok(stdout)
}
