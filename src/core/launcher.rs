//! Starts the game as a detached child process.

use crate::models::error::Error;
use crate::utils::process::ProcessChecker;
use camino::Utf8Path;
use std::process::Command;
use sysinfo::System;
use tracing::info;

/// Spawns the configured executable with its working directory set to its own
/// folder (the mod loader resolves mods relative to it) and returns without
/// waiting on the child.
///
/// Refuses when no path is set, when the file is gone, and when the game is
/// already running.
pub fn launch(game_path: Option<&Utf8Path>) -> Result<(), Error> {
    let path = game_path.ok_or(Error::GamePathUnset)?;
    if !path.is_file() {
        return Err(Error::GameMissing(path.to_string()));
    }

    // Process paths reported by sysinfo are canonical.
    let canonical = dunce::canonicalize(path).unwrap_or_else(|_| path.as_std_path().to_path_buf());
    let mut sys = System::new();
    if ProcessChecker::is_running(&mut sys, &canonical) {
        return Err(Error::GameRunning);
    }

    let cwd = path.parent().unwrap_or_else(|| Utf8Path::new("."));
    Command::new(path)
        .current_dir(cwd)
        .spawn()
        .map_err(|e| Error::Launch(e.to_string()))?;
    info!("game started: {path}");
    Ok(())
}
